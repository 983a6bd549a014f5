//! Communication method CRUD operations.

use sqlx::SqlitePool;
use uuid::Uuid;

use engine::models::CommunicationMethod;

use crate::error::{Result, StoreError};
use crate::models::MethodInput;
use crate::validation;

#[derive(sqlx::FromRow)]
struct MethodRow {
    id: String,
    name: String,
    description: String,
    sequence: i64,
    mandatory: bool,
}

impl From<MethodRow> for CommunicationMethod {
    fn from(row: MethodRow) -> Self {
        CommunicationMethod {
            id: row.id,
            name: row.name,
            description: row.description,
            sequence: row.sequence,
            mandatory: row.mandatory,
        }
    }
}

/// Create a new communication method. The store assigns the id.
pub async fn create(pool: &SqlitePool, input: &MethodInput) -> Result<CommunicationMethod> {
    validation::validate_method(input)?;

    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO communication_methods (id, name, description, sequence, mandatory)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.sequence)
    .bind(input.mandatory)
    .execute(pool)
    .await?;

    Ok(assemble(id, input))
}

/// List all methods ordered by their sequence hint.
pub async fn list(pool: &SqlitePool) -> Result<Vec<CommunicationMethod>> {
    let rows = sqlx::query_as::<_, MethodRow>(
        r#"
        SELECT id, name, description, sequence, mandatory
        FROM communication_methods
        ORDER BY sequence, rowid
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(CommunicationMethod::from).collect())
}

/// Replace a method's fields.
pub async fn update(
    pool: &SqlitePool,
    id: &str,
    input: &MethodInput,
) -> Result<CommunicationMethod> {
    validation::validate_method(input)?;

    let result = sqlx::query(
        r#"
        UPDATE communication_methods
        SET name = ?, description = ?, sequence = ?, mandatory = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.sequence)
    .bind(input.mandatory)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound {
            entity: "Communication method",
            id: id.to_string(),
        });
    }

    Ok(assemble(id.to_string(), input))
}

/// Delete a method by id. Communications tagged with its name are untouched.
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM communication_methods
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound {
            entity: "Communication method",
            id: id.to_string(),
        });
    }

    Ok(())
}

fn assemble(id: String, input: &MethodInput) -> CommunicationMethod {
    CommunicationMethod {
        id,
        name: input.name.clone(),
        description: input.description.clone(),
        sequence: input.sequence,
        mandatory: input.mandatory,
    }
}
