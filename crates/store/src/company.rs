//! Company CRUD operations.

use sqlx::SqlitePool;
use uuid::Uuid;

use engine::models::Company;

use crate::error::{Result, StoreError};
use crate::models::CompanyInput;
use crate::validation;

/// Row shape as stored; the list columns hold JSON arrays.
#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: String,
    name: String,
    location: String,
    linkedin_profile: String,
    emails: String,
    phone_numbers: String,
    comments: String,
    communication_periodicity: i64,
}

impl TryFrom<CompanyRow> for Company {
    type Error = StoreError;

    fn try_from(row: CompanyRow) -> Result<Company> {
        Ok(Company {
            id: row.id,
            name: row.name,
            location: row.location,
            linkedin_profile: row.linkedin_profile,
            emails: serde_json::from_str(&row.emails)?,
            phone_numbers: serde_json::from_str(&row.phone_numbers)?,
            comments: row.comments,
            communication_periodicity: row.communication_periodicity,
        })
    }
}

/// Create a new company. The store assigns the id.
pub async fn create(pool: &SqlitePool, input: &CompanyInput) -> Result<Company> {
    validation::validate_company(input)?;

    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO companies (
            id, name, location, linkedin_profile, emails, phone_numbers,
            comments, communication_periodicity
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&input.name)
    .bind(&input.location)
    .bind(&input.linkedin_profile)
    .bind(serde_json::to_string(&input.emails)?)
    .bind(serde_json::to_string(&input.phone_numbers)?)
    .bind(&input.comments)
    .bind(input.communication_periodicity)
    .execute(pool)
    .await?;

    Ok(assemble(id, input))
}

/// List all companies in store order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Company>> {
    let rows = sqlx::query_as::<_, CompanyRow>(
        r#"
        SELECT id, name, location, linkedin_profile, emails, phone_numbers,
               comments, communication_periodicity
        FROM companies
        ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Company::try_from).collect()
}

/// Replace a company's fields.
pub async fn update(pool: &SqlitePool, id: &str, input: &CompanyInput) -> Result<Company> {
    validation::validate_company(input)?;

    let result = sqlx::query(
        r#"
        UPDATE companies
        SET name = ?, location = ?, linkedin_profile = ?, emails = ?,
            phone_numbers = ?, comments = ?, communication_periodicity = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.location)
    .bind(&input.linkedin_profile)
    .bind(serde_json::to_string(&input.emails)?)
    .bind(serde_json::to_string(&input.phone_numbers)?)
    .bind(&input.comments)
    .bind(input.communication_periodicity)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound {
            entity: "Company",
            id: id.to_string(),
        });
    }

    Ok(assemble(id.to_string(), input))
}

/// Delete a company by id. Communications that reference it are kept.
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM companies
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound {
            entity: "Company",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Check whether a company id exists.
pub async fn exists(pool: &SqlitePool, id: &str) -> Result<bool> {
    let found = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT 1
        FROM companies
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(found.is_some())
}

fn assemble(id: String, input: &CompanyInput) -> Company {
    Company {
        id,
        name: input.name.clone(),
        location: input.location.clone(),
        linkedin_profile: input.linkedin_profile.clone(),
        emails: input.emails.clone(),
        phone_numbers: input.phone_numbers.clone(),
        comments: input.comments.clone(),
        communication_periodicity: input.communication_periodicity,
    }
}
