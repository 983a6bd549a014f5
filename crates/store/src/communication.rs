//! Communication log operations.
//!
//! Communications are append-only: there is no update or delete. Writes
//! confirm the referenced company exists first; the schema itself does not
//! enforce the reference.

use std::collections::HashSet;

use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use engine::models::Communication;

use crate::error::Result;
use crate::models::{BulkLogReport, CommunicationInput, LogEntry, RejectedLog};
use crate::validation::{self, ValidationError};
use crate::company;

#[derive(sqlx::FromRow)]
struct CommunicationRow {
    id: String,
    company_id: String,
    #[sqlx(rename = "type")]
    kind: String,
    date: chrono::NaiveDate,
    notes: String,
}

impl From<CommunicationRow> for Communication {
    fn from(row: CommunicationRow) -> Self {
        Communication {
            id: row.id,
            company_id: row.company_id,
            kind: row.kind,
            date: row.date,
            notes: row.notes,
        }
    }
}

/// Log a single communication against one company.
pub async fn create(pool: &SqlitePool, input: &CommunicationInput) -> Result<Communication> {
    validation::validate_communication(input)?;
    if !company::exists(pool, &input.company_id).await? {
        return Err(ValidationError::UnknownCompany(input.company_id.clone()).into());
    }

    let record = Communication {
        id: Uuid::new_v4().to_string(),
        company_id: input.company_id.clone(),
        kind: input.entry.kind.clone(),
        date: input.entry.date,
        notes: input.entry.notes.clone(),
    };

    sqlx::query(
        r#"
        INSERT INTO communications (id, company_id, type, date, notes)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.company_id)
    .bind(&record.kind)
    .bind(record.date)
    .bind(&record.notes)
    .execute(pool)
    .await?;

    Ok(record)
}

/// List the full communication log in store order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Communication>> {
    let rows = sqlx::query_as::<_, CommunicationRow>(
        r#"
        SELECT id, company_id, type, date, notes
        FROM communications
        ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Communication::from).collect())
}

/// List one company's communications in store order.
pub async fn list_for_company(pool: &SqlitePool, company_id: &str) -> Result<Vec<Communication>> {
    let rows = sqlx::query_as::<_, CommunicationRow>(
        r#"
        SELECT id, company_id, type, date, notes
        FROM communications
        WHERE company_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(company_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Communication::from).collect())
}

/// Log one communication against a batch of companies.
///
/// Ids that reference no stored company are rejected up front and reported
/// per id; the accepted ids are written in a single transaction so they
/// become visible together or not at all. Duplicate ids are collapsed.
pub async fn log_bulk(
    pool: &SqlitePool,
    company_ids: &[String],
    entry: &LogEntry,
) -> Result<BulkLogReport> {
    validation::validate_log_entry(entry)?;

    let mut seen = HashSet::new();
    let mut created = Vec::new();
    let mut rejected = Vec::new();

    let mut accepted = Vec::new();
    for company_id in company_ids {
        if !seen.insert(company_id.clone()) {
            continue;
        }
        if company::exists(pool, company_id).await? {
            accepted.push(company_id.clone());
        } else {
            rejected.push(RejectedLog {
                company_id: company_id.clone(),
                reason: ValidationError::UnknownCompany(company_id.clone()).to_string(),
            });
        }
    }

    let mut tx = pool.begin().await?;
    for company_id in accepted {
        let record = Communication {
            id: Uuid::new_v4().to_string(),
            company_id,
            kind: entry.kind.clone(),
            date: entry.date,
            notes: entry.notes.clone(),
        };

        sqlx::query(
            r#"
            INSERT INTO communications (id, company_id, type, date, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.company_id)
        .bind(&record.kind)
        .bind(record.date)
        .bind(&record.notes)
        .execute(&mut *tx)
        .await?;

        created.push(record);
    }
    tx.commit().await?;

    info!(
        created = created.len(),
        rejected = rejected.len(),
        kind = %entry.kind,
        "Bulk communication logged"
    );

    Ok(BulkLogReport { created, rejected })
}
