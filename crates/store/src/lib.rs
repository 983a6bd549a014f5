//! SQLite persistence layer for the communication tracker.
//!
//! This crate provides async CRUD over the three record collections
//! (companies, communication methods, communications) using SQLx with
//! SQLite. Records are loosely coupled: the only referential check is the
//! write-time company existence check on the communication log.
//!
//! # Example
//!
//! ```no_run
//! use store::{models::CompanyInput, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let store = Store::connect("sqlite:tracker.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     let acme = store::company::create(
//!         store.pool(),
//!         &CompanyInput {
//!             name: "Acme".to_string(),
//!             location: "Berlin".to_string(),
//!             linkedin_profile: String::new(),
//!             emails: vec!["hello@acme.example".to_string()],
//!             phone_numbers: Vec::new(),
//!             comments: String::new(),
//!             communication_periodicity: 14,
//!         },
//!     )
//!     .await?;
//!     println!("created {}", acme.id);
//!
//!     Ok(())
//! }
//! ```

pub mod communication;
pub mod company;
pub mod error;
pub mod method;
pub mod models;
pub mod validation;

pub use error::{Result, StoreError};
pub use models::{BulkLogReport, CommunicationInput, CompanyInput, LogEntry, MethodInput, RejectedLog};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Store connection wrapper.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Default pool size for store connections.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to store: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is
    /// up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running store migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn test_store() -> Store {
        // One connection: every pooled connection gets its own in-memory db.
        let store = Store::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn company_input(name: &str, periodicity: i64) -> CompanyInput {
        CompanyInput {
            name: name.to_string(),
            location: "Berlin".to_string(),
            linkedin_profile: "https://linkedin.com/company/acme".to_string(),
            emails: vec!["a@acme.example".to_string(), "b@acme.example".to_string()],
            phone_numbers: vec!["+49 30 1234".to_string()],
            comments: "key account".to_string(),
            communication_periodicity: periodicity,
        }
    }

    fn entry(kind: &str, date: (i32, u32, u32)) -> LogEntry {
        LogEntry {
            kind: kind.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            notes: "quarterly check-in".to_string(),
        }
    }

    #[tokio::test]
    async fn test_company_crud() {
        let store = test_store().await;
        let pool = store.pool();

        // Create
        let acme = company::create(pool, &company_input("Acme", 14)).await.unwrap();
        assert!(!acme.id.is_empty());

        // Read back, list columns included
        let listed = company::list(pool).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], acme);
        assert_eq!(listed[0].emails.len(), 2);

        // Update
        let updated = company::update(pool, &acme.id, &company_input("Acme GmbH", 7))
            .await
            .unwrap();
        assert_eq!(updated.name, "Acme GmbH");
        assert_eq!(updated.communication_periodicity, 7);
        assert_eq!(company::list(pool).await.unwrap()[0].name, "Acme GmbH");

        // Delete
        company::delete(pool, &acme.id).await.unwrap();
        assert!(company::list(pool).await.unwrap().is_empty());

        // Missing ids surface as NotFound
        let result = company::delete(pool, &acme.id).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        let result = company::update(pool, "missing", &company_input("X", 1)).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_company_validation_runs_before_write() {
        let store = test_store().await;

        let result = company::create(store.pool(), &company_input("Acme", 0)).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(company::list(store.pool()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_method_crud() {
        let store = test_store().await;
        let pool = store.pool();

        let email = method::create(
            pool,
            &MethodInput {
                name: "Email".to_string(),
                description: "Plain email".to_string(),
                sequence: 2,
                mandatory: true,
            },
        )
        .await
        .unwrap();
        let _call = method::create(
            pool,
            &MethodInput {
                name: "Call".to_string(),
                description: String::new(),
                sequence: 1,
                mandatory: false,
            },
        )
        .await
        .unwrap();

        // Ordered by sequence hint
        let listed = method::list(pool).await.unwrap();
        assert_eq!(listed[0].name, "Call");
        assert_eq!(listed[1].name, "Email");
        assert!(listed[1].mandatory);

        method::delete(pool, &email.id).await.unwrap();
        assert_eq!(method::list(pool).await.unwrap().len(), 1);

        let result = method::update(
            pool,
            "missing",
            &MethodInput {
                name: "X".to_string(),
                description: String::new(),
                sequence: 0,
                mandatory: false,
            },
        )
        .await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_single_communication_checks_company_exists() {
        let store = test_store().await;
        let pool = store.pool();

        let acme = company::create(pool, &company_input("Acme", 14)).await.unwrap();

        let logged = communication::create(
            pool,
            &CommunicationInput {
                company_id: acme.id.clone(),
                entry: entry("Email", (2024, 1, 1)),
            },
        )
        .await
        .unwrap();
        assert_eq!(logged.company_id, acme.id);
        assert_eq!(logged.kind, "Email");

        let result = communication::create(
            pool,
            &CommunicationInput {
                company_id: "ghost".to_string(),
                entry: entry("Email", (2024, 1, 1)),
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::UnknownCompany(_)))
        ));
        assert_eq!(communication::list(pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bulk_log_reports_per_item_outcomes() {
        let store = test_store().await;
        let pool = store.pool();

        let acme = company::create(pool, &company_input("Acme", 14)).await.unwrap();
        let globex = company::create(pool, &company_input("Globex", 7)).await.unwrap();

        let ids = vec![
            acme.id.clone(),
            "ghost".to_string(),
            globex.id.clone(),
            acme.id.clone(), // duplicate, collapsed
        ];
        let report = communication::log_bulk(pool, &ids, &entry("Call", (2024, 2, 1)))
            .await
            .unwrap();

        assert_eq!(report.created.len(), 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].company_id, "ghost");
        for record in &report.created {
            assert_eq!(record.kind, "Call");
            assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
            assert_eq!(record.notes, "quarterly check-in");
        }
        let mut company_ids: Vec<&str> =
            report.created.iter().map(|c| c.company_id.as_str()).collect();
        company_ids.sort();
        let mut expected = vec![acme.id.as_str(), globex.id.as_str()];
        expected.sort();
        assert_eq!(company_ids, expected);

        // Exactly the accepted records hit the store.
        assert_eq!(communication::list(pool).await.unwrap().len(), 2);
        assert_eq!(
            communication::list_for_company(pool, &acme.id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_bulk_log_rejects_blank_type_without_writing() {
        let store = test_store().await;
        let pool = store.pool();

        let acme = company::create(pool, &company_input("Acme", 14)).await.unwrap();
        let result =
            communication::log_bulk(pool, &[acme.id.clone()], &entry("", (2024, 2, 1))).await;

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(communication::list(pool).await.unwrap().is_empty());
    }
}
