//! Core scheduling and aggregation logic for the communication tracker.
//!
//! This crate is pure: it performs no I/O and knows nothing about the store
//! or the HTTP layer. It defines:
//!
//! - [`models`] - Shared domain types (companies, methods, communications)
//! - [`schedule`] - Next-due derivation and overdue/due-today status
//! - [`notify`] - The notification list derived from the full data set
//! - [`report`] - Frequency, effectiveness, and overdue-magnitude aggregates
//! - [`Session`] - An in-memory snapshot that recomputes notifications on
//!   every mutation and publishes them on a watch channel
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use engine::models::{Communication, Company};
//! use engine::schedule;
//!
//! let company = Company {
//!     id: "acme".to_string(),
//!     communication_periodicity: 14,
//!     ..Company::default()
//! };
//! let history = vec![Communication {
//!     id: "c1".to_string(),
//!     company_id: "acme".to_string(),
//!     kind: "Email".to_string(),
//!     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     notes: String::new(),
//! }];
//!
//! let next = schedule::next_scheduled(&company, &history).unwrap();
//! assert_eq!(next.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! ```

pub mod models;
pub mod notify;
pub mod report;
pub mod schedule;
mod session;

pub use models::{
    Communication, CommunicationMethod, Company, CompanyStatus, NextScheduled, Notification,
    NotificationKind,
};
pub use session::Session;
