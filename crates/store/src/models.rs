//! Write-side input types and the bulk logging report.
//!
//! The stored record types themselves live in [`engine::models`]; these are
//! the shapes accepted by the write paths (the store assigns ids).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use engine::models::Communication;

/// Fields for creating or replacing a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin_profile: String,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub comments: String,
    pub communication_periodicity: i64,
}

/// Fields for creating or replacing a communication method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sequence: i64,
    #[serde(default)]
    pub mandatory: bool,
}

/// The shared payload of a log operation: what happened and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

/// Fields for logging a single communication against one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationInput {
    pub company_id: String,
    #[serde(flatten)]
    pub entry: LogEntry,
}

/// Per-item outcome of a bulk log operation.
///
/// Accepted ids are written in one transaction, so `created` appears in the
/// store all together or not at all; `rejected` enumerates the ids that were
/// refused, with reasons. There is no silent partial application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkLogReport {
    pub created: Vec<Communication>,
    pub rejected: Vec<RejectedLog>,
}

/// One company id refused by a bulk log operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedLog {
    pub company_id: String,
    pub reason: String,
}
