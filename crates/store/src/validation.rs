//! Input validation for store writes.
//!
//! Bad input is rejected here before any SQL runs; the API layer surfaces
//! these as 400 responses.

use std::fmt;

use crate::models::{CommunicationInput, CompanyInput, LogEntry, MethodInput};

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty value where one is required.
    Empty(String),
    /// Communication periodicity below the minimum of one day.
    PeriodicityTooSmall(i64),
    /// Referenced company id matches no stored company.
    UnknownCompany(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
            ValidationError::PeriodicityTooSmall(value) => {
                write!(f, "communication periodicity must be at least 1 day, got {}", value)
            }
            ValidationError::UnknownCompany(id) => write!(f, "unknown company: {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate company fields before insert/update.
pub fn validate_company(input: &CompanyInput) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::Empty("company name".to_string()));
    }
    if input.communication_periodicity < 1 {
        return Err(ValidationError::PeriodicityTooSmall(
            input.communication_periodicity,
        ));
    }
    Ok(())
}

/// Validate communication method fields before insert/update.
pub fn validate_method(input: &MethodInput) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::Empty("method name".to_string()));
    }
    Ok(())
}

/// Validate a single communication record.
///
/// Existence of the referenced company is checked separately, against the
/// database, by the write path.
pub fn validate_communication(input: &CommunicationInput) -> Result<(), ValidationError> {
    if input.company_id.trim().is_empty() {
        return Err(ValidationError::Empty("company id".to_string()));
    }
    validate_log_entry(&input.entry)
}

/// Validate the shared payload of a (bulk) log operation.
pub fn validate_log_entry(entry: &LogEntry) -> Result<(), ValidationError> {
    if entry.kind.trim().is_empty() {
        return Err(ValidationError::Empty("communication type".to_string()));
    }
    Ok(())
}
