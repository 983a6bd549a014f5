//! Domain models shared by the store and the API server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company being tracked, with its configured contact cadence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text location.
    pub location: String,
    /// LinkedIn profile URL.
    pub linkedin_profile: String,
    /// Known email addresses.
    pub emails: Vec<String>,
    /// Known phone numbers.
    pub phone_numbers: Vec<String>,
    /// Free-text comments.
    pub comments: String,
    /// Expected days between communications. Always >= 1.
    pub communication_periodicity: i64,
}

/// A way of communicating (email, call, visit, ...).
///
/// The `name` doubles as the free-text tag on [`Communication::kind`]; there
/// is no foreign key between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationMethod {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// Unique display label.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Ordering hint for display.
    pub sequence: i64,
    /// Whether this method is part of the mandatory sequence.
    pub mandatory: bool,
}

/// A single logged communication with a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// Id of the company this was performed with. Checked at write time,
    /// not enforced by the store.
    pub company_id: String,
    /// Method name tag, matching a [`CommunicationMethod::name`] by
    /// convention only.
    #[serde(rename = "type")]
    pub kind: String,
    /// Calendar date the communication happened. No time-of-day semantics.
    pub date: NaiveDate,
    /// Free-text notes.
    pub notes: String,
}

/// The derived next-due communication for a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextScheduled {
    /// Method of the most recent communication, carried forward.
    #[serde(rename = "type")]
    pub kind: String,
    /// Date of the most recent communication plus the company periodicity.
    pub date: NaiveDate,
}

/// Overdue / due-today classification for a company.
///
/// The two flags are mutually exclusive. A company with no history gets
/// neither flag here; the notification policy treats the same company as
/// overdue (see [`crate::notify`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStatus {
    pub overdue: bool,
    pub due_today: bool,
}

/// Classification of a notification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Overdue,
    Due,
}

/// One entry in the derived notification list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub company_id: String,
    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn communication_wire_format_uses_type_and_camel_case() {
        let comm = Communication {
            id: "c1".to_string(),
            company_id: "acme".to_string(),
            kind: "Email".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            notes: "intro".to_string(),
        };

        let json = serde_json::to_value(&comm).unwrap();
        assert_eq!(json["type"], "Email");
        assert_eq!(json["companyId"], "acme");
        assert_eq!(json["date"], "2024-01-01");
    }

    #[test]
    fn notification_kind_serializes_lowercase() {
        let note = Notification {
            kind: NotificationKind::Overdue,
            company_id: "acme".to_string(),
            company_name: "Acme".to_string(),
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "overdue");
        assert_eq!(json["companyName"], "Acme");
    }
}
