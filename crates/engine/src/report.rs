//! Reporting aggregates: frequency, effectiveness, overdue magnitude, and
//! the recent activity log.
//!
//! All projections are pure and recomputed on demand; the data sets are
//! small enough that nothing is maintained incrementally.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Communication, CommunicationMethod, Company};
use crate::schedule;

/// One row of the recent activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub date: chrono::NaiveDate,
    /// Resolved company name; empty when the company id matches nothing.
    pub company_name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Count of communications per method name.
///
/// Iterates methods and matches by exact name, so methods with no matching
/// communications show 0 and communications tagged with an unknown method
/// name are excluded entirely. The exclusion mirrors the upstream behavior
/// and is covered by tests.
pub fn frequency(
    methods: &[CommunicationMethod],
    communications: &[Communication],
) -> BTreeMap<String, u64> {
    methods
        .iter()
        .map(|method| {
            let count = communications
                .iter()
                .filter(|comm| comm.kind == method.name)
                .count() as u64;
            (method.name.clone(), count)
        })
        .collect()
}

/// Share of total communications per method name, as a percentage.
///
/// When there are no communications at all every method reports 0.0 rather
/// than a NaN from the zero denominator.
pub fn effectiveness(
    methods: &[CommunicationMethod],
    communications: &[Communication],
) -> BTreeMap<String, f64> {
    let total = communications.len();

    methods
        .iter()
        .map(|method| {
            let share = if total == 0 {
                0.0
            } else {
                let count = communications
                    .iter()
                    .filter(|comm| comm.kind == method.name)
                    .count();
                100.0 * count as f64 / total as f64
            };
            (method.name.clone(), share)
        })
        .collect()
}

/// Days past the next-due date, per company name, for overdue companies only.
///
/// The magnitude is fractional: the elapsed time from the next-due date (at
/// midnight) to `now`, in days.
pub fn overdue_days(
    companies: &[Company],
    communications: &[Communication],
    now: NaiveDateTime,
) -> BTreeMap<String, f64> {
    let today = now.date();

    companies
        .iter()
        .filter_map(|company| {
            let next = schedule::next_scheduled(company, communications)?;
            if next.date >= today {
                return None;
            }
            let elapsed = now - next.date.and_time(NaiveTime::MIN);
            Some((company.name.clone(), elapsed.num_seconds() as f64 / 86_400.0))
        })
        .collect()
}

/// The most recent communications across all companies, newest first.
pub fn activity_log(
    companies: &[Company],
    communications: &[Communication],
    limit: usize,
) -> Vec<ActivityEntry> {
    let mut sorted: Vec<&Communication> = communications.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .take(limit)
        .map(|comm| {
            let company_name = companies
                .iter()
                .find(|company| company.id == comm.company_id)
                .map(|company| company.name.clone())
                .unwrap_or_default();
            ActivityEntry {
                date: comm.date,
                company_name,
                kind: comm.kind.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn method(name: &str) -> CommunicationMethod {
        CommunicationMethod {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            sequence: 0,
            mandatory: false,
        }
    }

    fn company(id: &str, name: &str, periodicity: i64) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            communication_periodicity: periodicity,
            ..Company::default()
        }
    }

    fn comm(id: &str, company_id: &str, kind: &str, date: (i32, u32, u32)) -> Communication {
        Communication {
            id: id.to_string(),
            company_id: company_id.to_string(),
            kind: kind.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            notes: String::new(),
        }
    }

    #[test]
    fn frequency_counts_by_method_name_including_zeroes() {
        let methods = vec![method("Email"), method("Call"), method("Visit")];
        let comms = vec![
            comm("c1", "a", "Email", (2024, 1, 1)),
            comm("c2", "a", "Email", (2024, 1, 2)),
            comm("c3", "b", "Email", (2024, 1, 3)),
            comm("c4", "b", "Call", (2024, 1, 4)),
        ];

        let freq = frequency(&methods, &comms);
        assert_eq!(freq["Email"], 3);
        assert_eq!(freq["Call"], 1);
        assert_eq!(freq["Visit"], 0);
        assert_eq!(freq.values().sum::<u64>(), comms.len() as u64);
    }

    #[test]
    fn effectiveness_shares_sum_to_one_hundred() {
        let methods = vec![method("Email"), method("Call")];
        let comms = vec![
            comm("c1", "a", "Email", (2024, 1, 1)),
            comm("c2", "a", "Email", (2024, 1, 2)),
            comm("c3", "b", "Email", (2024, 1, 3)),
            comm("c4", "b", "Call", (2024, 1, 4)),
        ];

        let eff = effectiveness(&methods, &comms);
        assert_eq!(eff["Email"], 75.0);
        assert_eq!(eff["Call"], 25.0);
        assert!((eff.values().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn effectiveness_is_zero_not_nan_without_communications() {
        let methods = vec![method("Email")];
        let eff = effectiveness(&methods, &[]);
        assert_eq!(eff["Email"], 0.0);
        assert!(!eff["Email"].is_nan());
    }

    #[test]
    fn unknown_method_tags_are_excluded_from_both_reports() {
        let methods = vec![method("Email")];
        let comms = vec![
            comm("c1", "a", "Email", (2024, 1, 1)),
            comm("c2", "a", "Carrier Pigeon", (2024, 1, 2)),
        ];

        let freq = frequency(&methods, &comms);
        assert_eq!(freq.len(), 1);
        assert_eq!(freq["Email"], 1);

        // The pigeon still counts toward the denominator.
        let eff = effectiveness(&methods, &comms);
        assert_eq!(eff["Email"], 50.0);
    }

    #[test]
    fn overdue_days_lists_only_overdue_companies() {
        let companies = vec![
            company("late", "Late Co", 9),
            company("today", "Today Co", 14),
            company("fresh", "Fresh Co", 30),
            company("silent", "Silent Co", 7),
        ];
        let comms = vec![
            comm("c1", "late", "Email", (2024, 1, 1)),
            comm("c2", "today", "Email", (2024, 1, 1)),
            comm("c3", "fresh", "Email", (2024, 1, 1)),
        ];
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let overdue = overdue_days(&companies, &comms, now);
        // Late Co was due 2024-01-10; never-contacted companies have no
        // next-due date to measure against.
        assert_eq!(overdue.len(), 1);
        assert!((overdue["Late Co"] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn overdue_magnitude_is_fractional_days() {
        let companies = vec![company("acme", "Acme", 14)];
        let comms = vec![comm("c1", "acme", "Email", (2024, 1, 1))];
        // Due 2024-01-15; one day later.
        let now = NaiveDate::from_ymd_opt(2024, 1, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let overdue = overdue_days(&companies, &comms, now);
        assert!((overdue["Acme"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn activity_log_resolves_names_and_caps_at_limit() {
        let companies = vec![company("acme", "Acme", 14)];
        let comms = vec![
            comm("c1", "acme", "Email", (2024, 1, 1)),
            comm("c2", "ghost", "Call", (2024, 1, 2)),
            comm("c3", "acme", "Call", (2024, 1, 3)),
        ];

        let log = activity_log(&companies, &comms, 2);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].company_name, "Acme");
        assert_eq!(log[0].kind, "Call");
        assert_eq!(log[1].company_name, "");
    }
}
