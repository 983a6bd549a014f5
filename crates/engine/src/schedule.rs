//! Next-due derivation and overdue/due-today status.

use chrono::{Duration, NaiveDateTime};

use crate::models::{Communication, Company, CompanyStatus, NextScheduled};

/// Compute the next expected communication for a company.
///
/// Filters the full communication set to the company, takes the entry with
/// the latest date (ties broken by store order, which the stable sort
/// preserves), and projects it forward by the company's periodicity. Returns
/// `None` when the company has no history.
pub fn next_scheduled(
    company: &Company,
    communications: &[Communication],
) -> Option<NextScheduled> {
    let mut history: Vec<&Communication> = communications
        .iter()
        .filter(|comm| comm.company_id == company.id)
        .collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));

    let last = history.first()?;
    Some(NextScheduled {
        kind: last.kind.clone(),
        date: last.date + Duration::days(company.communication_periodicity),
    })
}

/// Classify a company as overdue / due-today relative to `now`.
///
/// Comparisons are at calendar-day granularity: overdue means the next-due
/// date is strictly before today, due-today means it is today. Empty history
/// yields neither flag.
pub fn status(
    company: &Company,
    communications: &[Communication],
    now: NaiveDateTime,
) -> CompanyStatus {
    let Some(next) = next_scheduled(company, communications) else {
        return CompanyStatus::default();
    };

    let today = now.date();
    CompanyStatus {
        overdue: next.date < today,
        due_today: next.date == today,
    }
}

/// The company's most recent communications, newest first, at most `limit`.
pub fn recent(
    company_id: &str,
    communications: &[Communication],
    limit: usize,
) -> Vec<Communication> {
    let mut history: Vec<Communication> = communications
        .iter()
        .filter(|comm| comm.company_id == company_id)
        .cloned()
        .collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history.truncate(limit);
    history
}
