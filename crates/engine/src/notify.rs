//! Derivation of the notification list.

use chrono::NaiveDateTime;

use crate::models::{Communication, Company, Notification, NotificationKind};
use crate::schedule;

/// Compute the notification list for the current data set.
///
/// Policy, distinct from [`schedule::status`]: a company that has never been
/// contacted counts as overdue here. A company with history is overdue when
/// its next-due date is strictly before today, or due when the next-due date
/// is today. Each company appears at most once; overdue wins over due.
pub fn notifications(
    companies: &[Company],
    communications: &[Communication],
    now: NaiveDateTime,
) -> Vec<Notification> {
    let today = now.date();

    companies
        .iter()
        .filter_map(|company| {
            let kind = match schedule::next_scheduled(company, communications) {
                None => NotificationKind::Overdue,
                Some(next) if next.date < today => NotificationKind::Overdue,
                Some(next) if next.date == today => NotificationKind::Due,
                Some(_) => return None,
            };
            Some(Notification {
                kind,
                company_id: company.id.clone(),
                company_name: company.name.clone(),
            })
        })
        .collect()
}
