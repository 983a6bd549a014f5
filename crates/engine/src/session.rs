//! In-memory snapshot of the three collections with reactive notification
//! recomputation.

use chrono::NaiveDateTime;
use tokio::sync::watch;
use tracing::debug;

use crate::models::{Communication, CommunicationMethod, Company, Notification};
use crate::notify;

/// A snapshot of the store's collections plus the notifications derived from
/// them.
///
/// The session is owned by the caller and passed explicitly; there is no
/// process-wide state. Every [`refresh`](Session::refresh) recomputes the
/// notification list synchronously before returning, so a reader holding the
/// session never observes notifications computed from an older snapshot.
/// Subscribers on the watch channel are woken on every refresh.
#[derive(Debug)]
pub struct Session {
    companies: Vec<Company>,
    methods: Vec<CommunicationMethod>,
    communications: Vec<Communication>,
    tx: watch::Sender<Vec<Notification>>,
}

impl Session {
    /// Create an empty session with no notifications.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            companies: Vec::new(),
            methods: Vec::new(),
            communications: Vec::new(),
            tx,
        }
    }

    /// Replace the snapshot and republish the derived notification list.
    pub fn refresh(
        &mut self,
        companies: Vec<Company>,
        methods: Vec<CommunicationMethod>,
        communications: Vec<Communication>,
        now: NaiveDateTime,
    ) {
        self.companies = companies;
        self.methods = methods;
        self.communications = communications;

        let notifications = notify::notifications(&self.companies, &self.communications, now);
        debug!(
            companies = self.companies.len(),
            communications = self.communications.len(),
            notifications = notifications.len(),
            "Session refreshed"
        );
        // send_replace publishes even when nothing is subscribed.
        self.tx.send_replace(notifications);
    }

    /// Current notification list.
    pub fn notifications(&self) -> Vec<Notification> {
        self.tx.borrow().clone()
    }

    /// Subscribe to notification updates. The receiver is marked changed on
    /// every refresh.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.tx.subscribe()
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn methods(&self) -> &[CommunicationMethod] {
        &self.methods
    }

    pub fn communications(&self) -> &[Communication] {
        &self.communications
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use chrono::NaiveDate;

    fn company(id: &str, periodicity: i64) -> Company {
        Company {
            id: id.to_string(),
            name: id.to_string(),
            communication_periodicity: periodicity,
            ..Company::default()
        }
    }

    fn comm(id: &str, company_id: &str, date: (i32, u32, u32)) -> Communication {
        Communication {
            id: id.to_string(),
            company_id: company_id.to_string(),
            kind: "Email".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            notes: String::new(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn refresh_recomputes_notifications_synchronously() {
        let mut session = Session::new();
        assert!(session.notifications().is_empty());

        session.refresh(vec![company("acme", 14)], Vec::new(), Vec::new(), now());
        let notes = session.notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Overdue);

        // Logging a communication today clears the overdue entry and leaves
        // the company on track.
        session.refresh(
            vec![company("acme", 14)],
            Vec::new(),
            vec![comm("c1", "acme", (2024, 1, 15))],
            now(),
        );
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn subscribers_see_every_refresh() {
        let mut session = Session::new();
        let mut rx = session.subscribe();
        assert!(!rx.has_changed().unwrap());

        session.refresh(vec![company("acme", 14)], Vec::new(), Vec::new(), now());
        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].company_id, "acme");

        session.refresh(Vec::new(), Vec::new(), Vec::new(), now());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }
}
