//! Reporting routes.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::Serialize;

use engine::report::{self, ActivityEntry};

use crate::error::Result;
use crate::state::AppState;

/// Number of rows in the recent activity log.
const ACTIVITY_LOG_LIMIT: usize = 10;

/// The three reporting aggregates plus the recent activity log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reports {
    /// Method name -> communication count.
    pub frequency: BTreeMap<String, u64>,
    /// Method name -> share of all communications, in percent.
    pub effectiveness: BTreeMap<String, f64>,
    /// Company name -> days past due, overdue companies only.
    pub overdue_days: BTreeMap<String, f64>,
    /// Most recent communications, newest first.
    pub activity: Vec<ActivityEntry>,
}

/// Compute all reports from the current session snapshot.
pub async fn reports(State(state): State<AppState>) -> Result<Json<Reports>> {
    let session = state.session.read().await;
    let now = Local::now().naive_local();

    Ok(Json(Reports {
        frequency: report::frequency(session.methods(), session.communications()),
        effectiveness: report::effectiveness(session.methods(), session.communications()),
        overdue_days: report::overdue_days(session.companies(), session.communications(), now),
        activity: report::activity_log(
            session.companies(),
            session.communications(),
            ACTIVITY_LOG_LIMIT,
        ),
    }))
}
