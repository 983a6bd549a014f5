//! Dashboard routes.

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::Serialize;

use engine::models::{Communication, Company, CompanyStatus, NextScheduled};
use engine::schedule;

use crate::error::Result;
use crate::state::AppState;

/// How many recent communications the dashboard shows per company.
const RECENT_LIMIT: usize = 5;

/// One dashboard row per company.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub company: Company,
    /// The company's last few communications, newest first.
    pub recent: Vec<Communication>,
    /// Next expected communication, absent when there is no history.
    pub next_scheduled: Option<NextScheduled>,
    pub status: CompanyStatus,
}

/// Per-company dashboard data from the current session snapshot.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Vec<DashboardRow>>> {
    let session = state.session.read().await;
    let now = Local::now().naive_local();

    let rows = session
        .companies()
        .iter()
        .map(|company| DashboardRow {
            company: company.clone(),
            recent: schedule::recent(&company.id, session.communications(), RECENT_LIMIT),
            next_scheduled: schedule::next_scheduled(company, session.communications()),
            status: schedule::status(company, session.communications(), now),
        })
        .collect();

    Ok(Json(rows))
}
