//! Communication log routes.
//!
//! The log is append-only over this surface: list, single create, and the
//! bulk logging operation. No update or delete.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use engine::models::Communication;
use store::{BulkLogReport, CommunicationInput, LogEntry};

use crate::error::Result;
use crate::state::AppState;

/// Request body for the bulk logging operation: one shared entry applied to
/// every selected company.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkLogRequest {
    pub company_ids: Vec<String>,
    #[serde(flatten)]
    pub entry: LogEntry,
}

/// List the full communication log.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Communication>>> {
    let communications = store::communication::list(state.store.pool()).await?;
    Ok(Json(communications))
}

/// Log a single communication.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CommunicationInput>,
) -> Result<Json<Communication>> {
    let communication = store::communication::create(state.store.pool(), &input).await?;
    info!(
        company_id = %communication.company_id,
        kind = %communication.kind,
        "Communication logged"
    );
    state.reload().await?;
    Ok(Json(communication))
}

/// Log one communication against a batch of companies, reporting the
/// per-company outcome.
pub async fn bulk(
    State(state): State<AppState>,
    Json(request): Json<BulkLogRequest>,
) -> Result<Json<BulkLogReport>> {
    let report =
        store::communication::log_bulk(state.store.pool(), &request.company_ids, &request.entry)
            .await?;
    state.reload().await?;
    Ok(Json(report))
}
