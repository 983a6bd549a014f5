//! Notification routes.

use axum::extract::State;
use axum::Json;

use engine::models::Notification;

use crate::error::Result;
use crate::state::AppState;

/// Current notification list (overdue and due-today companies).
///
/// Served from the session snapshot, which every mutation handler refreshes
/// before responding; no store round trip here.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Notification>>> {
    let notifications = state.session.read().await.notifications();
    Ok(Json(notifications))
}
