//! Communication method CRUD routes.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use engine::models::CommunicationMethod;
use store::MethodInput;

use crate::error::Result;
use crate::state::AppState;

/// List all methods, ordered by their sequence hint.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CommunicationMethod>>> {
    let methods = store::method::list(state.store.pool()).await?;
    Ok(Json(methods))
}

/// Create a method.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MethodInput>,
) -> Result<Json<CommunicationMethod>> {
    let method = store::method::create(state.store.pool(), &input).await?;
    info!(method_id = %method.id, name = %method.name, "Communication method created");
    state.reload().await?;
    Ok(Json(method))
}

/// Replace a method's fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MethodInput>,
) -> Result<Json<CommunicationMethod>> {
    let method = store::method::update(state.store.pool(), &id, &input).await?;
    state.reload().await?;
    Ok(Json(method))
}

/// Delete a method. Logged communications tagged with its name stay put.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    store::method::delete(state.store.pool(), &id).await?;
    info!(method_id = %id, "Communication method deleted");
    state.reload().await?;
    Ok(Json(json!({ "message": "Communication method deleted successfully" })))
}
