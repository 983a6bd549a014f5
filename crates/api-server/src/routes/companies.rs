//! Company CRUD routes.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use engine::models::Company;
use store::CompanyInput;

use crate::error::Result;
use crate::state::AppState;

/// List all companies.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Company>>> {
    let companies = store::company::list(state.store.pool()).await?;
    Ok(Json(companies))
}

/// Create a company.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CompanyInput>,
) -> Result<Json<Company>> {
    let company = store::company::create(state.store.pool(), &input).await?;
    info!(company_id = %company.id, name = %company.name, "Company created");
    state.reload().await?;
    Ok(Json(company))
}

/// Replace a company's fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CompanyInput>,
) -> Result<Json<Company>> {
    let company = store::company::update(state.store.pool(), &id, &input).await?;
    state.reload().await?;
    Ok(Json(company))
}

/// Delete a company.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    store::company::delete(state.store.pool(), &id).await?;
    info!(company_id = %id, "Company deleted");
    state.reload().await?;
    Ok(Json(json!({ "message": "Company deleted successfully" })))
}
