//! Route handlers for the API server.

pub mod communications;
pub mod companies;
pub mod dashboard;
pub mod health;
pub mod methods;
pub mod notifications;
pub mod reports;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
///
/// Paths registered with a subset of methods answer other methods with 405
/// and an `Allow` header, which axum's method routing provides.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Record CRUD
        .route(
            "/api/companies",
            get(companies::list).post(companies::create),
        )
        .route(
            "/api/companies/:id",
            axum::routing::put(companies::update).delete(companies::remove),
        )
        .route(
            "/api/communication-methods",
            get(methods::list).post(methods::create),
        )
        .route(
            "/api/communication-methods/:id",
            axum::routing::put(methods::update).delete(methods::remove),
        )
        // Append-only communication log
        .route(
            "/api/communications",
            get(communications::list).post(communications::create),
        )
        .route("/api/communications/bulk", post(communications::bulk))
        // Derived views
        .route("/api/notifications", get(notifications::list))
        .route("/api/reports", get(reports::reports))
        .route("/api/dashboard", get(dashboard::dashboard))
}
