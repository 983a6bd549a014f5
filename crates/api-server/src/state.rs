//! Application state shared across handlers.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::RwLock;

use engine::Session;
use store::Store;

use crate::error::Result;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Record store.
    pub store: Store,
    /// In-memory snapshot with derived notifications.
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    /// Create new application state with an empty session.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            session: Arc::new(RwLock::new(Session::new())),
        }
    }

    /// Refetch all three collections and refresh the session snapshot.
    ///
    /// Called once at startup and after every confirmed mutation, so derived
    /// views are recomputed before the mutation response is sent.
    pub async fn reload(&self) -> Result<()> {
        let pool = self.store.pool();
        let companies = store::company::list(pool).await?;
        let methods = store::method::list(pool).await?;
        let communications = store::communication::list(pool).await?;

        let mut session = self.session.write().await;
        session.refresh(companies, methods, communications, Local::now().naive_local());
        Ok(())
    }
}
