//! Gateway state

use std::sync::Arc;

use axum::extract::FromRef;
use toptop_client::AdminApi;
use toptop_session::{SessionGuard, TokenStore};

/// Application state for the admin gateway.
///
/// The token store is shared between the guard (which reads and defensively
/// deletes) and the login/logout handlers (which write and clear).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TokenStore>,
    pub guard: Arc<SessionGuard>,
    pub api: Arc<AdminApi>,
}

impl FromRef<AppState> for Arc<SessionGuard> {
    fn from_ref(state: &AppState) -> Self {
        state.guard.clone()
    }
}
