//! TopTop admin gateway composition root
//!
//! Wires the token store, session guard, and platform API client into a
//! single router. Every protected view route is one guarded fetch against
//! the remote platform API.

pub mod gate;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use toptop_client::AdminApi;
use toptop_common::Config;
use toptop_session::{
    FileTokenStore, MemoryTokenStore, SessionGuard, TokenStore, TracingNotifier,
};

pub use state::AppState;

/// Create the application router from configuration.
///
/// A configured `SESSION_FILE` makes the staff session survive restarts;
/// otherwise the session lives in memory.
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let store: Arc<dyn TokenStore> = match &config.session_file {
        Some(path) => Arc::new(FileTokenStore::open(path)?),
        None => Arc::new(MemoryTokenStore::new()),
    };
    let notifier = Arc::new(TracingNotifier);
    let guard = Arc::new(SessionGuard::new(store.clone(), notifier));
    let api = Arc::new(AdminApi::new(config.api_base_url.clone()));

    Ok(router(AppState { store, guard, api }))
}

/// Build the router over prepared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login),
        )
        .route("/logout", post(handlers::logout))
        .route("/overview", get(handlers::overview))
        .route("/matches", get(handlers::matches))
        .route("/matches/{id}", get(handlers::match_detail))
        .route("/organizers", get(handlers::organizers))
        .route("/tournaments", get(handlers::tournaments))
        .route("/users", get(handlers::users))
        .route("/users/{id}/block", post(handlers::block_user))
        .route("/users/{id}/unblock", post(handlers::unblock_user))
        .route("/payments", get(handlers::payments))
        .route("/refunds", get(handlers::refunds))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
