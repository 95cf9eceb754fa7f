//! Route gating extractor
//!
//! Generic over any state `S` where `Arc<SessionGuard>: FromRef<S>`, axum's
//! nested-state pattern. A handler taking `Gate` only runs when the guard
//! allows the navigation; every other outcome becomes a redirect to the login
//! view carrying the originally requested path.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use toptop_session::{RedirectReason, SessionDecision, SessionGuard};

/// Extractor that admits the request only for a valid admin session.
#[derive(Debug)]
pub struct Gate;

/// Rejection: a `303 See Other` to the login view, with the original path in
/// the `from` query parameter so the login flow can return the user there.
#[derive(Debug)]
pub struct LoginRedirect {
    pub reason: RedirectReason,
    pub original_path: String,
}

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self.reason, path = %self.original_path, "redirecting to login");
        let target = format!("/login?from={}", self.original_path);
        Redirect::to(&target).into_response()
    }
}

impl<S> FromRequestParts<S> for Gate
where
    Arc<SessionGuard>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let guard = Arc::<SessionGuard>::from_ref(state);

        match guard.evaluate(parts.uri.path()) {
            SessionDecision::Allowed => Ok(Gate),
            SessionDecision::RedirectToLogin {
                reason,
                original_path,
            } => Err(LoginRedirect {
                reason,
                original_path,
            }),
        }
    }
}
