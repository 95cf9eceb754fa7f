//! Session guard
//!
//! Gates every protected navigation on the stored session token: presence,
//! decodability, expiry, then the role/email gate. One synchronous decision
//! per navigation, recomputed every time from the current store contents and
//! the wall clock — never cached.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::decode::decode_claims;
use crate::notify::{Notifier, Severity};
use crate::store::{TokenStore, ACCESS_TOKEN};

/// Why a navigation was redirected to login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    NoToken,
    InvalidToken,
    Expired,
    UnauthorizedRole,
}

impl fmt::Display for RedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RedirectReason::NoToken => "no token",
            RedirectReason::InvalidToken => "invalid token",
            RedirectReason::Expired => "expired",
            RedirectReason::UnauthorizedRole => "unauthorized role",
        };
        f.write_str(reason)
    }
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDecision {
    /// Render the protected view.
    Allowed,
    /// Send the user to the login view, keeping the path they asked for so
    /// the login flow can return them there afterwards.
    RedirectToLogin {
        reason: RedirectReason,
        original_path: String,
    },
}

/// Guard configuration.
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Role claim required to pass the gate.
    pub required_role: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            required_role: "admin".to_string(),
        }
    }
}

/// Decides whether a navigation to a protected view proceeds or redirects.
pub struct SessionGuard {
    store: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    config: GuardConfig,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn TokenStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(store, notifier, GuardConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        config: GuardConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Evaluate the current session against the gate for one navigation.
    ///
    /// Side effects: deletes the access token when it is malformed or expired
    /// (deletion is idempotent), and emits at most one user notice. A token
    /// that merely fails the role gate is kept — it may still be valid for a
    /// non-admin surface.
    pub fn evaluate(&self, original_path: &str) -> SessionDecision {
        let Some(token) = self.store.get(ACCESS_TOKEN) else {
            // Unauthenticated visits are the expected common case: no notice.
            tracing::debug!(path = original_path, "no session token");
            return self.redirect(RedirectReason::NoToken, original_path);
        };

        let claims = match decode_claims(&token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!(path = original_path, error = %e, "discarding undecodable session token");
                self.store.remove(ACCESS_TOKEN);
                return self.redirect(RedirectReason::InvalidToken, original_path);
            }
        };

        let now = Utc::now().timestamp();
        if claims.exp.is_some_and(|exp| exp < now) {
            tracing::debug!(path = original_path, "session token expired");
            self.store.remove(ACCESS_TOKEN);
            self.notifier
                .notify(Severity::Error, "session expired, please log in again");
            return self.redirect(RedirectReason::Expired, original_path);
        }

        if claims.has_email() && claims.role.as_deref() == Some(self.config.required_role.as_str())
        {
            return SessionDecision::Allowed;
        }

        tracing::debug!(
            path = original_path,
            role = claims.role.as_deref().unwrap_or(""),
            "session lacks required role"
        );
        self.notifier.notify(Severity::Error, "admin role required");
        self.redirect(RedirectReason::UnauthorizedRole, original_path)
    }

    fn redirect(&self, reason: RedirectReason, original_path: &str) -> SessionDecision {
        SessionDecision::RedirectToLogin {
            reason,
            original_path: original_path.to_string(),
        }
    }
}
