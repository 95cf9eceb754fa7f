//! Session error taxonomy
//!
//! None of these propagate as fatal errors: the guard converts each into a
//! navigation decision plus an optional user notice. The enum exists so
//! callers and logs can name the failure mode.

use crate::guard::RedirectReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No credential present; recoverable by login.
    #[error("no session token present")]
    MissingToken,

    /// Credential present but not decodable; recoverable by discard + re-login.
    #[error("session token is malformed")]
    MalformedToken,

    /// Credential decodable but past its validity window.
    #[error("session token is expired")]
    ExpiredToken,

    /// Credential valid but the role claim does not satisfy the admin gate.
    #[error("session role is not permitted here")]
    InsufficientRole,
}

impl SessionError {
    /// The redirect reason the guard reports for this failure mode.
    pub fn redirect_reason(&self) -> RedirectReason {
        match self {
            SessionError::MissingToken => RedirectReason::NoToken,
            SessionError::MalformedToken => RedirectReason::InvalidToken,
            SessionError::ExpiredToken => RedirectReason::Expired,
            SessionError::InsufficientRole => RedirectReason::UnauthorizedRole,
        }
    }
}
