//! Session token claims

use serde::{Deserialize, Serialize};

/// Claims carried by a TopTopFootball session token.
///
/// Issued by the platform's auth API on login. Every field is optional on the
/// wire: a token is well-formed as long as its payload parses, and the guard
/// decides what missing fields mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account email
    pub email: Option<String>,
    /// Account role ("admin", "organizer", "player")
    pub role: Option<String>,
    /// Expiry, seconds since epoch
    pub exp: Option<i64>,
}

impl SessionClaims {
    /// Whether the claims carry a non-empty email.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }
}
