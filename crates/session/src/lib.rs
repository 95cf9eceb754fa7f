//! Session gating for the TopTop admin gateway
//!
//! Decides, per navigation, whether the stored staff session may see a
//! protected view: token present, claims decodable, not expired, admin role.
//! Claims are read WITHOUT signature verification — this is a navigation
//! convenience, not authentication; the platform API authorizes every
//! proxied call against the bearer token it issued.

mod claims;
mod decode;
mod error;
mod guard;
mod notify;
mod store;

pub use claims::SessionClaims;
pub use decode::decode_claims;
pub use error::SessionError;
pub use guard::{GuardConfig, RedirectReason, SessionDecision, SessionGuard};
pub use notify::{Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, ACCESS_TOKEN, REFRESH_TOKEN};
