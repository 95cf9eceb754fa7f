//! Token payload decoding
//!
//! Reads the claims segment of a compact three-part token. No signature
//! verification happens here: the gateway only gates navigation on the
//! claims, while the platform API verifies the token on every proxied call.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::claims::SessionClaims;
use crate::error::SessionError;

/// Decode the claims of a compact `header.payload.signature` token.
///
/// Any token that is not three non-empty dot-separated segments with a
/// base64url JSON payload is malformed. Never panics on arbitrary input.
pub fn decode_claims(token: &str) -> Result<SessionClaims, SessionError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            payload
        }
        _ => return Err(SessionError::MalformedToken),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| {
        tracing::debug!(error = %e, "token payload is not valid base64url");
        SessionError::MalformedToken
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(error = %e, "token payload is not a claims object");
        SessionError::MalformedToken
    })
}
