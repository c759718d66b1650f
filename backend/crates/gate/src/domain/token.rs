//! Verification cookie token
//!
//! The cookie value is `base64(HMAC-SHA256(secret, "ok"))`. It carries no
//! user identity, only the fact that some browser passed the gate while the
//! current secret was in force; rotating the secret invalidates every
//! outstanding cookie at once. The token is deliberately not bound to a
//! session (accepted limitation of the scheme, recorded in DESIGN.md).

use platform::crypto::{constant_time_eq, hmac_sha256, to_base64};

const VERIFIED_PAYLOAD: &[u8] = b"ok";

/// The one valid cookie value under the given secret
pub fn verification_token(secret: &[u8; 32]) -> String {
    to_base64(&hmac_sha256(secret, VERIFIED_PAYLOAD))
}

/// Fixed-time check of a presented cookie value
pub fn token_matches(secret: &[u8; 32], presented: &str) -> bool {
    constant_time_eq(presented.as_bytes(), verification_token(secret).as_bytes())
}
