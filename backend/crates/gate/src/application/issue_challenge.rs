//! Challenge issuance use case
//!
//! Mints the per-session nonce and PoW seed, and records the value the
//! client is expected to echo back. The nonce is issued once per session:
//! repeated issuance within the same session re-serves the original values,
//! so a page reload does not invalidate an in-flight gate submission.

use crate::application::config::GateConfig;
use platform::crypto::{random_bytes, sha256, to_base64};
use platform::session::SessionData;

/// What the client receives to complete the gate flow
#[derive(Debug, Clone)]
pub struct ChallengeGrant {
    pub nonce: String,
    pub pow_seed: String,
}

/// The PoW value the client must submit for a given nonce and seed.
///
/// Both sides compute `base64(SHA-256("{nonce}:{seed}"))`; equality of the
/// echoed string is the whole check. No difficulty target exists.
pub fn expected_pow(nonce: &str, seed: &str) -> String {
    to_base64(&sha256(format!("{nonce}:{seed}").as_bytes()))
}

/// Issue (or re-serve) the session's challenge
pub fn issue(session: &mut SessionData, config: &GateConfig) -> ChallengeGrant {
    if let (Some(nonce), Some(seed), Some(_)) = (
        session.nonce.as_ref(),
        session.pow_seed.as_ref(),
        session.expected_pow.as_ref(),
    ) {
        return ChallengeGrant {
            nonce: nonce.clone(),
            pow_seed: seed.clone(),
        };
    }

    let nonce = to_base64(&random_bytes(config.nonce_bytes_len));
    let seed = to_base64(&random_bytes(config.seed_bytes_len));

    session.nonce = Some(nonce.clone());
    session.pow_seed = Some(seed.clone());
    session.expected_pow = Some(expected_pow(&nonce, &seed));

    tracing::debug!("Issued gate challenge");

    ChallengeGrant {
        nonce,
        pow_seed: seed,
    }
}
