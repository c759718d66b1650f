//! API DTOs

use serde::{Deserialize, Serialize};

/// Request body for POST /api/gate/verify
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub nonce: String,
    pub pow: String,
    /// Unix seconds, client clock
    pub ts: i64,
    #[serde(default)]
    pub nav: String,
}

/// Response body for the verify endpoint (success and failure alike)
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<&'static str>,
}

/// Response for GET /api/gate/challenge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    pub nonce: String,
    pub pow_seed: String,
}
