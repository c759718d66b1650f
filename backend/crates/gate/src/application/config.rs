//! Gate configuration
//!
//! Fixed, typed configuration validated once at startup and passed into the
//! verifier and guard by parameter; nothing reads ambient global state.

use std::time::Duration;

pub use platform::cookie::SameSite;

/// Age-gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Name of the verification cookie
    pub cookie_name: String,
    /// Secret for the verification cookie HMAC (32 bytes)
    pub secret: [u8; 32],
    /// Verification cookie lifetime
    pub verified_ttl: Duration,
    /// Freshness window for the submitted timestamp
    pub ts_max_age: Duration,
    /// SameSite policy for issued cookies
    pub cookie_same_site: SameSite,
    /// Nonce length in bytes (before base64)
    pub nonce_bytes_len: usize,
    /// PoW seed length in bytes (before base64)
    pub seed_bytes_len: usize,
    /// Path prefixes the access guard skips entirely
    pub exempt_prefixes: Vec<String>,
    /// Exact paths the access guard skips entirely
    pub exempt_paths: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            cookie_name: "age_verified_h2".to_string(),
            secret: [0u8; 32],
            verified_ttl: Duration::from_secs(365 * 24 * 3600),
            ts_max_age: Duration::from_secs(60),
            cookie_same_site: SameSite::Lax,
            nonce_bytes_len: 16,
            seed_bytes_len: 16,
            exempt_prefixes: vec!["/assets/".to_string(), "/.well-known/".to_string()],
            exempt_paths: vec![
                "/api/gate/verify".to_string(),
                "/pages/terms_and_conditions.php".to_string(),
                "/pages/privacy_policy.php".to_string(),
                "/pages/cookie_policy.php".to_string(),
            ],
        }
    }
}

impl GateConfig {
    /// Config with a random secret (for development)
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            secret,
            ..Default::default()
        }
    }

    pub fn verified_ttl_secs(&self) -> i64 {
        self.verified_ttl.as_secs() as i64
    }

    pub fn ts_max_age_secs(&self) -> i64 {
        self.ts_max_age.as_secs() as i64
    }

    /// Whether the access guard skips this request path
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_prefixes.iter().any(|p| path.starts_with(p.as_str()))
            || self.exempt_paths.iter().any(|p| p == path)
    }
}
