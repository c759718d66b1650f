//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the gate backend:
//! - Cryptographic utilities (SHA-256, HMAC, Base64, fixed-time comparison)
//! - Cookie rendering and extraction
//! - Client identification (User-Agent, forwarded IP)
//! - Browser session store
//! - Ordered-fallback resolution

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod fallback;
pub mod session;
