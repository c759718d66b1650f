//! Age-Gate Backend Module
//!
//! Structure:
//! - `domain/` - Pure gate logic (automation signatures, cookie token)
//! - `application/` - Use cases (challenge issuance, submission checks)
//! - `presentation/` - HTTP handlers, router, access-guard middleware
//!
//! ## Security Model
//! - The backend is the sole authority for the nonce, the expected PoW value,
//!   and the verification cookie; clients only echo values back
//! - The PoW here is a speed bump, not a computational puzzle: the client
//!   must recompute a server-defined digest, nothing more
//! - The verification cookie is `HMAC(secret, "ok")` and carries no identity,
//!   only the fact that this browser passed the gate once
//! - Every check fails closed; the first failing check decides the error code

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

pub use application::config::GateConfig;
pub use error::{GateError, GateResult};
pub use presentation::middleware::access_guard;
pub use presentation::router::gate_router;
