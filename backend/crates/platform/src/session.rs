//! Browser session store
//!
//! Per-browser, ephemeral session state. Each browser holds a `bsid`
//! cookie carrying a UUID; the server keeps the associated state here.
//! Request handlers load, mutate, and save the state explicitly; no
//! ambient/global session access exists.

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::cookie::{self, CookieAttributes, SameSite};

/// Name of the session-id cookie
pub const SESSION_COOKIE_NAME: &str = "bsid";

/// State held for one browser session.
///
/// `nonce`, `pow_seed` and `expected_pow` are written by the gate's
/// challenge issuance and only read afterwards; `locale` is written by
/// the locale resolver. All fields start unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub nonce: Option<String>,
    pub pow_seed: Option<String>,
    pub expected_pow: Option<String>,
    pub locale: Option<String>,
}

/// Session persistence seam
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Load session state, if the session exists
    async fn load(&self, id: Uuid) -> Option<SessionData>;

    /// Persist session state (creates the session when absent)
    async fn save(&self, id: Uuid, data: SessionData);

    /// Drop a session
    async fn delete(&self, id: Uuid);
}

/// In-memory session store.
///
/// Matches the deployment model: one process, sessions are per-browser and
/// no two requests race on the same session.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: std::sync::Arc<tokio::sync::RwLock<std::collections::HashMap<Uuid, SessionData>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    async fn load(&self, id: Uuid) -> Option<SessionData> {
        self.inner.read().await.get(&id).cloned()
    }

    async fn save(&self, id: Uuid, data: SessionData) {
        self.inner.write().await.insert(id, data);
    }

    async fn delete(&self, id: Uuid) {
        self.inner.write().await.remove(&id);
    }
}

/// The session id presented by the request, if any
pub fn request_session_id(headers: &HeaderMap) -> Option<Uuid> {
    cookie::request_cookie(headers, SESSION_COOKIE_NAME)
        .and_then(|v| Uuid::parse_str(&v).ok())
}

/// The request's session id, minting a fresh one when absent.
///
/// Returns the id and whether it is newly minted (in which case the
/// handler must emit the session cookie).
pub fn ensure_session_id(headers: &HeaderMap) -> (Uuid, bool) {
    match request_session_id(headers) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

/// Render the Set-Cookie value for a freshly minted session id
pub fn session_cookie(id: Uuid, secure: bool) -> String {
    let attrs = CookieAttributes {
        name: SESSION_COOKIE_NAME.to_string(),
        path: "/".to_string(),
        http_only: true,
        same_site: SameSite::Lax,
        max_age_secs: None,
    };
    attrs.render(&id.to_string(), secure)
}
