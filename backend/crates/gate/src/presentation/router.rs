//! Gate Router

use crate::application::config::GateConfig;
use crate::presentation::handlers::{self, GateAppState};
use axum::{
    Router,
    routing::{any, get},
};
use platform::session::SessionStore;
use std::sync::Arc;

/// Create the gate router for any session store implementation
pub fn gate_router<S>(sessions: S, config: GateConfig) -> Router
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = GateAppState {
        sessions: Arc::new(sessions),
        config: Arc::new(config),
    };

    Router::new()
        .route("/challenge", get(handlers::challenge::<S>))
        // any(): the handler owns the 405 semantics
        .route("/verify", any(handlers::verify::<S>))
        .with_state(state)
}
