//! Geo Router

use std::net::IpAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::client::GeoClient;

#[derive(Clone)]
pub struct GeoAppState {
    pub client: Arc<GeoClient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupParams {
    /// Explicit IP to resolve; defaults to the caller's own
    pub ip: Option<IpAddr>,
}

/// GET /lookup
pub async fn lookup(
    State(state): State<GeoAppState>,
    headers: HeaderMap,
    Query(params): Query<LookupParams>,
) -> Response {
    let ip = params
        .ip
        .or_else(|| platform::client::client_ip(&headers, None));

    let Some(ip) = ip else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match state.client.lookup(ip).await {
        Some(location) => Json(location).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Create the geo router
pub fn geo_router(client: GeoClient) -> Router {
    let state = GeoAppState {
        client: Arc::new(client),
    };

    Router::new().route("/lookup", get(lookup)).with_state(state)
}
