//! Access guard middleware
//!
//! Runs over every request. It never blocks: an unverified request still
//! renders, but the response is marked `noindex, nofollow` so crawlers do
//! not index gated content, and the page template shows the gate overlay.

use crate::application::config::GateConfig;
use crate::domain::token::token_matches;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Per-request gate predicate with one side effect (a response header)
pub async fn access_guard(
    State(config): State<Arc<GateConfig>>,
    req: Request,
    next: Next,
) -> Response {
    let exempt = config.is_exempt(req.uri().path());

    let verified = !exempt
        && platform::cookie::request_cookie(req.headers(), &config.cookie_name)
            .is_some_and(|presented| token_matches(&config.secret, &presented));

    let mut res = next.run(req).await;

    if !exempt && !verified {
        res.headers_mut().insert(
            HeaderName::from_static("x-robots-tag"),
            HeaderValue::from_static("noindex, nofollow"),
        );
    }

    res
}
