//! HTTP Handlers

use crate::application::config::GateConfig;
use crate::application::issue_challenge;
use crate::application::verify::{Submission, evaluate};
use crate::domain::token::verification_token;
use crate::error::{GateError, GateResult};
use crate::presentation::dto::{ChallengeResponse, VerifyRequest, VerifyResponse};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use platform::cookie::{CookieAttributes, request_is_https};
use platform::session::{SessionStore, ensure_session_id, request_session_id, session_cookie};
use std::sync::Arc;

/// Shared state for gate handlers
#[derive(Clone)]
pub struct GateAppState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub config: Arc<GateConfig>,
}

/// GET /api/gate/challenge
pub async fn challenge<S>(
    State(state): State<GateAppState<S>>,
    headers: HeaderMap,
) -> Response
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let (sid, fresh) = ensure_session_id(&headers);
    let mut session = state.sessions.load(sid).await.unwrap_or_default();

    let grant = issue_challenge::issue(&mut session, &state.config);
    state.sessions.save(sid, session).await;

    let mut res = Json(ChallengeResponse {
        nonce: grant.nonce,
        pow_seed: grant.pow_seed,
    })
    .into_response();

    if fresh {
        let secure = request_is_https(&headers);
        append_set_cookie(&mut res, &session_cookie(sid, secure));
    }

    res
}

/// POST /api/gate/verify
///
/// Registered for every method; the method check is part of the pipeline so
/// a non-POST request gets the documented 405 + "method" body instead of the
/// framework default.
pub async fn verify<S>(
    State(state): State<GateAppState<S>>,
    method: Method,
    headers: HeaderMap,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> GateResult<Response>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    if method != Method::POST {
        return Err(GateError::Method);
    }

    let Json(req) = payload.map_err(|_| GateError::Payload)?;

    let session = match request_session_id(&headers) {
        Some(sid) => state.sessions.load(sid).await.unwrap_or_default(),
        None => Default::default(),
    };

    let submission = Submission {
        nonce: req.nonce,
        pow: req.pow,
        ts: req.ts,
        nav: req.nav,
    };

    evaluate(
        &submission,
        &session,
        platform::client::user_agent(&headers),
        Utc::now().timestamp(),
        &state.config,
    )?;

    // The single side effect of the whole flow: one cookie write
    let attrs = CookieAttributes {
        name: state.config.cookie_name.clone(),
        path: "/".to_string(),
        http_only: true,
        same_site: state.config.cookie_same_site,
        max_age_secs: Some(state.config.verified_ttl_secs()),
    };
    let secure = request_is_https(&headers);
    let cookie = attrs.render(&verification_token(&state.config.secret), secure);

    tracing::info!("Age gate passed");

    let mut res = Json(VerifyResponse { ok: true, err: None }).into_response();
    append_set_cookie(&mut res, &cookie);
    Ok(res)
}

fn append_set_cookie(res: &mut Response, cookie: &str) {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        res.headers_mut().append(header::SET_COOKIE, value);
    }
}
