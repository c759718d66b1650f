//! Strings endpoint
//!
//! `GET /strings?context=header[&lang=pt-BR]` resolves the request locale,
//! persists a `lang`-driven choice to the session, and returns the
//! translation set for the context (resolved locale first, configured
//! fallback when the locale has no strings).

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use platform::cookie::request_is_https;
use platform::session::{SessionStore, ensure_session_id, session_cookie};

use crate::error::I18nResult;
use crate::repository::{TranslationRepository, fetch_with_fallback};
use crate::resolver::LocaleSet;

/// Shared state for i18n handlers
pub struct I18nAppState<R, S>
where
    R: TranslationRepository + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub locales: Arc<LocaleSet>,
    pub sessions: Arc<S>,
}

impl<R, S> Clone for I18nAppState<R, S>
where
    R: TranslationRepository + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            locales: Arc::clone(&self.locales),
            sessions: Arc::clone(&self.sessions),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StringsParams {
    pub context: String,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StringsResponse {
    pub locale: String,
    pub strings: HashMap<String, String>,
}

/// GET /strings
pub async fn strings<R, S>(
    State(state): State<I18nAppState<R, S>>,
    headers: HeaderMap,
    Query(params): Query<StringsParams>,
) -> I18nResult<Response>
where
    R: TranslationRepository + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let (sid, fresh) = ensure_session_id(&headers);
    let mut session = state.sessions.load(sid).await.unwrap_or_default();

    let locale = state.locales.resolve(params.lang.as_deref(), &mut session);
    state.sessions.save(sid, session).await;

    let fallback = state.locales.fallback_base();
    let chain: Vec<&str> = if locale == fallback {
        vec![locale.as_str()]
    } else {
        vec![locale.as_str(), fallback]
    };
    let strings = fetch_with_fallback(state.repo.as_ref(), &chain, &params.context).await?;

    let mut res = Json(StringsResponse { locale, strings }).into_response();
    if fresh
        && let Ok(value) = HeaderValue::from_str(&session_cookie(sid, request_is_https(&headers)))
    {
        res.headers_mut().append(header::SET_COOKIE, value);
    }
    Ok(res)
}

/// Create the i18n router for any repository and session store implementation
pub fn i18n_router<R, S>(repo: R, locales: LocaleSet, sessions: S) -> Router
where
    R: TranslationRepository + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = I18nAppState {
        repo: Arc::new(repo),
        locales: Arc::new(locales),
        sessions: Arc::new(sessions),
    };

    Router::new()
        .route("/strings", get(strings::<R, S>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocaleConfig;
    use crate::infra::memory::MemoryTranslationRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use platform::session::{MemorySessionStore, SESSION_COOKIE_NAME, SessionData};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn locale_set() -> LocaleSet {
        LocaleConfig {
            available: vec!["en-us".to_string(), "pt-br".to_string()],
            default_locale: "en-us".to_string(),
            fallback: "en-us".to_string(),
        }
        .validate()
        .unwrap()
    }

    fn repo() -> MemoryTranslationRepository {
        MemoryTranslationRepository::from_entries([
            ("en", "header", "title", "Search"),
            ("pt", "header", "title", "Pesquisar"),
        ])
    }

    async fn fetch_json(app: &Router, uri: &str, sid: Uuid) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .header(header::COOKIE, format!("{SESSION_COOKIE_NAME}={sid}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lang_param_resolves_and_persists_across_requests() {
        let sessions = MemorySessionStore::new();
        let sid = Uuid::new_v4();
        sessions.save(sid, SessionData::default()).await;
        let app = i18n_router(repo(), locale_set(), sessions);

        // lang=pt-BR resolves to the base and serves Portuguese strings
        let (status, json) = fetch_json(&app, "/strings?context=header&lang=pt-BR", sid).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["locale"], "pt");
        assert_eq!(json["strings"]["title"], "Pesquisar");

        // No lang param: the persisted locale is inherited
        let (_, json) = fetch_json(&app, "/strings?context=header", sid).await;
        assert_eq!(json["locale"], "pt");

        // Unsupported lang falls through to the persisted locale
        let (_, json) = fetch_json(&app, "/strings?context=header&lang=xx-xx", sid).await;
        assert_eq!(json["locale"], "pt");
    }

    #[tokio::test]
    async fn default_locale_without_param_or_session() {
        let sessions = MemorySessionStore::new();
        let sid = Uuid::new_v4();
        sessions.save(sid, SessionData::default()).await;
        let app = i18n_router(repo(), locale_set(), sessions);

        let (_, json) = fetch_json(&app, "/strings?context=header", sid).await;
        assert_eq!(json["locale"], "en");
        assert_eq!(json["strings"]["title"], "Search");
    }

    #[tokio::test]
    async fn unknown_context_is_an_empty_map() {
        let sessions = MemorySessionStore::new();
        let sid = Uuid::new_v4();
        sessions.save(sid, SessionData::default()).await;
        let app = i18n_router(repo(), locale_set(), sessions);

        let (status, json) = fetch_json(&app, "/strings?context=sidebar", sid).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["strings"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn fresh_browser_gets_a_session_cookie() {
        let app = i18n_router(repo(), locale_set(), MemorySessionStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/strings?context=header")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let has_sid = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|v| v.starts_with(&format!("{SESSION_COOKIE_NAME}=")));
        assert!(has_sid);
    }
}
