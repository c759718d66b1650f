//! API Server Entry Point
//!
//! Application entry point and server initialization. Uses `anyhow` for
//! startup errors; request-level errors live in the feature crates.

use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use gate::{GateConfig, access_guard, gate_router};
use geo::{GeoClient, geo_router};
use i18n::{LocaleConfig, MemoryTranslationRepository, PgTranslationRepository, i18n_router};
use platform::session::MemorySessionStore;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,gate=info,i18n=info,geo=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Gate configuration
    let gate_config = if cfg!(debug_assertions) {
        GateConfig::with_random_secret()
    } else {
        // In production, load secret from environment
        let secret_b64 = env::var("GATE_SECRET")
            .map_err(|_| anyhow::anyhow!("GATE_SECRET must be set in production"))?;
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "GATE_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        GateConfig {
            secret,
            ..GateConfig::default()
        }
    };

    // Locale configuration, validated once at startup
    let available = env::var("LOCALES")
        .unwrap_or_else(|_| "en-us,pt-br,de-de".to_string())
        .split(',')
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect();
    let locale_config = LocaleConfig {
        available,
        default_locale: env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en-us".to_string()),
        fallback: env::var("FALLBACK_LOCALE").unwrap_or_else(|_| "en-us".to_string()),
    };
    let locales = locale_config.validate()?;

    // One session store shared by the gate and the locale resolver
    let sessions = MemorySessionStore::new();

    // Translations: Postgres when configured, built-in catalog otherwise
    let i18n_routes = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations").run(&pool).await?;
            tracing::info!("Migrations completed");

            i18n_router(
                PgTranslationRepository::new(pool),
                locales.clone(),
                sessions.clone(),
            )
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, serving the built-in translation catalog");
            i18n_router(builtin_catalog(), locales.clone(), sessions.clone())
        }
    };

    let geo_client = GeoClient::new()?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router; the access guard wraps everything (its exemption list
    // covers the verify endpoint and the legal pages)
    let guard_config = Arc::new(gate_config.clone());

    let app = Router::new()
        .nest("/api/gate", gate_router(sessions.clone(), gate_config))
        .nest("/api/i18n", i18n_routes)
        .nest("/api/geo", geo_router(geo_client))
        .layer(axum::middleware::from_fn_with_state(
            guard_config,
            access_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Minimal translation catalog used when no database is configured
fn builtin_catalog() -> MemoryTranslationRepository {
    MemoryTranslationRepository::from_entries([
        ("en", "header", "search_placeholder", "Search listings"),
        ("en", "header", "nav_clubs", "Clubs"),
        ("en", "header", "nav_companies", "Companies"),
        ("en", "footer", "legal_terms", "Terms and Conditions"),
        ("en", "footer", "legal_privacy", "Privacy Policy"),
        ("pt", "header", "search_placeholder", "Pesquisar anúncios"),
        ("pt", "header", "nav_clubs", "Clubes"),
        ("pt", "header", "nav_companies", "Empresas"),
        ("pt", "footer", "legal_terms", "Termos e Condições"),
        ("pt", "footer", "legal_privacy", "Política de Privacidade"),
        ("de", "header", "search_placeholder", "Anzeigen durchsuchen"),
        ("de", "footer", "legal_terms", "AGB"),
    ])
}
