//! Locale Resolution and Translation Lookup
//!
//! - `config` / `resolver` - supported-locale configuration, validated once
//!   at startup, and the per-request resolution order (query parameter,
//!   then session, then default)
//! - `accept_language` - Accept-Language based guess; available but not part
//!   of the resolution order
//! - `repository` / `infra` - translation storage seam with Postgres and
//!   read-only in-memory implementations
//! - `router` - the strings endpoint

pub mod accept_language;
pub mod config;
pub mod error;
pub mod infra;
pub mod repository;
pub mod resolver;
pub mod router;

pub use accept_language::guess_from_accept_language;
pub use config::LocaleConfig;
pub use error::{I18nError, I18nResult};
pub use infra::memory::MemoryTranslationRepository;
pub use infra::postgres::PgTranslationRepository;
pub use repository::TranslationRepository;
pub use resolver::LocaleSet;
pub use router::i18n_router;
