//! Locale configuration
//!
//! Raw configuration as loaded from the environment, validated once at
//! startup into a [`LocaleSet`](crate::resolver::LocaleSet). Invariants
//! enforced here:
//! - every supported full code reduces to exactly one 2-letter base
//! - the default and fallback codes are themselves supported

use crate::error::{I18nError, I18nResult};
use crate::resolver::LocaleSet;

/// Supported-locale configuration, read-only after load
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Supported full codes, e.g. `["en-us", "pt-br", "de-de"]`
    pub available: Vec<String>,
    /// Default full code
    pub default_locale: String,
    /// Fallback full code for translation lookup
    pub fallback: String,
}

impl LocaleConfig {
    /// Validate and derive the per-process locale set
    pub fn validate(&self) -> I18nResult<LocaleSet> {
        if self.available.is_empty() {
            return Err(I18nError::Config("no supported locales".to_string()));
        }

        let mut available = Vec::with_capacity(self.available.len());
        for raw in &self.available {
            let code = raw.trim().to_ascii_lowercase();
            let base = base_of(&code);
            if base.len() != 2 || !base.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(I18nError::Config(format!(
                    "locale {code:?} has no 2-letter base"
                )));
            }
            available.push(code);
        }

        let default_locale = self.default_locale.trim().to_ascii_lowercase();
        if !available.contains(&default_locale) {
            return Err(I18nError::Config(format!(
                "default locale {default_locale:?} is not in the supported set"
            )));
        }

        let fallback = self.fallback.trim().to_ascii_lowercase();
        if !available.contains(&fallback) {
            return Err(I18nError::Config(format!(
                "fallback locale {fallback:?} is not in the supported set"
            )));
        }

        Ok(LocaleSet::derive(available, default_locale, fallback))
    }
}

/// The 2-letter base language portion of a full code
pub fn base_of(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or("")
}
