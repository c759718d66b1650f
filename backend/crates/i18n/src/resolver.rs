//! Locale resolution
//!
//! Resolution order per request:
//! 1. `lang` query parameter - normalized (lowercase, trim); a supported full
//!    code or a recognized 2-letter base adopts that base and persists it to
//!    the session; anything else falls through
//! 2. the session's persisted locale
//! 3. the base of the configured default
//!
//! The resolved locale is always a base code; the session never stores a
//! regional variant.

use std::collections::{BTreeMap, BTreeSet};

use platform::session::SessionData;

use crate::config::base_of;

/// Derived, process-wide locale set (read-only after startup)
#[derive(Debug, Clone)]
pub struct LocaleSet {
    /// Supported full codes
    available: BTreeSet<String>,
    /// Base code -> full codes sharing that base, plus the base itself.
    /// Ordered by base.
    bases: BTreeMap<String, Vec<String>>,
    default_base: String,
    fallback_base: String,
}

impl LocaleSet {
    /// Build the derived set from validated, normalized codes.
    /// Called by [`LocaleConfig::validate`](crate::config::LocaleConfig::validate).
    pub(crate) fn derive(available: Vec<String>, default_locale: String, fallback: String) -> Self {
        let mut bases: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for code in &available {
            let base = base_of(code).to_string();
            let group = bases.entry(base.clone()).or_insert_with(|| vec![base]);
            if !group.contains(code) {
                group.push(code.clone());
            }
        }

        Self {
            default_base: base_of(&default_locale).to_string(),
            fallback_base: base_of(&fallback).to_string(),
            available: available.into_iter().collect(),
            bases,
        }
    }

    pub fn default_base(&self) -> &str {
        &self.default_base
    }

    pub fn fallback_base(&self) -> &str {
        &self.fallback_base
    }

    /// Full codes grouped under a base, or empty when the base is unknown
    pub fn group(&self, base: &str) -> &[String] {
        self.bases.get(base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Normalize a requested code to a recognized base.
    ///
    /// A supported full code reduces to its base; an unknown full code is
    /// retried as its 2-letter base. Returns None when neither applies.
    pub fn normalize(&self, candidate: &str) -> Option<String> {
        let code = candidate.trim().to_ascii_lowercase();
        if code.is_empty() {
            return None;
        }
        if self.available.contains(&code) {
            return Some(base_of(&code).to_string());
        }
        let base = base_of(&code);
        self.bases.contains_key(base).then(|| base.to_string())
    }

    /// Resolve the locale for this request and persist a `lang`-driven
    /// choice to the session. Never errors: unrecognized input falls
    /// through to the session, then the default.
    pub fn resolve(&self, lang_param: Option<&str>, session: &mut SessionData) -> String {
        if let Some(lang) = lang_param
            && let Some(base) = self.normalize(lang)
        {
            session.locale = Some(base.clone());
            return base;
        }

        if let Some(locale) = session.locale.as_ref() {
            return locale.clone();
        }

        self.default_base.clone()
    }
}
