//! In-memory translation catalog
//!
//! Read-only after construction; serves as the storage-free fallback when
//! no database is configured, and as the test double.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::I18nResult;
use crate::repository::TranslationRepository;

#[derive(Debug, Clone, Default)]
pub struct MemoryTranslationRepository {
    entries: Arc<HashMap<(String, String), HashMap<String, String>>>,
}

impl MemoryTranslationRepository {
    /// Build the catalog from (locale, context, key, value) rows
    pub fn from_entries<L, C, K, V>(rows: impl IntoIterator<Item = (L, C, K, V)>) -> Self
    where
        L: Into<String>,
        C: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: HashMap<(String, String), HashMap<String, String>> = HashMap::new();
        for (locale, context, key, value) in rows {
            entries
                .entry((locale.into(), context.into()))
                .or_default()
                .insert(key.into(), value.into());
        }
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl TranslationRepository for MemoryTranslationRepository {
    async fn fetch(&self, locale: &str, context: &str) -> I18nResult<HashMap<String, String>> {
        Ok(self
            .entries
            .get(&(locale.to_string(), context.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
