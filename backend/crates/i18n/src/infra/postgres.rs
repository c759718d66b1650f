//! PostgreSQL translation repository

use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::I18nResult;
use crate::repository::TranslationRepository;

#[derive(Clone)]
pub struct PgTranslationRepository {
    pool: PgPool,
}

impl PgTranslationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TranslationRepository for PgTranslationRepository {
    async fn fetch(&self, locale: &str, context: &str) -> I18nResult<HashMap<String, String>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT key, value
            FROM translations
            WHERE locale = $1 AND context = $2
            "#,
        )
        .bind(locale)
        .bind(context)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(locale, context, count = rows.len(), "Fetched translations");

        Ok(rows.into_iter().collect())
    }
}
