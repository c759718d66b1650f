//! Translation storage seam

use std::collections::HashMap;

use crate::error::I18nResult;

/// Translation repository trait
///
/// `fetch` returns the key -> value map for one locale and context
/// ("header", "footer", ...). A miss for a specific key is simply an absent
/// entry; the page layer decides default text.
#[trait_variant::make(TranslationRepository: Send)]
pub trait LocalTranslationRepository {
    async fn fetch(&self, locale: &str, context: &str) -> I18nResult<HashMap<String, String>>;
}

/// Fetch the first non-empty translation set along a locale chain
/// (resolved locale first, configured fallback after). Storage errors
/// propagate; an exhausted chain yields an empty map.
pub async fn fetch_with_fallback<R>(
    repo: &R,
    locales: &[&str],
    context: &str,
) -> I18nResult<HashMap<String, String>>
where
    R: TranslationRepository + Sync,
{
    // Boxed as `dyn Future + Send` to keep the closure's captured lifetimes
    // out of callers' futures (rustc can't prove auto traits for them there).
    let fut: std::pin::Pin<Box<dyn Future<Output = Option<I18nResult<HashMap<String, String>>>> + Send + '_>> =
        Box::pin(platform::fallback::first_present(
            locales.iter().copied(),
            |locale| async move {
                match repo.fetch(locale, context).await {
                    Err(e) => Some(Err(e)),
                    Ok(map) if !map.is_empty() => Some(Ok(map)),
                    Ok(_) => None,
                }
            },
        ));
    let outcome = fut.await;

    outcome.unwrap_or_else(|| Ok(HashMap::new()))
}
