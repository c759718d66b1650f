//! Ordered-fallback resolution
//!
//! The app resolves several things (geolocation providers, translation
//! locales) by trying an ordered list of sources and taking the first one
//! that produces a value. This module is that pattern, written once.

use std::future::Future;

/// Try `attempt` against each provider in order, returning the first
/// present result. Providers after the first hit are never invoked.
pub async fn first_present<P, T, F, Fut>(
    providers: impl IntoIterator<Item = P>,
    mut attempt: F,
) -> Option<T>
where
    F: FnMut(P) -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for provider in providers {
        if let Some(value) = attempt(provider).await {
            return Some(value);
        }
    }
    None
}
