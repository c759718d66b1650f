//! Accept-Language guess
//!
//! Applies the same normalize-or-base-reduce logic as the resolver to the
//! header's comma-separated candidates, in header order (quality weights
//! are ignored). This helper is intentionally not part of the documented
//! resolution order; wiring it in is an open product question (DESIGN.md).

use crate::resolver::LocaleSet;

/// First Accept-Language candidate that resolves to a recognized base,
/// in header order
pub fn guess_from_accept_language(locales: &LocaleSet, header: &str) -> Option<String> {
    header.split(',').find_map(|candidate| {
        let tag = candidate.split(';').next().unwrap_or("").trim();
        if tag.is_empty() || tag == "*" {
            return None;
        }
        locales.normalize(tag)
    })
}
