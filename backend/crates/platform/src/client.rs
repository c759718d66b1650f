//! Client identification utilities
//!
//! Header access for the pieces of the request that identify the caller:
//! the User-Agent string and the client IP (behind a reverse proxy).

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// The request's User-Agent, or empty when absent or non-UTF8.
///
/// The gate treats a missing User-Agent the same as an empty one; the
/// automation scan runs over whatever string is present.
pub fn user_agent(headers: &HeaderMap) -> &str {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Extract the client IP address.
///
/// Checks the X-Forwarded-For header first (first entry in the list),
/// then falls back to the direct connection IP.
pub fn client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok())
        && let Some(first) = xff.split(',').next()
        && let Ok(ip) = first.trim().parse::<IpAddr>()
    {
        return Some(ip);
    }
    direct_ip
}
