//! Cookie rendering and extraction

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes for a cookie this server issues.
///
/// The `Secure` flag is decided per request (mirrored from the transport),
/// so it is an argument to [`CookieAttributes::render`] rather than a field.
#[derive(Debug, Clone)]
pub struct CookieAttributes {
    pub name: String,
    pub path: String,
    pub http_only: bool,
    pub same_site: SameSite,
    /// None renders a session-scoped cookie (no Max-Age)
    pub max_age_secs: Option<i64>,
}

impl CookieAttributes {
    /// Render a Set-Cookie header value
    pub fn render(&self, value: &str, secure: bool) -> String {
        let mut cookie = format!("{}={}", self.name, value);
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str("; SameSite=");
        cookie.push_str(self.same_site.as_str());
        cookie.push_str("; Path=");
        cookie.push_str(&self.path);
        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        cookie
    }

    /// Render a Set-Cookie header value that removes the cookie
    pub fn render_removal(&self) -> String {
        format!("{}=; HttpOnly; Path={}; Max-Age=0", self.name, self.path)
    }
}

/// Extract a cookie value from the request headers
pub fn request_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

/// Whether the request arrived over TLS, as reported by the reverse proxy
pub fn request_is_https(headers: &HeaderMap) -> bool {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|proto| proto.split(',').next().unwrap_or("").trim())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn render_all_attributes() {
        let attrs = CookieAttributes {
            name: "test".to_string(),
            path: "/".to_string(),
            http_only: true,
            same_site: SameSite::Lax,
            max_age_secs: Some(3600),
        };

        let cookie = attrs.render("value123", true);
        assert!(cookie.starts_with("test=value123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn render_session_scoped_insecure() {
        let attrs = CookieAttributes {
            name: "sid".to_string(),
            path: "/".to_string(),
            http_only: true,
            same_site: SameSite::Lax,
            max_age_secs: None,
        };

        let cookie = attrs.render("abc", false);
        assert!(!cookie.contains("Secure"));
        assert!(!cookie.contains("Max-Age"));
    }

    #[test]
    fn extract_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; sid=abc123; other=xyz"),
        );

        assert_eq!(request_cookie(&headers, "sid"), Some("abc123".to_string()));
        assert_eq!(request_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(request_cookie(&headers, "missing"), None);
    }

    #[test]
    fn https_detection() {
        let mut headers = HeaderMap::new();
        assert!(!request_is_https(&headers));

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert!(request_is_https(&headers));

        headers.insert("x-forwarded-proto", HeaderValue::from_static("http"));
        assert!(!request_is_https(&headers));

        headers.insert("x-forwarded-proto", HeaderValue::from_static("HTTPS, http"));
        assert!(request_is_https(&headers));
    }
}
