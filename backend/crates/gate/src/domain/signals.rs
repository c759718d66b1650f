//! Automation signature matching
//!
//! Case-insensitive substring scan of the User-Agent plus the client's
//! self-reported navigator string against a fixed signature set. This is a
//! coarse filter; sophisticated automation will not trip it, and that is
//! within the gate's threat model.

/// Known headless-browser / automation tokens (lowercase)
pub const AUTOMATION_SIGNATURES: &[&str] = &[
    "headlesschrome",
    "phantomjs",
    "slimerjs",
    "selenium",
    "webdriver",
    "puppeteer",
    "playwright",
    "python-requests",
    "scrapy",
    "curl/",
    "wget/",
];

/// Whether the combined User-Agent and navigator metadata matches any
/// known automation signature
pub fn looks_automated(user_agent: &str, nav: &str) -> bool {
    let probe = format!("{user_agent} {nav}").to_ascii_lowercase();
    AUTOMATION_SIGNATURES.iter().any(|sig| probe.contains(sig))
}
