//! Submission check use case
//!
//! The whole validation pipeline as a pure function over the submission,
//! the session state, and the clock. Fails closed; the first failing check
//! decides the error. Deliberately free of I/O so the pipeline is testable
//! without a router.

use crate::application::config::GateConfig;
use crate::domain::signals::looks_automated;
use crate::error::{GateError, GateResult};
use platform::crypto::constant_time_eq;
use platform::session::SessionData;

/// A parsed gate submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub nonce: String,
    pub pow: String,
    /// Client-reported unix seconds
    pub ts: i64,
    /// Client-reported navigator metadata (untrusted)
    pub nav: String,
}

/// Run checks 3..6 of the pipeline (method and payload parsing happen at
/// the HTTP layer). `now` is the server clock in unix seconds.
pub fn evaluate(
    submission: &Submission,
    session: &SessionData,
    user_agent: &str,
    now: i64,
    config: &GateConfig,
) -> GateResult<()> {
    // Nonce binds the submission to the session that issued it
    let Some(stored_nonce) = session.nonce.as_deref() else {
        return Err(GateError::Nonce);
    };
    if !constant_time_eq(submission.nonce.as_bytes(), stored_nonce.as_bytes()) {
        return Err(GateError::Nonce);
    }

    // An absent or empty expectation rejects; the client cannot pick its own
    let expected = session.expected_pow.as_deref().unwrap_or("");
    if expected.is_empty() || !constant_time_eq(submission.pow.as_bytes(), expected.as_bytes()) {
        return Err(GateError::Pow);
    }

    // Stale payloads discourage replay
    if now - submission.ts > config.ts_max_age_secs() {
        return Err(GateError::Stale);
    }

    if looks_automated(user_agent, &submission.nav) {
        return Err(GateError::Automation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSER_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Chrome/126.0 Safari/537.36";

    fn seeded_session() -> SessionData {
        SessionData {
            nonce: Some("nonce-1".to_string()),
            pow_seed: Some("seed-1".to_string()),
            expected_pow: Some("pow-1".to_string()),
            locale: None,
        }
    }

    fn valid_submission(now: i64) -> Submission {
        Submission {
            nonce: "nonce-1".to_string(),
            pow: "pow-1".to_string(),
            ts: now,
            nav: "Linux x86_64".to_string(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        let config = GateConfig::default();
        let now = 1_700_000_000;
        let result = evaluate(&valid_submission(now), &seeded_session(), BROWSER_UA, now, &config);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn nonce_mismatch_rejects_first() {
        let config = GateConfig::default();
        let now = 1_700_000_000;
        let mut submission = valid_submission(now);
        submission.nonce = "wrong".to_string();
        // Everything else is also wrong; nonce must win
        submission.pow = "wrong".to_string();
        submission.ts = 0;

        let result = evaluate(&submission, &seeded_session(), BROWSER_UA, now, &config);
        assert_eq!(result, Err(GateError::Nonce));
    }

    #[test]
    fn missing_session_nonce_rejects() {
        let config = GateConfig::default();
        let now = 1_700_000_000;
        let result = evaluate(
            &valid_submission(now),
            &SessionData::default(),
            BROWSER_UA,
            now,
            &config,
        );
        assert_eq!(result, Err(GateError::Nonce));
    }

    #[test]
    fn pow_mismatch_or_absent_expectation_rejects() {
        let config = GateConfig::default();
        let now = 1_700_000_000;

        let mut submission = valid_submission(now);
        submission.pow = "wrong".to_string();
        let result = evaluate(&submission, &seeded_session(), BROWSER_UA, now, &config);
        assert_eq!(result, Err(GateError::Pow));

        let mut session = seeded_session();
        session.expected_pow = None;
        let result = evaluate(&valid_submission(now), &session, BROWSER_UA, now, &config);
        assert_eq!(result, Err(GateError::Pow));

        let mut session = seeded_session();
        session.expected_pow = Some(String::new());
        let mut submission = valid_submission(now);
        submission.pow = String::new();
        let result = evaluate(&submission, &session, BROWSER_UA, now, &config);
        assert_eq!(result, Err(GateError::Pow));
    }

    #[test]
    fn timestamp_boundary_is_sixty_seconds() {
        let config = GateConfig::default();
        let now = 1_700_000_000;

        let mut submission = valid_submission(now);
        submission.ts = now - 61;
        let result = evaluate(&submission, &seeded_session(), BROWSER_UA, now, &config);
        assert_eq!(result, Err(GateError::Stale));

        submission.ts = now - 59;
        let result = evaluate(&submission, &seeded_session(), BROWSER_UA, now, &config);
        assert_eq!(result, Ok(()));

        submission.ts = now - 60;
        let result = evaluate(&submission, &seeded_session(), BROWSER_UA, now, &config);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn automation_signature_rejects_even_when_rest_is_valid() {
        let config = GateConfig::default();
        let now = 1_700_000_000;

        let result = evaluate(
            &valid_submission(now),
            &seeded_session(),
            "Mozilla/5.0 HeadlessChrome/126.0",
            now,
            &config,
        );
        assert_eq!(result, Err(GateError::Automation));

        let mut submission = valid_submission(now);
        submission.nav = "webdriver=true".to_string();
        let result = evaluate(&submission, &seeded_session(), BROWSER_UA, now, &config);
        assert_eq!(result, Err(GateError::Automation));
    }
}
