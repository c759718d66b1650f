//! Geolocation client

use std::net::IpAddr;
use std::time::Duration;

use serde_json::Value;

use crate::providers::{GeoLocation, GeoProvider, default_providers};

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(3);

/// HTTP client over the provider fallback chain
pub struct GeoClient {
    http: reqwest::Client,
    providers: Vec<GeoProvider>,
}

impl GeoClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_providers(default_providers())
    }

    pub fn with_providers(providers: Vec<GeoProvider>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()?;
        Ok(Self { http, providers })
    }

    /// Resolve an IP through the chain; None when every provider fails.
    ///
    /// Provider failures (network, non-2xx, unparsable payload) are logged
    /// and treated as absent results, never surfaced as errors.
    pub async fn lookup(&self, ip: IpAddr) -> Option<GeoLocation> {
        let http = &self.http;
        platform::fallback::first_present(self.providers.iter(), |provider| async move {
            let url = (provider.url)(ip);
            let response = match http.get(&url).send().await.and_then(|r| r.error_for_status()) {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!(provider = provider.name, error = %e, "Geo provider failed");
                    return None;
                }
            };
            match response.json::<Value>().await {
                Ok(payload) => {
                    let location = (provider.parse)(&payload);
                    if location.is_none() {
                        tracing::debug!(provider = provider.name, "Geo provider returned no location");
                    }
                    location
                }
                Err(e) => {
                    tracing::debug!(provider = provider.name, error = %e, "Geo payload unparsable");
                    None
                }
            }
        })
        .await
    }
}
