//! Geolocation providers
//!
//! Each provider is a URL builder plus a parser from its JSON shape into
//! the common [`GeoLocation`]. A parser returns None for error payloads
//! (these APIs report failures with 200 + a status field) so the chain
//! moves on to the next provider.

use serde::Serialize;
use serde_json::Value;
use std::net::IpAddr;

/// Resolved location for an IP
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub country_code: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// One entry in the provider fallback chain
pub struct GeoProvider {
    pub name: &'static str,
    pub url: fn(IpAddr) -> String,
    pub parse: fn(&Value) -> Option<GeoLocation>,
}

/// The default provider chain, in resolution order
pub fn default_providers() -> Vec<GeoProvider> {
    vec![
        GeoProvider {
            name: "ip-api.com",
            url: |ip| format!("http://ip-api.com/json/{ip}"),
            parse: parse_ip_api,
        },
        GeoProvider {
            name: "ipwho.is",
            url: |ip| format!("https://ipwho.is/{ip}"),
            parse: parse_ipwhois,
        },
        GeoProvider {
            name: "ipapi.co",
            url: |ip| format!("https://ipapi.co/{ip}/json/"),
            parse: parse_ipapi,
        },
    ]
}

fn parse_ip_api(v: &Value) -> Option<GeoLocation> {
    if v["status"].as_str() != Some("success") {
        return None;
    }
    Some(GeoLocation {
        country_code: v["countryCode"].as_str()?.to_string(),
        country: v["country"].as_str().map(str::to_string),
        city: v["city"].as_str().map(str::to_string),
        latitude: v["lat"].as_f64(),
        longitude: v["lon"].as_f64(),
    })
}

fn parse_ipwhois(v: &Value) -> Option<GeoLocation> {
    if v["success"].as_bool() != Some(true) {
        return None;
    }
    Some(GeoLocation {
        country_code: v["country_code"].as_str()?.to_string(),
        country: v["country"].as_str().map(str::to_string),
        city: v["city"].as_str().map(str::to_string),
        latitude: v["latitude"].as_f64(),
        longitude: v["longitude"].as_f64(),
    })
}

fn parse_ipapi(v: &Value) -> Option<GeoLocation> {
    if v["error"].as_bool() == Some(true) {
        return None;
    }
    Some(GeoLocation {
        country_code: v["country_code"].as_str()?.to_string(),
        country: v["country_name"].as_str().map(str::to_string),
        city: v["city"].as_str().map(str::to_string),
        latitude: v["latitude"].as_f64(),
        longitude: v["longitude"].as_f64(),
    })
}
