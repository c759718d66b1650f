//! IP Geolocation
//!
//! An ordered chain of free HTTP geolocation providers, resolved through
//! `platform::fallback`: the first provider that answers with a usable
//! location wins, the rest are never contacted. Every provider is
//! best-effort; an exhausted chain is simply "location unknown".

pub mod client;
pub mod providers;
pub mod router;

pub use client::GeoClient;
pub use providers::{GeoLocation, GeoProvider, default_providers};
pub use router::geo_router;
