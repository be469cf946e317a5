//! IP geolocation client backed by the ipinfo.io JSON API.
//!
//! Implements [`envscope_core::GeoLookupPort`]. One request per lookup, no
//! retries, no caching.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultIpInfoClient is used through the GeoLookupPort trait, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultIpInfoClient;

// Configuration
pub use config::IpInfoConfig;

// Errors surfaced while constructing a client
pub use error::IpInfoError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
