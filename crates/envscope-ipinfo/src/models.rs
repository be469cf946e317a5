//! Internal API types for ipinfo.
//!
//! These types are internal to `envscope-ipinfo`. External consumers see the
//! `GeoRecord` defined in `envscope-core`.

use serde::Deserialize;
use url::Url;

// ============================================================================
// Settings (used internally, see config.rs for public config)
// ============================================================================

/// Resolved client settings.
#[derive(Debug, Clone)]
pub struct IpInfoSettings {
    /// Parsed lookup endpoint
    pub endpoint: Url,
    /// Access token, sent as a query parameter
    pub token: Option<String>,
}

impl IpInfoSettings {
    /// Full request URL including the token.
    pub fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(ref token) = self.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        url
    }
}

// ============================================================================
// Response
// ============================================================================

/// Body of a `/json` lookup.
///
/// Only `ip` is required. Reserved ("bogon") addresses come back with no
/// location fields at all.
#[derive(Debug, Clone, Deserialize)]
pub struct IpInfoResponse {
    pub ip: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub loc: Option<String>,
    #[serde(default)]
    pub bogon: bool,
}
