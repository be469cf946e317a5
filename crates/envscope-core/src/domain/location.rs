//! IP geolocation record returned by the lookup port.

use serde::{Deserialize, Serialize};

/// Geolocation data for the caller's public IP.
///
/// Only `ip` is guaranteed; the rest depends on what the lookup service
/// knows about the address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
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
    /// ISP / organization, e.g. `AS15169 Google LLC`.
    #[serde(default)]
    pub org: Option<String>,
    /// Combined `"lat,lon"` string.
    #[serde(default)]
    pub loc: Option<String>,
}

impl GeoRecord {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Self::default()
        }
    }

    /// Split `loc` into latitude and longitude text.
    ///
    /// The coordinate text is kept literally; no numeric parsing happens.
    /// Fields after the second comma are ignored.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let mut fields = self.loc.as_deref()?.split(',');
        let lat = fields.next()?;
        let lon = fields.next()?;
        Some(Coordinates {
            lat: lat.to_string(),
            lon: lon.to_string(),
        })
    }
}

/// Literal latitude/longitude pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}
