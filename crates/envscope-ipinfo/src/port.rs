//! Port trait implementation for `IpInfoClient`.
//!
//! Implements the core-owned `GeoLookupPort`, converting internal ipinfo
//! types and errors into core types.

use async_trait::async_trait;
use envscope_core::ports::{GeoLookupError, GeoLookupPort, GeoLookupResult};
use envscope_core::GeoRecord;

use crate::client::IpInfoClient;
use crate::error::IpInfoError;
use crate::http::HttpBackend;
use crate::models::IpInfoResponse;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `IpInfoError` to core `GeoLookupError`.
fn map_error(err: IpInfoError) -> GeoLookupError {
    match err {
        IpInfoError::ApiRequestFailed { status, .. } => GeoLookupError::HttpStatus { status },
        IpInfoError::Network(e) => GeoLookupError::Network {
            message: e.to_string(),
        },
        IpInfoError::InvalidUrl(e) => GeoLookupError::Configuration {
            message: e.to_string(),
        },
        IpInfoError::JsonParse(e) => GeoLookupError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_geo_record(response: IpInfoResponse) -> GeoRecord {
    GeoRecord {
        ip: response.ip,
        country: response.country,
        country_name: response.country_name,
        region: response.region,
        city: response.city,
        postal: response.postal,
        org: response.org,
        loc: response.loc,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> GeoLookupPort for IpInfoClient<B> {
    async fn lookup(&self) -> GeoLookupResult<GeoRecord> {
        let response = self.fetch().await.map_err(map_error)?;
        if response.bogon {
            tracing::debug!(ip = %response.ip, "Lookup returned a reserved address");
        }
        Ok(to_geo_record(response))
    }
}
