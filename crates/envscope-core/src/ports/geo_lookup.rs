//! IP geolocation lookup port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::GeoRecord;

/// Errors from geolocation lookups.
///
/// These are domain-level errors. Implementation-specific errors (HTTP,
/// JSON) are mapped to these at the adapter boundary.
#[derive(Debug, Error)]
pub enum GeoLookupError {
    /// The service answered with a non-success status.
    #[error("Lookup service returned status {status}")]
    HttpStatus { status: u16 },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The response body was not the expected JSON.
    #[error("Invalid lookup response: {message}")]
    InvalidResponse { message: String },

    /// Configuration error (bad endpoint URL, etc.).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for lookup operations.
pub type GeoLookupResult<T> = Result<T, GeoLookupError>;

/// Port for the external geolocation lookup.
///
/// One call per reporter run; implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoLookupPort: Send + Sync {
    async fn lookup(&self) -> GeoLookupResult<GeoRecord>;
}
