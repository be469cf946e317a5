//! ipinfo client.

use crate::config::IpInfoConfig;
use crate::error::IpInfoResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{IpInfoResponse, IpInfoSettings};
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default ipinfo client using the reqwest HTTP backend.
pub type DefaultIpInfoClient = IpInfoClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the ipinfo lookup endpoint.
///
/// Generic over the HTTP backend for testing. Use `DefaultIpInfoClient` in
/// production code.
pub struct IpInfoClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) settings: IpInfoSettings,
}

impl DefaultIpInfoClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the endpoint is not a valid URL or the HTTP client cannot
    /// be built.
    pub fn new(config: &IpInfoConfig) -> IpInfoResult<Self> {
        let settings = Self::to_settings(config)?;
        if settings.token.is_none() {
            tracing::warn!("No ipinfo access token configured, requests may be rate limited");
        }
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            settings,
        })
    }

    fn to_settings(config: &IpInfoConfig) -> IpInfoResult<IpInfoSettings> {
        Ok(IpInfoSettings {
            endpoint: Url::parse(&config.endpoint)?,
            token: config.token.clone(),
        })
    }
}

impl<B: HttpBackend> IpInfoClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(settings: IpInfoSettings, backend: B) -> Self {
        Self { backend, settings }
    }

    /// Fetch the caller's record.
    pub(crate) async fn fetch(&self) -> IpInfoResult<IpInfoResponse> {
        self.backend.get_json(&self.settings.request_url()).await
    }
}
