//! Public configuration for the ipinfo client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal settings are derived from this.

use std::time::Duration;

/// Default lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ipinfo.io/json";

/// Configuration for the ipinfo client.
///
/// The access token is configuration input; there is no built-in token.
///
/// # Example
///
/// ```
/// use envscope_ipinfo::IpInfoConfig;
///
/// let config = IpInfoConfig::new()
///     .with_token("0123456789abcd")
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct IpInfoConfig {
    /// Lookup endpoint returning the caller's own record
    pub(crate) endpoint: String,
    /// Access token appended as the `token` query parameter
    pub(crate) token: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Optional request timeout; `None` waits indefinitely
    pub(crate) timeout: Option<Duration>,
}

impl Default for IpInfoConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            user_agent: concat!("envscope-ipinfo/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl IpInfoConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup endpoint.
    ///
    /// Defaults to `https://ipinfo.io/json`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the access token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional access token. Empty strings count as no token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Bound the request duration. A timed-out request is reported as a
    /// network failure.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
