//! HTTP backend abstraction for the ipinfo API.
//!
//! A trait-based backend keeps the client testable; production uses
//! reqwest. Requests are sent once and never retried.

use crate::config::IpInfoConfig;
use crate::error::{IpInfoError, IpInfoResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `GeoLookupPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch a URL, require a success status and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> IpInfoResult<T>;
}

/// URL text safe for logs and error messages: the query carries the token.
pub fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    redacted.set_query(None);
    redacted.to_string()
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &IpInfoConfig) -> IpInfoResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> IpInfoResult<T> {
        tracing::debug!(url = %redact(url), "Requesting IP geolocation");

        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IpInfoError::ApiRequestFailed {
                status: status.as_u16(),
                url: redact(url),
            });
        }

        // Decode through serde_json so malformed bodies surface as JsonParse.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub struct CannedResponse {
        pub status: u16,
        pub body: String,
    }

    impl CannedResponse {
        pub fn ok(json: &serde_json::Value) -> Self {
            Self {
                status: 200,
                body: json.to_string(),
            }
        }

        pub fn status(status: u16) -> Self {
            Self {
                status,
                body: String::new(),
            }
        }

        pub fn raw(body: &str) -> Self {
            Self {
                status: 200,
                body: body.to_string(),
            }
        }
    }

    /// A fake HTTP backend that returns one canned response and records the
    /// requested URLs.
    pub struct FakeBackend {
        response: CannedResponse,
        pub requests: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        pub fn new(response: CannedResponse) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> IpInfoResult<T> {
            self.requests.lock().unwrap().push(url.to_string());

            if !(200..300).contains(&self.response.status) {
                return Err(IpInfoError::ApiRequestFailed {
                    status: self.response.status,
                    url: redact(url),
                });
            }
            Ok(serde_json::from_str(&self.response.body)?)
        }
    }
}
