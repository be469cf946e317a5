//! Internal error types for ipinfo operations.
//!
//! These errors are mapped to core port errors at the boundary.

use thiserror::Error;

/// Result type alias for ipinfo operations.
pub type IpInfoResult<T> = Result<T, IpInfoError>;

/// Errors related to the ipinfo API.
#[derive(Debug, Error)]
pub enum IpInfoError {
    /// The API answered with a non-success status.
    #[error("ipinfo request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The requested URL, without its query string
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = IpInfoError::ApiRequestFailed {
            status: 403,
            url: "https://ipinfo.io/json".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("ipinfo.io"));
    }

    #[test]
    fn test_json_parse_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = IpInfoError::from(source);
        assert!(error.to_string().starts_with("JSON parsing error"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let source = url::Url::parse("not a url").unwrap_err();
        assert!(IpInfoError::from(source).to_string().contains("Invalid URL"));
    }
}
