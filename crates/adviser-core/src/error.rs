//! Error types for fetch operations

use thiserror::Error;

/// Fetch operation errors
#[derive(Debug, Error)]
pub enum CoreError {
    // ============ Network Errors ============
    #[error("HTTP error: {status} - request to {url} failed")]
    HttpError { status: u16, url: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Too many redirects (max {max}) while fetching {url}")]
    TooManyRedirects { max: u32, url: String },

    #[error("Redirect from {url} without Location header")]
    MissingLocation { url: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    // ============ Payload Errors ============
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    // ============ Client Errors ============
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Whether the failure happened before any HTTP status was received
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CoreError::NetworkError { .. }
                | CoreError::Timeout { .. }
                | CoreError::TooManyRedirects { .. }
                | CoreError::MissingLocation { .. }
        )
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        if e.is_timeout() {
            CoreError::Timeout { url }
        } else if e.is_connect() {
            CoreError::NetworkError {
                message: format!("Connection failed: {}", e),
            }
        } else if let Some(status) = e.status() {
            CoreError::HttpError {
                status: status.as_u16(),
                url,
            }
        } else if e.is_decode() {
            CoreError::Decode {
                url,
                message: e.to_string(),
            }
        } else {
            CoreError::NetworkError {
                message: e.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for CoreError {
    fn from(e: url::ParseError) -> Self {
        CoreError::InvalidUrl {
            url: String::new(),
            reason: e.to_string(),
        }
    }
}
