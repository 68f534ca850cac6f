//! HTTP client with explicit, bounded redirect handling
//!
//! Redirects are followed manually so that the hop count stays bounded and
//! credentials are only attached while the request stays on the origin it
//! started from.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::credentials::ScopedCredentials;
use crate::error::{CoreError, Result};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of redirect hops
pub const DEFAULT_MAX_REDIRECTS: u32 = 5;

/// Client configuration
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Timeout applied to every single request
    pub timeout: Duration,
    /// Maximum redirect hops before giving up
    pub max_redirects: u32,
    /// Value of the `Accept` header, if any
    pub accept: Option<String>,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            accept: None,
            user_agent: concat!("adviser/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchOptions {
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}

/// Terminal (non-redirect) response of a fetch
#[derive(Debug)]
pub struct FetchResponse {
    /// URL that produced this response, after redirects
    pub url: String,
    /// HTTP status code
    pub status: reqwest::StatusCode,
    /// Number of redirect hops taken
    pub redirects: u32,
    body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON regardless of the status code
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| CoreError::Decode {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }

    /// Fail with `HttpError` unless the status is 2xx
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CoreError::HttpError {
                status: self.status.as_u16(),
                url: self.url,
            })
        }
    }
}

/// HTTP client wrapper with redirect protection
pub struct HttpClient {
    client: reqwest::Client,
    credentials: ScopedCredentials,
    options: FetchOptions,
}

impl HttpClient {
    /// Create a new client
    pub fn new(options: FetchOptions, credentials: ScopedCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            // Redirects are handled in `get` so the hop count is ours to bound
            .redirect(reqwest::redirect::Policy::none())
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(|e| CoreError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            credentials,
            options,
        })
    }

    /// Create without credentials
    pub fn public(options: FetchOptions) -> Result<Self> {
        Self::new(options, ScopedCredentials::default())
    }

    /// Fetch a URL, following redirects, and return the terminal response
    /// whatever its status
    pub async fn get(&self, url: &str) -> Result<FetchResponse> {
        let original_url = url.to_string();
        let mut current_url = original_url.clone();
        let mut redirects = 0;

        loop {
            let mut request = self.client.get(&current_url);

            if let Some(accept) = &self.options.accept {
                request = request.header("Accept", accept);
            }

            // Add auth ONLY if same origin as original URL
            if ScopedCredentials::same_origin(&original_url, &current_url) {
                if let Some(creds) = self.credentials.for_url(&current_url) {
                    request = request.header("Authorization", creds.auth_header());
                }
            } else if !self.credentials.is_empty() {
                tracing::warn!(
                    "Cross-origin redirect from {} to {} - credentials not forwarded",
                    original_url,
                    current_url
                );
            }

            let response = request.send().await?;
            let status = response.status();

            if is_followed_redirect(status) {
                redirects += 1;
                if redirects > self.options.max_redirects {
                    return Err(CoreError::TooManyRedirects {
                        max: self.options.max_redirects,
                        url: original_url,
                    });
                }

                let location = response
                    .headers()
                    .get("Location")
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| CoreError::MissingLocation {
                        url: current_url.clone(),
                    })?;

                // Resolve relative URLs
                let base = Url::parse(&current_url).map_err(|e| CoreError::InvalidUrl {
                    url: current_url.clone(),
                    reason: e.to_string(),
                })?;
                let next = base.join(location).map_err(|e| CoreError::InvalidUrl {
                    url: location.to_string(),
                    reason: e.to_string(),
                })?;

                tracing::debug!(
                    "Redirect {} ({}) -> {}",
                    redirects,
                    status.as_u16(),
                    next
                );
                current_url = next.to_string();
                continue;
            }

            let body = response.bytes().await.map_err(|e| CoreError::NetworkError {
                message: e.to_string(),
            })?;

            return Ok(FetchResponse {
                url: current_url,
                status,
                redirects,
                body: body.to_vec(),
            });
        }
    }

    /// Fetch a URL and decode it as JSON, failing on non-2xx statuses
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.get(url).await?.error_for_status()?.json()
    }
}

/// 3xx statuses that carry a `Location` to follow; 300 and 304 are terminal
fn is_followed_redirect(status: reqwest::StatusCode) -> bool {
    status.as_u16() > 300
        && status.as_u16() < 400
        && status != reqwest::StatusCode::NOT_MODIFIED
}
