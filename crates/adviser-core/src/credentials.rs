//! Credential handling with origin scoping
//!
//! Credentials are bound to URL prefixes and are never forwarded after a
//! redirect leaves the origin of the first request.

use std::collections::HashMap;

use base64::Engine;
use url::Url;

/// Environment variable holding the GitHub API credential
pub const API_USER_ENV: &str = "APIUSER";

/// Credential types supported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Basic authentication (username/password)
    Basic { username: String, password: String },

    /// Pre-joined `user:token` string, encoded verbatim
    Token { value: String },
}

impl Credentials {
    /// Create basic auth credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create credentials from a raw `user:token` string
    ///
    /// A value with a `:` is split into Basic username and password; one
    /// without is encoded verbatim. Empty strings are treated as "no
    /// credential".
    pub fn token(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }

        Some(match value.split_once(':') {
            Some((username, password)) => Self::basic(username, password),
            None => Credentials::Token { value },
        })
    }

    /// Authorization header value
    pub fn auth_header(&self) -> String {
        let raw = match self {
            Credentials::Basic { username, password } => format!("{}:{}", username, password),
            Credentials::Token { value } => value.clone(),
        };
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }
}

/// Scoped credentials - maps URL prefixes to credentials
#[derive(Debug, Clone, Default)]
pub struct ScopedCredentials {
    scopes: HashMap<String, Credentials>,
}

impl ScopedCredentials {
    /// Scope a single credential to a URL prefix
    pub fn single(url_prefix: &str, credentials: Credentials) -> Self {
        let mut scoped = Self::default();
        scoped.add(url_prefix, credentials);
        scoped
    }

    /// Add credentials for a URL scope
    pub fn add(&mut self, url_prefix: &str, credentials: Credentials) {
        let prefix = url_prefix.trim_end_matches('/').to_string();
        self.scopes.insert(prefix, credentials);
    }

    /// Get credentials for a URL (by longest matching prefix)
    pub fn for_url(&self, url: &str) -> Option<&Credentials> {
        self.scopes
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, creds)| creds)
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Check if two URLs are same-origin (for redirect safety)
    pub fn same_origin(url1: &str, url2: &str) -> bool {
        match (Url::parse(url1), Url::parse(url2)) {
            (Ok(u1), Ok(u2)) => {
                u1.scheme() == u2.scheme()
                    && u1.host() == u2.host()
                    && u1.port_or_known_default() == u2.port_or_known_default()
            }
            _ => false,
        }
    }
}
