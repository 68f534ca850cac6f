//! Adviser Core - shared plumbing for the adviser CI tools
//!
//! - **HTTP fetching**: bounded, explicit redirect following with a
//!   per-request timeout
//! - **Credentials**: Basic-auth credentials scoped to an origin, never
//!   forwarded across a cross-origin redirect

pub mod credentials;
pub mod error;
pub mod http;

pub use credentials::{API_USER_ENV, Credentials, ScopedCredentials};
pub use error::{CoreError, Result};
pub use http::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, FetchOptions, FetchResponse, HttpClient,
};
