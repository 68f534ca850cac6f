//! Error types for release lookups

use adviser_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid repository '{input}': expected owner/name")]
    InvalidRepository { input: String },

    #[error("Failed to look up latest release of {repo}: {source}")]
    Fetch {
        repo: String,
        #[source]
        source: CoreError,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] CoreError),
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
