//! CLI error types with exit code handling
//!
//! Library errors are flattened into a [`CliError`] that knows its exit code
//! and renders as a miette diagnostic.

use adviser_core::CoreError;
use adviser_crd::CrdError;
use adviser_release::ReleaseError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// The OpenAPI document could not be loaded
    #[error("Source error: {message}")]
    #[diagnostic(code(adviser::cli::source))]
    Source {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Extraction or reference resolution failed
    #[error("Schema error: {message}")]
    #[diagnostic(code(adviser::cli::schema))]
    Schema {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A request failed in transit or answered with something unusable
    #[error("Network error: {message}")]
    #[diagnostic(code(adviser::cli::network))]
    Network {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Invalid command-line input
    #[error("Invalid input: {message}")]
    #[diagnostic(code(adviser::cli::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(adviser::cli::io))]
    Io { message: String },

    /// Wrapped error for passthrough (stores the formatted message)
    #[error("{message}")]
    #[diagnostic(code(adviser::cli::error))]
    Other {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Internal error (runtime, unexpected failure)
    #[error("Internal error: {message}")]
    #[diagnostic(code(adviser::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Source { .. } => exit_codes::SOURCE_ERROR,
            CliError::Schema { .. } => exit_codes::SCHEMA_ERROR,
            CliError::Network { .. } => exit_codes::NETWORK_ERROR,
            CliError::Usage { .. } => exit_codes::USAGE_ERROR,
            CliError::Io { .. } => exit_codes::ERROR,
            CliError::Other { .. } => exit_codes::ERROR,
            CliError::Internal { .. } => exit_codes::ERROR,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn usage_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ClientBuild { .. } => CliError::internal(err.to_string()),
            CoreError::InvalidUrl { .. } => CliError::Usage {
                message: err.to_string(),
                help: None,
            },
            _ => CliError::Network {
                message: err.to_string(),
                help: None,
            },
        }
    }
}

impl From<CrdError> for CliError {
    fn from(err: CrdError) -> Self {
        match err {
            CrdError::SourceUnavailable { .. } => CliError::Source {
                message: err.to_string(),
                help: Some(
                    "Pass --source with a reachable URL or a local copy of the OpenAPI document"
                        .to_string(),
                ),
            },
            CrdError::ShapeMismatch { .. } => CliError::Schema {
                message: err.to_string(),
                help: Some("The upstream document layout may have changed".to_string()),
            },
            CrdError::Schema { .. } => CliError::Schema {
                message: err.to_string(),
                help: None,
            },
            CrdError::Serialization(message) => CliError::Other {
                message,
                help: None,
            },
        }
    }
}

impl From<ReleaseError> for CliError {
    fn from(err: ReleaseError) -> Self {
        match err {
            ReleaseError::InvalidRepository { .. } => {
                CliError::usage_with_help(err.to_string(), "Repositories are given as owner/name")
            }
            ReleaseError::Fetch { ref source, .. } if source.is_transport() => {
                CliError::Network {
                    message: err.to_string(),
                    help: None,
                }
            }
            ReleaseError::Fetch { .. } => CliError::Other {
                message: err.to_string(),
                help: Some(
                    "The API answered with something other than a release; set APIUSER if the rate limit was hit"
                        .to_string(),
                ),
            },
            ReleaseError::Client(source) => CliError::from(source),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use adviser_schema::SchemaError;

    #[test]
    fn test_crd_errors_map_to_exit_codes() {
        let source = CliError::from(CrdError::SourceUnavailable {
            source_name: "openapi.json".to_string(),
            reason: "not found".to_string(),
        });
        assert_eq!(source.exit_code(), exit_codes::SOURCE_ERROR);

        let shape = CliError::from(CrdError::ShapeMismatch {
            kind: "CFDTunnel".to_string(),
            path: "paths".to_string(),
            reason: "missing".to_string(),
        });
        assert_eq!(shape.exit_code(), exit_codes::SCHEMA_ERROR);

        let schema = CliError::from(CrdError::Schema {
            kind: "AccessGroup".to_string(),
            source: SchemaError::DepthExceeded { max_depth: 4 },
        });
        assert_eq!(schema.exit_code(), exit_codes::SCHEMA_ERROR);
    }

    #[test]
    fn test_release_errors_map_to_exit_codes() {
        let invalid = CliError::from(ReleaseError::InvalidRepository {
            input: "cloudflared".to_string(),
        });
        assert_eq!(invalid.exit_code(), exit_codes::USAGE_ERROR);

        let fetch = CliError::from(ReleaseError::Fetch {
            repo: "a/b".to_string(),
            source: CoreError::Timeout {
                url: "https://api.github.com".to_string(),
            },
        });
        assert_eq!(fetch.exit_code(), exit_codes::NETWORK_ERROR);

        let decode = CliError::from(ReleaseError::Fetch {
            repo: "a/b".to_string(),
            source: CoreError::Decode {
                url: "https://api.github.com".to_string(),
                message: "expected value".to_string(),
            },
        });
        assert_eq!(decode.exit_code(), exit_codes::ERROR);
        assert!(decode.to_string().contains("a/b"));
    }

    #[test]
    fn test_client_build_is_internal() {
        let err = CliError::from(ReleaseError::Client(CoreError::ClientBuild {
            message: "no TLS backend".to_string(),
        }));
        assert!(matches!(err, CliError::Internal { .. }));
    }
}
