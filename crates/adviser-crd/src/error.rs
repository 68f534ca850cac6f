//! Error types for CRD generation

use adviser_schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrdError {
    #[error("OpenAPI source unavailable: {source_name} - {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Schema shape mismatch in {kind}: {path} - {reason}")]
    ShapeMismatch {
        kind: String,
        path: String,
        reason: String,
    },

    #[error("Failed to resolve {kind} schema: {source}")]
    Schema {
        kind: String,
        #[source]
        source: SchemaError,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, CrdError>;

impl From<serde_json::Error> for CrdError {
    fn from(e: serde_json::Error) -> Self {
        CrdError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for CrdError {
    fn from(e: serde_yaml::Error) -> Self {
        CrdError::Serialization(e.to_string())
    }
}
