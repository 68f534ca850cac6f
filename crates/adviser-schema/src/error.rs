//! Schema resolution error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Unresolved reference: {pointer} does not exist in the document")]
    UnresolvedReference { pointer: String },

    #[error("Unsupported reference: {pointer} (only local '#/' references are resolved)")]
    UnsupportedReference { pointer: String },

    #[error("Invalid reference {pointer}: {reason}")]
    InvalidReference { pointer: String, reason: String },

    #[error("Circular reference: {chain}")]
    CircularReference { chain: String },

    #[error("Schema nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
