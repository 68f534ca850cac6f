//! Adviser Schema - inline local `$ref` pointers in OpenAPI schema fragments
//!
//! - `RefPointer`: a parsed `#/a/b/key` pointer
//! - `RefDictionary`: read-only path accessor over the source document
//! - `Resolver`: builds a reference-free copy of a fragment with
//!   `description`, `title`, `readOnly` and `x-*` fields removed
//!
//! ```rust
//! use adviser_schema::resolve;
//! use serde_json::json;
//!
//! let doc = json!({ "components": { "schemas": { "id": { "type": "string", "title": "Id" } } } });
//! let node = json!({ "properties": { "id": { "$ref": "#/components/schemas/id" } } });
//!
//! let resolved = resolve(&node, &doc).unwrap();
//! assert_eq!(resolved, json!({ "properties": { "id": { "type": "string" } } }));
//! ```
//!
//! Circular references are not supported; they are reported as
//! `SchemaError::CircularReference` instead of being expanded.

pub mod dictionary;
pub mod error;
pub mod pointer;
pub mod resolve;

pub use dictionary::RefDictionary;
pub use error::{Result, SchemaError};
pub use pointer::RefPointer;
pub use resolve::{DEFAULT_MAX_DEPTH, ResolveOptions, Resolver, is_stripped, resolve};
