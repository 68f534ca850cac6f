//! Parsed `$ref` pointers

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SchemaError};

/// Prefix of a reference into the same document
pub const LOCAL_PREFIX: &str = "#/";

/// A local reference split into the directory it lives in and the
/// component name to splice in.
///
/// `#/components/schemas/tunnel` has directory `["components", "schemas"]`
/// and key `tunnel`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefPointer {
    raw: String,
    directory: Vec<String>,
    key: String,
}

impl RefPointer {
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(rest) = raw.strip_prefix(LOCAL_PREFIX) else {
            return Err(SchemaError::UnsupportedReference {
                pointer: raw.to_string(),
            });
        };

        let mut segments: Vec<String> = rest.split('/').map(unescape).collect();
        if segments.iter().any(String::is_empty) {
            return Err(SchemaError::InvalidReference {
                pointer: raw.to_string(),
                reason: "empty path segment".to_string(),
            });
        }

        // split() always yields at least one segment
        let key = segments.pop().unwrap_or_default();

        Ok(Self {
            raw: raw.to_string(),
            directory: segments,
            key,
        })
    }

    /// The pointer as written in the document
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn directory(&self) -> &[String] {
        &self.directory
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for RefPointer {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RefPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Decode JSON-Pointer escapes (`~1` is `/`, `~0` is `~`)
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
