//! `$ref` inlining and documentation stripping
//!
//! The resolver walks a schema fragment and produces a new tree in which
//! every local reference has been replaced by its target and every
//! documentation-only, read-only or vendor-extension field is gone:
//!
//! ```text
//! { "$ref": "#/components/schemas/name",     { "type": "string",
//!   "nullable": true }                          "nullable": true }
//!            │                                          ▲
//!            └── components.schemas.name ───────────────┘
//!                { "type": "string", "description": "…" }
//! ```
//!
//! Target fields are merged atop sibling fields before the node is
//! recursed, so inlined content goes through the same stripping.

use serde_json::{Map, Value as JsonValue};

use crate::dictionary::RefDictionary;
use crate::error::{Result, SchemaError};
use crate::pointer::RefPointer;

/// Field holding a reference pointer
pub const REF_KEY: &str = "$ref";

/// Fields that never survive resolution
pub const STRIPPED_KEYS: [&str; 3] = ["description", "title", "readOnly"];

/// Prefix of vendor extension fields
pub const EXTENSION_PREFIX: &str = "x-";

/// Default limit on schema nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Whether a field is dropped from resolver output
pub fn is_stripped(key: &str) -> bool {
    STRIPPED_KEYS.contains(&key) || key.starts_with(EXTENSION_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Maximum object/array nesting below the resolved node
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Resolves references against a borrowed dictionary
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    dictionary: RefDictionary<'a>,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(dictionary: RefDictionary<'a>) -> Self {
        Self::with_options(dictionary, ResolveOptions::default())
    }

    pub fn with_options(dictionary: RefDictionary<'a>, options: ResolveOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// Resolve a node into a new, reference-free tree
    pub fn resolve(&self, node: &JsonValue) -> Result<JsonValue> {
        let mut expanding = Vec::new();
        self.resolve_value(node, 0, &mut expanding)
    }

    fn resolve_value(
        &self,
        node: &JsonValue,
        depth: usize,
        expanding: &mut Vec<String>,
    ) -> Result<JsonValue> {
        if depth > self.options.max_depth {
            return Err(SchemaError::DepthExceeded {
                max_depth: self.options.max_depth,
            });
        }

        match node {
            JsonValue::Object(map) => self.resolve_object(map, depth, expanding),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| self.resolve_value(item, depth + 1, expanding))
                .collect::<Result<Vec<_>>>()
                .map(JsonValue::Array),
            scalar => Ok(scalar.clone()),
        }
    }

    fn resolve_object(
        &self,
        map: &Map<String, JsonValue>,
        depth: usize,
        expanding: &mut Vec<String>,
    ) -> Result<JsonValue> {
        let mut fields = map.clone();
        let entered = expanding.len();

        // A target may itself be a reference, so keep inlining until none is left
        while let Some(reference) = fields.shift_remove(REF_KEY) {
            let pointer = parse_reference(&reference)?;

            if expanding.iter().any(|p| p == pointer.as_str()) {
                let mut chain = expanding.clone();
                chain.push(pointer.to_string());
                return Err(SchemaError::CircularReference {
                    chain: chain.join(" -> "),
                });
            }

            let target = self.dictionary.lookup(&pointer)?;
            let target = target
                .as_object()
                .ok_or_else(|| SchemaError::InvalidReference {
                    pointer: pointer.to_string(),
                    reason: "target is not an object".to_string(),
                })?;

            tracing::trace!("Inlining {}", pointer);
            for (key, value) in target {
                fields.insert(key.clone(), value.clone());
            }
            expanding.push(pointer.to_string());
        }

        let mut resolved = Map::with_capacity(fields.len());
        for (key, value) in &fields {
            if is_stripped(key) {
                continue;
            }
            resolved.insert(key.clone(), self.resolve_value(value, depth + 1, expanding)?);
        }

        expanding.truncate(entered);
        Ok(JsonValue::Object(resolved))
    }
}

fn parse_reference(reference: &JsonValue) -> Result<RefPointer> {
    match reference {
        JsonValue::String(raw) => RefPointer::parse(raw),
        other => Err(SchemaError::InvalidReference {
            pointer: other.to_string(),
            reason: "reference is not a string".to_string(),
        }),
    }
}

/// Resolve `node` against `document` with default options
pub fn resolve(node: &JsonValue, document: &JsonValue) -> Result<JsonValue> {
    Resolver::new(RefDictionary::new(document)).resolve(node)
}
