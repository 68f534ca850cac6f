//! Read-only, path-keyed view over a schema document

use serde_json::{Map, Value as JsonValue};

use crate::error::{Result, SchemaError};
use crate::pointer::RefPointer;

/// Lookup table for `$ref` targets.
///
/// Wraps the whole document without taking ownership; every segment of a
/// pointer's directory descends one object level.
#[derive(Debug, Clone, Copy)]
pub struct RefDictionary<'a> {
    root: &'a JsonValue,
}

impl<'a> RefDictionary<'a> {
    pub fn new(root: &'a JsonValue) -> Self {
        Self { root }
    }

    /// Walk a sequence of object keys from the root
    pub fn get<I, S>(&self, segments: I) -> Option<&'a JsonValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        segments
            .into_iter()
            .try_fold(self.root, |node, segment| node.as_object()?.get(segment.as_ref()))
    }

    /// The object a pointer's directory names
    pub fn directory(&self, pointer: &RefPointer) -> Option<&'a Map<String, JsonValue>> {
        self.get(pointer.directory())?.as_object()
    }

    /// Resolve a pointer to its target
    pub fn lookup(&self, pointer: &RefPointer) -> Result<&'a JsonValue> {
        self.directory(pointer)
            .and_then(|dir| dir.get(pointer.key()))
            .ok_or_else(|| SchemaError::UnresolvedReference {
                pointer: pointer.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> JsonValue {
        json!({
            "components": {
                "schemas": {
                    "name": { "type": "string" },
                    "list": [1, 2, 3]
                }
            }
        })
    }

    #[test]
    fn test_lookup_existing_target() {
        let doc = document();
        let dict = RefDictionary::new(&doc);
        let ptr = RefPointer::parse("#/components/schemas/name").unwrap();
        assert_eq!(dict.lookup(&ptr).unwrap(), &json!({ "type": "string" }));
    }

    #[test]
    fn test_lookup_missing_key() {
        let doc = document();
        let dict = RefDictionary::new(&doc);
        let ptr = RefPointer::parse("#/components/schemas/missing").unwrap();
        assert_eq!(
            dict.lookup(&ptr).unwrap_err(),
            SchemaError::UnresolvedReference {
                pointer: "#/components/schemas/missing".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_missing_directory() {
        let doc = document();
        let dict = RefDictionary::new(&doc);
        let ptr = RefPointer::parse("#/components/responses/name").unwrap();
        assert!(dict.lookup(&ptr).is_err());
    }

    #[test]
    fn test_directory_must_be_object() {
        let doc = document();
        let dict = RefDictionary::new(&doc);
        let ptr = RefPointer::parse("#/components/schemas/list/0").unwrap();
        assert!(dict.directory(&ptr).is_none());
    }

    #[test]
    fn test_get_path() {
        let doc = document();
        let dict = RefDictionary::new(&doc);
        assert_eq!(
            dict.get(["components", "schemas", "name", "type"]),
            Some(&json!("string"))
        );
        assert!(dict.get(["components", "nope"]).is_none());
        assert_eq!(dict.get(Vec::<String>::new()), Some(&doc));
    }
}
