//! AccessGroup rule restructuring
//!
//! The API models each include rule as a `oneOf` over single-key objects
//! (`{email: …}`, `{ip: …}`, …). The CRD instead exposes one object whose
//! properties are all rule keys, with a `oneOf` requiring exactly one of
//! them:
//!
//! ```text
//! include.items.oneOf:                 include.items:
//!   - properties: {email: E}             properties: {email: E, ip: I}
//!   - properties: {ip: I}        ──►     oneOf:
//!                                          - required: [email]
//!                                          - required: [ip]
//! ```
//!
//! `exclude` and `require` get the same rule schema.

use serde_json::{Map, Value as JsonValue, json};

use crate::error::{CrdError, Result};

/// Rule lists sharing the restructured schema
pub const RULE_FIELDS: [&str; 3] = ["include", "exclude", "require"];

const KIND: &str = "AccessGroup";
const VARIANTS_POINTER: &str = "/properties/include/items/oneOf";

/// Build the merged rule schema from the resolved `include` union
pub fn rule_schema(spec: &JsonValue) -> Result<JsonValue> {
    let variants = spec
        .pointer(VARIANTS_POINTER)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| mismatch(VARIANTS_POINTER, "expected an array of rule variants"))?;

    let mut properties = Map::new();
    let mut one_of = Vec::with_capacity(variants.len());

    for (index, variant) in variants.iter().enumerate() {
        let (key, schema) = variant
            .get("properties")
            .and_then(JsonValue::as_object)
            .and_then(|props| props.iter().next())
            .ok_or_else(|| {
                mismatch(
                    &format!("{}/{}/properties", VARIANTS_POINTER, index),
                    "rule variant has no properties",
                )
            })?;

        if properties.insert(key.clone(), schema.clone()).is_none() {
            one_of.push(json!({ "required": [key] }));
        } else {
            tracing::debug!("AccessGroup rule '{}' listed more than once", key);
        }
    }

    Ok(json!({
        "type": "object",
        "properties": properties,
        "oneOf": one_of,
    }))
}

/// Replace `include`, `exclude` and `require` with arrays of the merged
/// rule schema
pub fn restructure_rules(spec: &mut JsonValue) -> Result<()> {
    let rule = rule_schema(spec)?;

    let properties = spec
        .get_mut("properties")
        .and_then(JsonValue::as_object_mut)
        .ok_or_else(|| mismatch("/properties", "expected an object"))?;

    for field in RULE_FIELDS {
        properties.insert(
            field.to_string(),
            json!({ "type": "array", "items": rule.clone() }),
        );
    }

    Ok(())
}

fn mismatch(path: &str, reason: &str) -> CrdError {
    CrdError::ShapeMismatch {
        kind: KIND.to_string(),
        path: format!("spec{}", path),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access_group_spec() -> JsonValue {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "include": {
                    "type": "array",
                    "items": {
                        "oneOf": [
                            { "type": "object", "properties": { "a": { "type": "string" } } },
                            { "type": "object", "properties": { "b": { "type": "integer" } } }
                        ]
                    }
                }
            },
            "required": ["name", "include"]
        })
    }

    #[test]
    fn test_rule_schema_unions_variants() {
        let rule = rule_schema(&access_group_spec()).unwrap();

        assert_eq!(
            rule,
            json!({
                "type": "object",
                "properties": {
                    "a": { "type": "string" },
                    "b": { "type": "integer" }
                },
                "oneOf": [
                    { "required": ["a"] },
                    { "required": ["b"] }
                ]
            })
        );
    }

    #[test]
    fn test_restructure_copies_rule_to_all_fields() {
        let mut spec = access_group_spec();
        restructure_rules(&mut spec).unwrap();

        let include = &spec["properties"]["include"];
        assert_eq!(include["type"], "array");
        assert_eq!(include["items"]["properties"]["a"], json!({ "type": "string" }));
        assert_eq!(
            include["items"]["oneOf"],
            json!([{ "required": ["a"] }, { "required": ["b"] }])
        );
        assert_eq!(spec["properties"]["exclude"], *include);
        assert_eq!(spec["properties"]["require"], *include);

        // untouched
        assert_eq!(spec["properties"]["name"], json!({ "type": "string" }));
        assert_eq!(spec["required"], json!(["name", "include"]));
    }

    #[test]
    fn test_duplicate_rule_keys_required_once() {
        let spec = json!({
            "properties": {
                "include": {
                    "items": {
                        "oneOf": [
                            { "properties": { "a": { "type": "string" } } },
                            { "properties": { "a": { "type": "string" } } }
                        ]
                    }
                }
            }
        });

        let rule = rule_schema(&spec).unwrap();
        assert_eq!(rule["oneOf"], json!([{ "required": ["a"] }]));
    }

    #[test]
    fn test_missing_union_is_shape_mismatch() {
        let mut spec = json!({ "properties": { "include": { "type": "array" } } });
        let err = restructure_rules(&mut spec).unwrap_err();

        match err {
            CrdError::ShapeMismatch { kind, path, .. } => {
                assert_eq!(kind, "AccessGroup");
                assert_eq!(path, "spec/properties/include/items/oneOf");
            }
            other => panic!("Expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_variant_without_properties_is_shape_mismatch() {
        let spec = json!({
            "properties": {
                "include": {
                    "items": { "oneOf": [{ "properties": { "a": {} } }, { "type": "object" }] }
                }
            }
        });

        let err = rule_schema(&spec).unwrap_err();
        assert!(
            matches!(err, CrdError::ShapeMismatch { ref path, .. } if path.ends_with("oneOf/1/properties"))
        );
    }
}
