//! CustomResourceDefinition boilerplate

use serde_json::{Value as JsonValue, json};

use crate::names::ResourceNames;

/// API group of every generated resource
pub const GROUP: &str = "cloudflare.adviser.com";

/// The single served/storage version
pub const VERSION: &str = "v1beta1";

/// JSON pointer to the slot an extracted schema is embedded at
pub const SPEC_SCHEMA_POINTER: &str = "/spec/versions/0/schema/openAPIV3Schema/properties/spec";

const API_VERSION_DESCRIPTION: &str = "APIVersion defines the versioned schema of this representation of an object. Servers should convert recognized schemas to the latest internal value, and may reject unrecognized values. More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#resources";

const KIND_DESCRIPTION: &str = "Kind is a string value representing the REST resource this object represents. Servers may infer this from the endpoint the client submits requests to. Cannot be updated. In CamelCase. More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#types-kinds";

/// Build the CRD envelope for a name set
///
/// The `spec` property is `null` until a schema is embedded with
/// [`set_spec_schema`].
pub fn build_envelope(names: &ResourceNames) -> JsonValue {
    let kind = &names.kind;

    json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinition",
        "metadata": {
            "name": format!("{}.{}", names.plural, GROUP),
        },
        "spec": {
            "group": GROUP,
            "versions": [{
                "name": VERSION,
                "served": true,
                "storage": true,
                "schema": {
                    "openAPIV3Schema": {
                        "description": format!("{kind} is the Schema for the {kind} API"),
                        "type": "object",
                        "properties": {
                            "apiVersion": {
                                "description": API_VERSION_DESCRIPTION,
                                "type": "string",
                            },
                            "kind": {
                                "description": KIND_DESCRIPTION,
                                "type": "string",
                            },
                            "metadata": {
                                "type": "object",
                            },
                            "spec": null,
                            "status": status_schema(kind),
                        },
                    },
                },
            }],
            "names": names,
            "scope": "Namespaced",
        },
    })
}

fn status_schema(kind: &str) -> JsonValue {
    json!({
        "description": format!("{kind}Status defines the observed state of {kind}"),
        "properties": {
            "conditions": {
                "items": {
                    "properties": {
                        "lastTransitionTime": {
                            "description": "The last time this Condition status changed.",
                            "format": "date-time",
                            "type": "string",
                        },
                        "message": {
                            "description": "Full text reason for current status of the condition.",
                            "type": "string",
                        },
                        "reason": {
                            "description": "One word, camel-case reason for current status of the condition.",
                            "type": "string",
                        },
                        "status": {
                            "description": "True, False, or Unknown",
                            "type": "string",
                        },
                        "type": {
                            "description": "Type indicates the scope of the custom resource status addressed by the condition.",
                            "type": "string",
                        },
                    },
                    "required": ["status", "type"],
                    "type": "object",
                },
                "type": "array",
            },
            "observedGeneration": {
                "description": format!(
                    "observedGeneration is the most recent successful generation observed for this {kind}. It corresponds to the {kind}'s generation, which is updated on mutation by the API Server."
                ),
                "format": "int64",
                "type": "integer",
            },
        },
        "type": "object",
    })
}

/// Embed a schema as the envelope's `spec` property
pub fn set_spec_schema(envelope: &mut JsonValue, schema: JsonValue) {
    if let Some(slot) = envelope.pointer_mut(SPEC_SCHEMA_POINTER) {
        *slot = schema;
    }
}

/// The embedded `spec` schema, if any
pub fn spec_schema(envelope: &JsonValue) -> Option<&JsonValue> {
    envelope.pointer(SPEC_SCHEMA_POINTER).filter(|s| !s.is_null())
}
