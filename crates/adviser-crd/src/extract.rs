//! Per-kind extraction of request-body schemas from the OpenAPI document

use std::fmt;

use adviser_schema::{RefDictionary, ResolveOptions, Resolver};
use serde_json::{Map, Value as JsonValue};

use crate::access_group;
use crate::envelope::{build_envelope, set_spec_schema};
use crate::error::{CrdError, Result};
use crate::names::ResourceNames;

/// Media type of the request bodies the CRD schemas are taken from
pub const REQUEST_MEDIA_TYPE: &str = "application/json";

/// HTTP method of an OpenAPI operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

impl Method {
    /// Key of the operation inside an OpenAPI path item
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "post",
            Method::Put => "put",
        }
    }
}

/// The Cloudflare resources a CRD is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    AccessGroup,
    CfdTunnel,
    CfdTunnelConfig,
}

impl ResourceKind {
    /// All kinds, in output order
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::AccessGroup,
        ResourceKind::CfdTunnel,
        ResourceKind::CfdTunnelConfig,
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            ResourceKind::AccessGroup => "AccessGroup",
            ResourceKind::CfdTunnel => "CFDTunnel",
            ResourceKind::CfdTunnelConfig => "CFDTunnelConfig",
        }
    }

    fn singular(&self) -> &'static str {
        match self {
            ResourceKind::AccessGroup => "access-group",
            ResourceKind::CfdTunnel => "cfd-tunnel",
            ResourceKind::CfdTunnelConfig => "cfd-tunnel-config",
        }
    }

    pub fn names(&self) -> ResourceNames {
        ResourceNames::cloudflare(self.kind(), self.singular())
    }

    /// API route whose request body defines the resource spec
    pub fn route(&self) -> &'static str {
        match self {
            ResourceKind::AccessGroup => "/accounts/{account_id}/access/groups",
            ResourceKind::CfdTunnel => "/accounts/{account_id}/cfd_tunnel",
            ResourceKind::CfdTunnelConfig => {
                "/accounts/{account_id}/cfd_tunnel/{tunnel_id}/configurations"
            }
        }
    }

    pub fn method(&self) -> Method {
        match self {
            ResourceKind::CfdTunnelConfig => Method::Put,
            _ => Method::Post,
        }
    }

    /// Key path of the request-body schema inside the OpenAPI document
    pub fn schema_path(&self) -> [&'static str; 7] {
        [
            "paths",
            self.route(),
            self.method().as_str(),
            "requestBody",
            "content",
            REQUEST_MEDIA_TYPE,
            "schema",
        ]
    }

    /// Extract, resolve and post-process the spec schema for this kind
    pub fn spec_schema(&self, document: &JsonValue, options: ResolveOptions) -> Result<JsonValue> {
        let dictionary = RefDictionary::new(document);
        let path = self.schema_path();

        let schema = dictionary
            .get(path)
            .ok_or_else(|| self.shape_mismatch(&path, "path not found in document"))?
            .as_object()
            .ok_or_else(|| self.shape_mismatch(&path, "request body schema is not an object"))?;

        // Request bodies are objects even when the API schema leaves it implicit
        let mut seeded = Map::new();
        seeded.insert("type".to_string(), JsonValue::String("object".to_string()));
        for (key, value) in schema {
            seeded.insert(key.clone(), value.clone());
        }

        let mut spec = Resolver::with_options(dictionary, options)
            .resolve(&JsonValue::Object(seeded))
            .map_err(|source| CrdError::Schema {
                kind: self.kind().to_string(),
                source,
            })?;

        if *self == ResourceKind::AccessGroup {
            access_group::restructure_rules(&mut spec)?;
        }

        Ok(spec)
    }

    /// Build the complete CRD for this kind
    pub fn extract(&self, document: &JsonValue, options: ResolveOptions) -> Result<JsonValue> {
        tracing::debug!(
            "Extracting {} from {} {}",
            self.kind(),
            self.method().as_str().to_uppercase(),
            self.route()
        );

        let spec = self.spec_schema(document, options)?;
        let mut crd = build_envelope(&self.names());
        set_spec_schema(&mut crd, spec);
        Ok(crd)
    }

    fn shape_mismatch(&self, path: &[&str], reason: &str) -> CrdError {
        CrdError::ShapeMismatch {
            kind: self.kind().to_string(),
            path: display_path(path),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Render a key path, quoting keys that contain separators:
/// `paths["/accounts"].post.requestBody`
fn display_path(path: &[&str]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if segment.contains(['/', '.']) {
            out.push_str(&format!("[\"{}\"]", segment));
        } else {
            if i > 0 {
                out.push('.');
            }
            out.push_str(segment);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use adviser_schema::SchemaError;
    use serde_json::json;

    fn document_for(kind: ResourceKind, schema: JsonValue) -> JsonValue {
        json!({
            "paths": {
                (kind.route()): {
                    (kind.method().as_str()): {
                        "requestBody": {
                            "content": { "application/json": { "schema": schema } }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "tunnel_name": { "type": "string", "description": "A user-friendly name" },
                    "config_src": {
                        "type": "string",
                        "enum": ["local", "cloudflare"],
                        "x-auditable": true
                    }
                }
            }
        })
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(ResourceKind::CfdTunnel.names().plural, "cfd-tunnels");
        assert_eq!(ResourceKind::AccessGroup.names().plural, "access-groups");
        assert_eq!(ResourceKind::CfdTunnelConfig.method(), Method::Put);
        assert_eq!(ResourceKind::AccessGroup.method(), Method::Post);
        assert_eq!(ResourceKind::CfdTunnel.to_string(), "CFDTunnel");
    }

    #[test]
    fn test_display_path() {
        assert_eq!(
            display_path(&ResourceKind::CfdTunnel.schema_path()),
            "paths[\"/accounts/{account_id}/cfd_tunnel\"].post.requestBody.content[\"application/json\"].schema"
        );
    }

    #[test]
    fn test_spec_schema_seeds_object_type_and_resolves() {
        let kind = ResourceKind::CfdTunnel;
        let doc = document_for(
            kind,
            json!({
                "properties": {
                    "name": { "$ref": "#/components/schemas/tunnel_name" },
                    "config_src": { "$ref": "#/components/schemas/config_src" }
                },
                "required": ["name"]
            }),
        );

        let spec = kind.spec_schema(&doc, ResolveOptions::default()).unwrap();

        assert_eq!(
            spec,
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "config_src": { "type": "string", "enum": ["local", "cloudflare"] }
                },
                "required": ["name"]
            })
        );
    }

    #[test]
    fn test_schema_type_overrides_seed() {
        let kind = ResourceKind::CfdTunnelConfig;
        let doc = document_for(kind, json!({ "type": "array" }));

        let spec = kind.spec_schema(&doc, ResolveOptions::default()).unwrap();
        assert_eq!(spec, json!({ "type": "array" }));
    }

    #[test]
    fn test_missing_path_is_shape_mismatch() {
        let doc = document_for(ResourceKind::CfdTunnel, json!({}));

        let err = ResourceKind::CfdTunnelConfig
            .extract(&doc, ResolveOptions::default())
            .unwrap_err();

        match err {
            CrdError::ShapeMismatch { kind, path, .. } => {
                assert_eq!(kind, "CFDTunnelConfig");
                assert!(path.contains("/accounts/{account_id}/cfd_tunnel/{tunnel_id}/configurations"));
                assert!(path.contains(".put."));
            }
            other => panic!("Expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_reference_names_kind() {
        let kind = ResourceKind::CfdTunnel;
        let doc = document_for(kind, json!({ "$ref": "#/components/schemas/missing" }));

        let err = kind.extract(&doc, ResolveOptions::default()).unwrap_err();

        match err {
            CrdError::Schema { kind, source } => {
                assert_eq!(kind, "CFDTunnel");
                assert_eq!(
                    source,
                    SchemaError::UnresolvedReference {
                        pointer: "#/components/schemas/missing".to_string()
                    }
                );
            }
            other => panic!("Expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_embeds_spec_and_leaves_document_untouched() {
        let kind = ResourceKind::CfdTunnel;
        let doc = document_for(
            kind,
            json!({ "properties": { "name": { "$ref": "#/components/schemas/tunnel_name" } } }),
        );
        let before = doc.clone();

        let crd = kind.extract(&doc, ResolveOptions::default()).unwrap();

        assert_eq!(crd["metadata"]["name"], "cfd-tunnels.cloudflare.adviser.com");
        assert_eq!(
            crd.pointer(crate::envelope::SPEC_SCHEMA_POINTER).unwrap()["properties"]["name"],
            json!({ "type": "string" })
        );
        assert_eq!(doc, before);
    }
}
