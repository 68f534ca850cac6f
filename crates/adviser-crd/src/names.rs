//! Resource name sets for the generated CRDs

use serde::{Deserialize, Serialize};

/// Names under which a custom resource is registered
///
/// Serialized as the CRD's `spec.names` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNames {
    /// Categories for grouping in kubectl (e.g., ["all"])
    pub categories: Vec<String>,
    /// Kind (e.g., "CFDTunnel")
    pub kind: String,
    /// List kind (e.g., "CFDTunnelList")
    pub list_kind: String,
    /// Plural name, also the first label of the CRD name
    pub plural: String,
    /// Singular name
    pub singular: String,
}

impl ResourceNames {
    /// Derive the name set used by the Cloudflare kinds: `listKind` is
    /// `{kind}List`, `plural` is `{singular}s` and categories are
    /// `all` + `cloudflare`.
    pub fn cloudflare(kind: &str, singular: &str) -> Self {
        Self {
            categories: vec!["all".to_string(), "cloudflare".to_string()],
            kind: kind.to_string(),
            list_kind: format!("{}List", kind),
            plural: format!("{}s", singular),
            singular: singular.to_string(),
        }
    }
}
