//! Kubernetes `List` wrapper

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A `v1/List` of arbitrary objects, as accepted by `kubectl apply -f`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeList {
    pub api_version: String,
    pub items: Vec<JsonValue>,
    pub kind: String,
    pub metadata: ListMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub resource_version: String,
}

impl KubeList {
    pub fn new(items: Vec<JsonValue>) -> Self {
        Self {
            api_version: "v1".to_string(),
            items,
            kind: "List".to_string(),
            metadata: ListMeta::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
