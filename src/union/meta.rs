//! Registry-wide options declared under the reserved `meta` entry.

use serde::{Deserialize, Serialize};

/// Reserved schema-map key holding the meta descriptor.
pub const META_KEY: &str = "meta";

/// Registry options.
///
/// Unknown keys in a definition's `meta` object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Prefix prepended to every variant tag (default: empty)
    #[serde(default)]
    pub namespace: String,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meta with the given tag namespace.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Tag for a variant under this namespace.
    pub fn tag_for(&self, variant_name: &str) -> String {
        format!("{}{}", self.namespace, variant_name)
    }
}
