use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open mapping of attribute keys to JSON-like values.
///
/// Attribute schemas are not validated; keys are free-form and values may be
/// any scalar or structured JSON. Updates merge shallowly rather than replace.
pub type Attributes = BTreeMap<String, Value>;

/// A single entry in the location hierarchy.
///
/// The `id` encodes lineage: a child's id is its parent's id plus a dash and
/// the 1-based position the child received at creation time (see
/// [`crate::ids::child_id`]). Ids are never reassigned, even after sibling
/// deletions or moves, so an id reflects the lineage at creation time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }
}

/// Payload for creating a node; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl NewNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Partial patch applied to an existing node.
///
/// `name` overwrites when present; `attributes` are merged key-by-key into
/// the node's existing attributes (new keys override, others are retained).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl NodePatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            attributes: None,
        }
    }

    pub fn attributes(attributes: Attributes) -> Self {
        Self {
            name: None,
            attributes: Some(attributes),
        }
    }
}
