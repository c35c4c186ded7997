//! Arena-backed store for the location hierarchy.
//!
//! The forest is held as a flat map from id to node slot plus an ordered root
//! list. Child order lives in per-slot id lists, so delete and move are index
//! updates instead of recursive traversals, while the externally observed id
//! scheme stays exactly the one the identifier grammar defines.

use std::collections::HashMap;

use siteinv_model::{
    Attributes, NewNode, NodePatch, TreeError, TreeNode, child_id, is_at_max_depth,
};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct NodeSlot {
    name: String,
    attributes: Attributes,
    parent: Option<String>,
    children: Vec<String>,
}

/// Owns the forest exclusively; all mutation goes through the methods below.
///
/// Every mutating operation either applies fully or returns an error with the
/// store untouched. Ids are assigned at creation time and never rewritten,
/// including after sibling deletions and after moves.
#[derive(Debug, Default)]
pub struct TreeStore {
    slots: HashMap<String, NodeSlot>,
    roots: Vec<String>,
}

impl TreeStore {
    /// Empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an explicit seed forest.
    ///
    /// Rejects seeds carrying duplicate ids; the id is the arena key and the
    /// durable contract for any later persistence layer.
    pub fn from_forest(forest: Vec<TreeNode>) -> Result<Self, TreeError> {
        let mut store = Self::default();
        for node in forest {
            let id = node.id.clone();
            store.index_node(node, None)?;
            store.roots.push(id);
        }
        Ok(store)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Total node count across the forest.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Materialized deep copy of the node and its subtree, or `None`.
    ///
    /// The returned value is a snapshot; mutating it never affects the store.
    pub fn find_by_id(&self, id: &str) -> Option<TreeNode> {
        self.materialize(id)
    }

    /// Materialized snapshot of the whole forest in root order.
    pub fn forest(&self) -> Vec<TreeNode> {
        self.roots
            .iter()
            .filter_map(|id| self.materialize(id))
            .collect()
    }

    /// Children of the node in insertion order; empty when the node is
    /// absent or childless.
    pub fn children(&self, id: &str) -> Vec<TreeNode> {
        match self.slots.get(id) {
            Some(slot) => slot
                .children
                .iter()
                .filter_map(|child| self.materialize(child))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Add a child under `parent_id` and return its assigned id.
    ///
    /// The id is `parent_id` + `-` + (current child count + 1). Parents whose
    /// id has reached [`siteinv_model::MAX_PARENT_ID_LEN`] characters reject
    /// the add. When a deletion has freed a position the formula can point at
    /// a still-live id; that collision is rejected rather than overwriting
    /// the existing node.
    pub fn add(&mut self, parent_id: &str, payload: NewNode) -> Result<String, TreeError> {
        let child_count = self
            .slots
            .get(parent_id)
            .ok_or_else(|| TreeError::NodeNotFound {
                id: parent_id.to_string(),
            })?
            .children
            .len();
        if is_at_max_depth(parent_id) {
            warn!(parent_id, "add rejected: maximum depth reached");
            return Err(TreeError::DepthExceeded {
                parent_id: parent_id.to_string(),
            });
        }
        let id = child_id(parent_id, child_count + 1);
        if self.slots.contains_key(&id) {
            warn!(%id, "add rejected: generated id collides with a live node");
            return Err(TreeError::DuplicateId { id });
        }
        if let Some(parent) = self.slots.get_mut(parent_id) {
            parent.children.push(id.clone());
        }
        self.slots.insert(
            id.clone(),
            NodeSlot {
                name: payload.name,
                attributes: payload.attributes,
                parent: Some(parent_id.to_string()),
                children: Vec::new(),
            },
        );
        debug!(%id, parent_id, "added node");
        Ok(id)
    }

    /// Apply a partial patch: `name` overwrites, `attributes` merge shallowly
    /// (patch keys override, existing keys are retained).
    pub fn update(&mut self, id: &str, patch: NodePatch) -> Result<(), TreeError> {
        let slot = self
            .slots
            .get_mut(id)
            .ok_or_else(|| TreeError::NodeNotFound { id: id.to_string() })?;
        if let Some(name) = patch.name {
            slot.name = name;
        }
        if let Some(attributes) = patch.attributes {
            slot.attributes.extend(attributes);
        }
        debug!(id, "updated node");
        Ok(())
    }

    /// Remove the node and its entire subtree.
    ///
    /// Descendant ids become unresolvable. Sibling positions are not
    /// renumbered, so later adds under the same parent may be rejected when
    /// the position formula collides with a surviving sibling.
    pub fn delete(&mut self, id: &str) -> Result<(), TreeError> {
        let parent = self
            .slots
            .get(id)
            .ok_or_else(|| TreeError::NodeNotFound { id: id.to_string() })?
            .parent
            .clone();
        self.detach(id, parent.as_deref());
        let removed = self.remove_subtree(id);
        debug!(id, removed, "deleted subtree");
        Ok(())
    }

    /// Re-parent `dragged_id` as the last child of `target_id`.
    ///
    /// The dragged subtree keeps every original id: lineage encoding reflects
    /// creation time, not the current parent. Moving a node into itself or
    /// into its own subtree is rejected, since detaching the dragged node
    /// would take the target with it.
    pub fn move_node(&mut self, dragged_id: &str, target_id: &str) -> Result<(), TreeError> {
        if !self.slots.contains_key(dragged_id) {
            return Err(TreeError::NodeNotFound {
                id: dragged_id.to_string(),
            });
        }
        if !self.slots.contains_key(target_id) {
            return Err(TreeError::NodeNotFound {
                id: target_id.to_string(),
            });
        }
        if self.is_within_subtree(target_id, dragged_id) {
            warn!(dragged_id, target_id, "move rejected: target inside dragged subtree");
            return Err(TreeError::MoveIntoSubtree {
                id: dragged_id.to_string(),
            });
        }
        let parent = self
            .slots
            .get(dragged_id)
            .and_then(|slot| slot.parent.clone());
        self.detach(dragged_id, parent.as_deref());
        if let Some(slot) = self.slots.get_mut(dragged_id) {
            slot.parent = Some(target_id.to_string());
        }
        if let Some(target) = self.slots.get_mut(target_id) {
            target.children.push(dragged_id.to_string());
        }
        debug!(dragged_id, target_id, "moved node");
        Ok(())
    }

    fn index_node(&mut self, node: TreeNode, parent: Option<&str>) -> Result<(), TreeError> {
        if self.slots.contains_key(&node.id) {
            return Err(TreeError::DuplicateId { id: node.id });
        }
        let TreeNode {
            id,
            name,
            attributes,
            children,
        } = node;
        let child_ids: Vec<String> = children.iter().map(|child| child.id.clone()).collect();
        self.slots.insert(
            id.clone(),
            NodeSlot {
                name,
                attributes,
                parent: parent.map(String::from),
                children: child_ids,
            },
        );
        for child in children {
            self.index_node(child, Some(&id))?;
        }
        Ok(())
    }

    fn materialize(&self, id: &str) -> Option<TreeNode> {
        let slot = self.slots.get(id)?;
        Some(TreeNode {
            id: id.to_string(),
            name: slot.name.clone(),
            attributes: slot.attributes.clone(),
            children: slot
                .children
                .iter()
                .filter_map(|child| self.materialize(child))
                .collect(),
        })
    }

    /// Unlink `id` from its containing sequence (parent child list or roots).
    fn detach(&mut self, id: &str, parent: Option<&str>) {
        match parent {
            Some(parent_id) => {
                if let Some(slot) = self.slots.get_mut(parent_id) {
                    slot.children.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }
    }

    fn remove_subtree(&mut self, id: &str) -> usize {
        let mut stack = vec![id.to_string()];
        let mut removed = 0;
        while let Some(current) = stack.pop() {
            if let Some(slot) = self.slots.remove(&current) {
                removed += 1;
                stack.extend(slot.children);
            }
        }
        removed
    }

    /// True when `id` equals `ancestor_id` or lies inside its subtree.
    fn is_within_subtree(&self, id: &str, ancestor_id: &str) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor_id {
                return true;
            }
            current = self
                .slots
                .get(node_id)
                .and_then(|slot| slot.parent.as_deref());
        }
        false
    }
}
