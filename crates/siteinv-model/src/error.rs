#![deny(unsafe_code)]

/// Failures reported by tree store operations.
///
/// Every variant means the store was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("cannot add a child under {parent_id}: maximum depth reached")]
    DepthExceeded { parent_id: String },

    #[error("generated id already exists: {id}")]
    DuplicateId { id: String },

    #[error("cannot move {id} into itself or its own subtree")]
    MoveIntoSubtree { id: String },
}

/// Failures reported by equipment store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquipmentError {
    #[error("no equipment recorded under node {node_id}")]
    NodeNotFound { node_id: String },

    #[error("equipment {equipment_id} not found under node {node_id}")]
    EquipmentNotFound {
        node_id: String,
        equipment_id: String,
    },

    #[error("generated equipment id already exists: {id}")]
    DuplicateId { id: String },
}
