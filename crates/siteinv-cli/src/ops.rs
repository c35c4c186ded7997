//! Wire shape of the operation batch consumed by `apply`.

use serde::{Deserialize, Serialize};
use siteinv_model::{EquipmentPatch, NewEquipment, NewNode, NodePatch};

/// One mutation against the tree or equipment store.
///
/// Internally tagged on `op`; payload fields sit beside the targets, e.g.
/// `{"op": "add", "parent": "1", "name": "District 3"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    Add {
        parent: String,
        #[serde(flatten)]
        payload: NewNode,
    },
    Update {
        id: String,
        #[serde(flatten)]
        patch: NodePatch,
    },
    Delete {
        id: String,
    },
    Move {
        dragged: String,
        target: String,
    },
    AddEquipment {
        node: String,
        #[serde(flatten)]
        payload: NewEquipment,
    },
    UpdateEquipment {
        node: String,
        id: String,
        #[serde(flatten)]
        patch: EquipmentPatch,
    },
    DeleteEquipment {
        node: String,
        id: String,
    },
}
