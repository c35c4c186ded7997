#![deny(unsafe_code)]

pub mod equipment;
pub mod error;
pub mod ids;
pub mod node;

pub use equipment::{EquipmentPatch, EquipmentRecord, NewEquipment};
pub use error::{EquipmentError, TreeError};
pub use ids::{MAX_PARENT_ID_LEN, child_id, equipment_id, is_at_max_depth};
pub use node::{Attributes, NewNode, NodePatch, TreeNode};
