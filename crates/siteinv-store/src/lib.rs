#![deny(unsafe_code)]

pub mod equipment;
pub mod menu;
pub mod seed;
pub mod tree;

pub use equipment::EquipmentStore;
pub use menu::MenuState;
pub use tree::TreeStore;
