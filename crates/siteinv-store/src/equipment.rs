//! Per-node equipment lists, keyed by node id.
//!
//! The mapping shares the identifier namespace with the tree store but is
//! otherwise independent of it: deleting a tree node leaves its equipment in
//! place under the now-unreachable key.

use std::collections::{BTreeMap, HashMap};

use siteinv_model::{EquipmentError, EquipmentPatch, EquipmentRecord, NewEquipment, equipment_id};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct EquipmentStore {
    records: HashMap<String, Vec<EquipmentRecord>>,
}

impl EquipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equipment recorded under `node_id`, in insertion order; empty when no
    /// list exists for the key.
    pub fn get(&self, node_id: &str) -> &[EquipmentRecord] {
        self.records.get(node_id).map_or(&[], Vec::as_slice)
    }

    /// Snapshot of the whole mapping in key order; detached from the store.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<EquipmentRecord>> {
        self.records
            .iter()
            .map(|(node_id, list)| (node_id.clone(), list.clone()))
            .collect()
    }

    /// Append a record under `node_id` and return its assigned id.
    ///
    /// The list is created lazily on first add. Ids are
    /// `{node_id}-equip-{position}` with the 1-based position taken from the
    /// current list length; a collision after deletions is rejected rather
    /// than duplicated.
    pub fn add(&mut self, node_id: &str, payload: NewEquipment) -> Result<String, EquipmentError> {
        let list = self.records.entry(node_id.to_string()).or_default();
        let id = equipment_id(node_id, list.len() + 1);
        if list.iter().any(|record| record.id == id) {
            warn!(%id, "add rejected: generated equipment id collides");
            return Err(EquipmentError::DuplicateId { id });
        }
        list.push(EquipmentRecord {
            id: id.clone(),
            name: payload.name,
            kind: payload.kind,
            installation_date: payload.installation_date,
        });
        debug!(%id, node_id, "added equipment");
        Ok(id)
    }

    /// Apply a partial patch to one record; provided fields overwrite.
    pub fn update(
        &mut self,
        node_id: &str,
        equipment_id: &str,
        patch: EquipmentPatch,
    ) -> Result<(), EquipmentError> {
        let list = self
            .records
            .get_mut(node_id)
            .ok_or_else(|| EquipmentError::NodeNotFound {
                node_id: node_id.to_string(),
            })?;
        let record = list
            .iter_mut()
            .find(|record| record.id == equipment_id)
            .ok_or_else(|| EquipmentError::EquipmentNotFound {
                node_id: node_id.to_string(),
                equipment_id: equipment_id.to_string(),
            })?;
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(kind) = patch.kind {
            record.kind = kind;
        }
        if let Some(installation_date) = patch.installation_date {
            record.installation_date = installation_date;
        }
        debug!(equipment_id, node_id, "updated equipment");
        Ok(())
    }

    /// Remove one record. The list stays under its key even when emptied, so
    /// positions already handed out are not re-derived from a fresh list.
    pub fn delete(&mut self, node_id: &str, equipment_id: &str) -> Result<(), EquipmentError> {
        let list = self
            .records
            .get_mut(node_id)
            .ok_or_else(|| EquipmentError::NodeNotFound {
                node_id: node_id.to_string(),
            })?;
        let before = list.len();
        list.retain(|record| record.id != equipment_id);
        if list.len() == before {
            return Err(EquipmentError::EquipmentNotFound {
                node_id: node_id.to_string(),
                equipment_id: equipment_id.to_string(),
            });
        }
        debug!(equipment_id, node_id, "deleted equipment");
        Ok(())
    }
}
