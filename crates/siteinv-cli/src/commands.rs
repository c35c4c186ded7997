//! Command implementations: load a forest, run the batch, print JSON.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use siteinv_model::{EquipmentRecord, TreeNode};
use siteinv_store::{EquipmentStore, TreeStore, seed};
use tracing::{info, warn};

use crate::cli::{ApplyArgs, ShowArgs};
use crate::ops::Operation;

/// Final state printed by `apply`.
#[derive(Debug, Serialize)]
pub struct ApplyOutcome {
    pub forest: Vec<TreeNode>,
    pub equipment: BTreeMap<String, Vec<EquipmentRecord>>,
    pub applied: usize,
    pub failed: usize,
}

pub fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let store = load_store(args.input.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&store.forest())?);
    Ok(())
}

pub fn run_apply(args: &ApplyArgs) -> anyhow::Result<ApplyOutcome> {
    let mut tree = load_store(args.input.as_deref())?;
    let mut equipment = EquipmentStore::new();

    let raw = std::fs::read_to_string(&args.ops)
        .with_context(|| format!("failed to read ops file {}", args.ops.display()))?;
    let batch: Vec<Operation> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse ops file {}", args.ops.display()))?;

    let total = batch.len();
    let mut failed = 0usize;
    for (index, operation) in batch.into_iter().enumerate() {
        if let Err(error) = apply_one(&mut tree, &mut equipment, operation) {
            warn!(index, %error, "operation rejected");
            failed += 1;
        }
    }
    info!(total, failed, "batch finished");

    Ok(ApplyOutcome {
        forest: tree.forest(),
        equipment: equipment.snapshot(),
        applied: total - failed,
        failed,
    })
}

fn apply_one(
    tree: &mut TreeStore,
    equipment: &mut EquipmentStore,
    operation: Operation,
) -> anyhow::Result<()> {
    match operation {
        Operation::Add { parent, payload } => {
            tree.add(&parent, payload)?;
        }
        Operation::Update { id, patch } => tree.update(&id, patch)?,
        Operation::Delete { id } => tree.delete(&id)?,
        Operation::Move { dragged, target } => tree.move_node(&dragged, &target)?,
        Operation::AddEquipment { node, payload } => {
            equipment.add(&node, payload)?;
        }
        Operation::UpdateEquipment { node, id, patch } => equipment.update(&node, &id, patch)?,
        Operation::DeleteEquipment { node, id } => equipment.delete(&node, &id)?,
    }
    Ok(())
}

fn load_store(input: Option<&Path>) -> anyhow::Result<TreeStore> {
    let forest = match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read forest file {}", path.display()))?;
            serde_json::from_str::<Vec<TreeNode>>(&raw)
                .with_context(|| format!("failed to parse forest file {}", path.display()))?
        }
        None => seed::default_forest(),
    };
    TreeStore::from_forest(forest).context("forest contains duplicate ids")
}
