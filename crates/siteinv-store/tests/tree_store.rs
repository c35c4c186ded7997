//! Tests for the tree store operations and invariants.

use serde_json::json;
use siteinv_model::{Attributes, NewNode, NodePatch, TreeError, TreeNode};
use siteinv_store::{TreeStore, seed};

fn single_root() -> TreeStore {
    TreeStore::from_forest(vec![TreeNode::new("1", "City")]).expect("seed single root")
}

fn seeded() -> TreeStore {
    TreeStore::from_forest(seed::default_forest()).expect("seed default forest")
}

#[test]
fn add_assigns_sequential_positions() {
    let mut store = single_root();
    let first = store.add("1", NewNode::named("A")).expect("add A");
    let second = store.add("1", NewNode::named("B")).expect("add B");
    assert_eq!(first, "1-1");
    assert_eq!(second, "1-2");

    let nested = store.add("1-1", NewNode::named("C")).expect("add C");
    assert_eq!(nested, "1-1-1");
}

#[test]
fn add_to_missing_parent_reports_not_found() {
    let mut store = single_root();
    let err = store.add("2", NewNode::named("orphan")).unwrap_err();
    assert_eq!(err, TreeError::NodeNotFound { id: "2".to_string() });
    assert_eq!(store.len(), 1);
}

#[test]
fn depth_guard_rejects_without_mutation() {
    let mut store = single_root();
    store.add("1", NewNode::named("d")).expect("level 2");
    store.add("1-1", NewNode::named("s")).expect("level 3");
    store.add("1-1-1", NewNode::named("b")).expect("level 4");
    // "1-1-1-1" is 7 chars, still below the limit.
    store.add("1-1-1-1", NewNode::named("e")).expect("level 5");

    // "1-1-1-1-1" is 9 chars: at maximum depth.
    let before = store.len();
    let err = store.add("1-1-1-1-1", NewNode::named("too deep")).unwrap_err();
    assert_eq!(
        err,
        TreeError::DepthExceeded {
            parent_id: "1-1-1-1-1".to_string()
        }
    );
    assert_eq!(store.len(), before);
    assert!(store.children("1-1-1-1-1").is_empty());
}

#[test]
fn delete_removes_whole_subtree() {
    let mut store = seeded();
    store.delete("1-1-1-1").expect("delete building");

    assert!(store.find_by_id("1-1-1-1").is_none());
    assert!(store.find_by_id("1-1-1-1-1").is_none());
    assert!(store.find_by_id("1-1-1-1-2").is_none());

    let remaining: Vec<String> = store
        .children("1-1-1")
        .into_iter()
        .map(|child| child.id)
        .collect();
    assert_eq!(remaining, vec!["1-1-1-2".to_string()]);
}

#[test]
fn delete_missing_reports_not_found() {
    let mut store = seeded();
    let before = store.len();
    let err = store.delete("9-9").unwrap_err();
    assert_eq!(err, TreeError::NodeNotFound { id: "9-9".to_string() });
    assert_eq!(store.len(), before);
}

#[test]
fn update_merges_attributes_instead_of_replacing() {
    let mut store = single_root();
    let mut initial = Attributes::new();
    initial.insert("a".to_string(), json!(0));
    initial.insert("b".to_string(), json!(2));
    store
        .add("1", NewNode::named("node").with_attributes(initial))
        .expect("add");

    let mut patch = Attributes::new();
    patch.insert("a".to_string(), json!(1));
    store
        .update("1-1", NodePatch::attributes(patch))
        .expect("update");

    let node = store.find_by_id("1-1").expect("node present");
    assert_eq!(node.attributes.get("a"), Some(&json!(1)));
    assert_eq!(node.attributes.get("b"), Some(&json!(2)));
    assert_eq!(node.name, "node");

    store
        .update("1-1", NodePatch::rename("renamed"))
        .expect("rename");
    let node = store.find_by_id("1-1").expect("node present");
    assert_eq!(node.name, "renamed");
    assert_eq!(node.attributes.get("b"), Some(&json!(2)));
}

#[test]
fn update_missing_reports_not_found() {
    let mut store = single_root();
    let err = store
        .update("1-9", NodePatch::rename("ghost"))
        .unwrap_err();
    assert_eq!(err, TreeError::NodeNotFound { id: "1-9".to_string() });
}

#[test]
fn move_preserves_node_ids_but_not_lineage() {
    let mut store = seeded();
    store.move_node("1-1-2", "1-2").expect("move street");

    // The moved node keeps its creation-time id under the new parent.
    let children: Vec<String> = store
        .children("1-2")
        .into_iter()
        .map(|child| child.id)
        .collect();
    assert_eq!(children, vec!["1-1-2".to_string()]);

    let old_siblings: Vec<String> = store
        .children("1-1")
        .into_iter()
        .map(|child| child.id)
        .collect();
    assert_eq!(old_siblings, vec!["1-1-1".to_string()]);

    // Still resolvable under the stale id, with its subtree intact.
    let moved = store.find_by_id("1-1-2").expect("moved node");
    assert_eq!(moved.name, "Street B");
}

#[test]
fn moved_subtree_keeps_descendant_ids() {
    let mut store = seeded();
    store.move_node("1-1-1-1", "1-2").expect("move building");

    let moved = store.find_by_id("1-1-1-1").expect("moved building");
    let entrance_ids: Vec<&str> = moved.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(entrance_ids, vec!["1-1-1-1-1", "1-1-1-1-2"]);
}

#[test]
fn move_into_self_is_rejected() {
    let mut store = seeded();
    let before = store.forest();
    let err = store.move_node("1-2", "1-2").unwrap_err();
    assert_eq!(err, TreeError::MoveIntoSubtree { id: "1-2".to_string() });
    assert_eq!(store.forest(), before);
}

#[test]
fn move_into_own_descendant_is_rejected() {
    let mut store = seeded();
    let before = store.forest();
    let err = store.move_node("1-1", "1-1-1-2").unwrap_err();
    assert_eq!(err, TreeError::MoveIntoSubtree { id: "1-1".to_string() });
    assert_eq!(store.forest(), before);
}

#[test]
fn move_with_missing_endpoint_reports_not_found() {
    let mut store = seeded();
    assert_eq!(
        store.move_node("9-9", "1-2").unwrap_err(),
        TreeError::NodeNotFound { id: "9-9".to_string() }
    );
    assert_eq!(
        store.move_node("1-2", "9-9").unwrap_err(),
        TreeError::NodeNotFound { id: "9-9".to_string() }
    );
}

#[test]
fn move_into_current_parent_does_not_duplicate() {
    let mut store = single_root();
    store.add("1", NewNode::named("A")).expect("add A");
    store.add("1", NewNode::named("B")).expect("add B");

    // Re-appending "1-1" under its current parent reorders, nothing more.
    store.move_node("1-1", "1").expect("move to own parent");
    let children: Vec<String> = store
        .children("1")
        .into_iter()
        .map(|child| child.id)
        .collect();
    assert_eq!(children, vec!["1-2".to_string(), "1-1".to_string()]);
    assert_eq!(store.len(), 3);
}

#[test]
fn position_formula_collision_after_delete_is_rejected() {
    let mut store = single_root();
    store.add("1", NewNode::named("A")).expect("add A");
    store.add("1", NewNode::named("B")).expect("add B");
    store.delete("1-1").expect("delete A");

    // One child left, so the formula regenerates the live id "1-2".
    let err = store.add("1", NewNode::named("C")).unwrap_err();
    assert_eq!(err, TreeError::DuplicateId { id: "1-2".to_string() });
    assert_eq!(store.len(), 2);
}

#[test]
fn end_to_end_scenario() {
    let mut store = single_root();

    let a = store.add("1", NewNode::named("A")).expect("add A");
    assert_eq!(a, "1-1");
    assert_eq!(store.find_by_id("1-1").expect("A present").name, "A");

    let b = store.add("1", NewNode::named("B")).expect("add B");
    assert_eq!(b, "1-2");

    store.delete("1-1").expect("delete A");
    let children: Vec<String> = store
        .children("1")
        .into_iter()
        .map(|child| child.id)
        .collect();
    assert_eq!(children, vec!["1-2".to_string()]);

    // Moving the remaining child back under the root neither duplicates nor
    // corrupts the tree.
    store.move_node("1-2", "1").expect("self-parent move");
    let children: Vec<String> = store
        .children("1")
        .into_iter()
        .map(|child| child.id)
        .collect();
    assert_eq!(children, vec!["1-2".to_string()]);
}

#[test]
fn snapshots_are_detached_from_the_store() {
    let store = seeded();
    let mut snapshot = store.find_by_id("1-1").expect("district");
    snapshot.name = "tampered".to_string();
    snapshot.children.clear();

    let fresh = store.find_by_id("1-1").expect("district again");
    assert_eq!(fresh.name, "District 1");
    assert_eq!(fresh.children.len(), 2);
}

#[test]
fn children_of_missing_node_is_empty() {
    let store = seeded();
    assert!(store.children("9-9").is_empty());
}

#[test]
fn seed_forest_shape() {
    let store = seeded();
    assert_eq!(store.len(), 11);

    let forest = store.forest();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].id, "1");
    assert_eq!(forest[0].attributes.get("population"), Some(&json!(10000)));

    let entrance = store.find_by_id("1-1-1-2-2").expect("deepest entrance");
    assert_eq!(entrance.name, "Entrance 2");
    assert_eq!(entrance.attributes.get("capacity"), Some(&json!(38)));
}

#[test]
fn from_forest_rejects_duplicate_ids() {
    let err = TreeStore::from_forest(vec![
        TreeNode::new("1", "City"),
        TreeNode::new("1", "Clone"),
    ])
    .unwrap_err();
    assert_eq!(err, TreeError::DuplicateId { id: "1".to_string() });
}
