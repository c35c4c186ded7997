//! Identifier grammar shared by the tree and equipment stores.
//!
//! Node ids are lineage-encoded: parent id, a dash, then the 1-based position
//! the child received at creation time. Positions are never renumbered after
//! sibling deletions, so ids stay unique but may become non-contiguous.

/// Parent ids of this length or longer may not receive children.
///
/// The threshold is a string-length check on the id, not a level count. It is
/// part of the durable identifier contract and must not be reinterpreted.
pub const MAX_PARENT_ID_LEN: usize = 9;

/// Id for a child created at the given 1-based position under `parent_id`.
pub fn child_id(parent_id: &str, position: usize) -> String {
    format!("{parent_id}-{position}")
}

/// Id for an equipment record created at the given 1-based position under a node.
pub fn equipment_id(node_id: &str, position: usize) -> String {
    format!("{node_id}-equip-{position}")
}

/// Returns true when a node may not receive further children.
pub fn is_at_max_depth(id: &str) -> bool {
    id.len() >= MAX_PARENT_ID_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_id_format() {
        assert_eq!(equipment_id("1-1", 1), "1-1-equip-1");
        assert_eq!(equipment_id("1-1-2", 12), "1-1-2-equip-12");
    }

    #[test]
    fn depth_guard_is_a_length_check() {
        assert!(!is_at_max_depth("1-1-1-1"));
        assert!(is_at_max_depth("1-1-1-1-1"));
        // Length, not level: a long root id hits the guard at depth one.
        assert!(is_at_max_depth("123456789"));
    }
}
