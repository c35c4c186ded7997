//! Initial dataset for the inventory, exposed as an explicit factory so
//! callers and tests can start from the seed, a custom forest, or empty.

use serde_json::{Value, json};
use siteinv_model::{Attributes, TreeNode};

fn attr(key: &str, value: Value) -> Attributes {
    Attributes::from([(key.to_string(), value)])
}

/// The default city inventory: one city, two districts, streets, buildings
/// and entrances, with the sample attributes the application ships with.
pub fn default_forest() -> Vec<TreeNode> {
    vec![
        TreeNode::new("1", "City")
            .with_attributes(attr("population", json!(10000)))
            .with_children(vec![
                TreeNode::new("1-1", "District 1")
                    .with_attributes(attr("area", json!(500)))
                    .with_children(vec![
                        TreeNode::new("1-1-1", "Street A")
                            .with_attributes(attr("length", json!("1km")))
                            .with_children(vec![
                                TreeNode::new("1-1-1-1", "Building 1")
                                    .with_attributes(attr("builtYear", json!(1990)))
                                    .with_children(vec![
                                        TreeNode::new("1-1-1-1-1", "Entrance 1")
                                            .with_attributes(attr("capacity", json!(10))),
                                        TreeNode::new("1-1-1-1-2", "Entrance 2")
                                            .with_attributes(attr("capacity", json!(30))),
                                    ]),
                                TreeNode::new("1-1-1-2", "Building 2")
                                    .with_attributes(attr("builtYear", json!(2000)))
                                    .with_children(vec![
                                        TreeNode::new("1-1-1-2-1", "Entrance 1")
                                            .with_attributes(attr("capacity", json!(25))),
                                        TreeNode::new("1-1-1-2-2", "Entrance 2")
                                            .with_attributes(attr("capacity", json!(38))),
                                    ]),
                            ]),
                        TreeNode::new("1-1-2", "Street B")
                            .with_attributes(attr("length", json!("500m"))),
                    ]),
                TreeNode::new("1-2", "District 2")
                    .with_attributes(attr("population", json!(5000))),
            ]),
    ]
}
