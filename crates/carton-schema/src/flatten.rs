//! Tree Flattener.

use crate::tree::{ExportSchema, TreeNode};

/// Names of the relations at the top level of `schema`, in schema order.
///
/// A composite node contributes only its own name. Its nested schema is
/// exported per record by whoever serializes that relation, so it does not
/// show up here.
#[must_use]
pub fn flatten(schema: &ExportSchema) -> Vec<String> {
    schema.iter().map(|node| node.name().to_string()).collect()
}

/// Every relation name in the tree, parents before children, with duplicates
/// across levels removed (first occurrence wins).
#[must_use]
pub fn all_relations(schema: &ExportSchema) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for entry in schema.walk() {
        let name = entry.node.name();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Composite top-level relations paired with their nested schemas.
pub fn composites(schema: &ExportSchema) -> impl Iterator<Item = (&str, &ExportSchema)> {
    schema.iter().filter_map(|node| match node {
        TreeNode::Composite { name, children } => Some((name.as_str(), children)),
        TreeNode::Leaf { .. } => None,
    })
}
