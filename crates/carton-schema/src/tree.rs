//! Export tree types.
//!
//! An [`ExportSchema`] is an ordered list of [`TreeNode`]s. A node is either a
//! leaf relation or a composite relation that carries its own nested schema,
//! exported once per record of the parent relation.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A relation exported without nested children.
    Leaf { name: String },
    /// A relation exported together with `children` for each of its records.
    Composite { name: String, children: ExportSchema },
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf { name: name.into() }
    }

    pub fn composite(name: impl Into<String>, children: impl Into<ExportSchema>) -> Self {
        Self::Composite {
            name: name.into(),
            children: children.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf { name } | Self::Composite { name, .. } => name,
        }
    }

    /// Nested schema of a composite node, `None` for a leaf.
    #[must_use]
    pub const fn children(&self) -> Option<&ExportSchema> {
        match self {
            Self::Leaf { .. } => None,
            Self::Composite { children, .. } => Some(children),
        }
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// Serializes back to the source shape: a bare string for a leaf, a
/// single-key map for a composite.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf { name } => serializer.serialize_str(name),
            Self::Composite { name, children } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, children)?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSchema {
    nodes: Vec<TreeNode>,
}

impl ExportSchema {
    /// Wrap already-validated nodes.
    ///
    /// Construction through [`crate::decode`] additionally rejects duplicate
    /// names; this constructor trusts the caller.
    #[must_use]
    pub const fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level node named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|node| node.name() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Nested schema of the top-level relation `name`.
    ///
    /// `None` if the relation does not exist or is a leaf.
    #[must_use]
    pub fn children_of(&self, name: &str) -> Option<&Self> {
        self.get(name).and_then(TreeNode::children)
    }

    /// Every node in the tree, depth-first, parents before children.
    #[must_use]
    pub fn walk(&self) -> Vec<SchemaEntry<'_>> {
        let mut entries = Vec::new();
        walk_into(self, &mut Vec::new(), &mut entries);
        entries
    }

    /// Compare the top-level relations found in an archive against this tree.
    pub fn check_entries<I, S>(&self, present: I) -> ArchiveShapeReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let present: Vec<String> = present
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        let missing = self
            .nodes
            .iter()
            .map(TreeNode::name)
            .filter(|name| !present.iter().any(|p| p.as_str() == *name))
            .map(str::to_string)
            .collect();

        let mut unexpected: Vec<String> = Vec::new();
        for name in present {
            if !self.contains(&name) && !unexpected.contains(&name) {
                unexpected.push(name);
            }
        }

        ArchiveShapeReport {
            missing,
            unexpected,
        }
    }
}

fn walk_into<'a>(
    schema: &'a ExportSchema,
    parents: &mut Vec<&'a str>,
    entries: &mut Vec<SchemaEntry<'a>>,
) {
    for node in schema.iter() {
        entries.push(SchemaEntry {
            parents: parents.clone(),
            node,
        });
        if let Some(children) = node.children() {
            parents.push(node.name());
            walk_into(children, parents, entries);
            parents.pop();
        }
    }
}

impl From<Vec<TreeNode>> for ExportSchema {
    fn from(nodes: Vec<TreeNode>) -> Self {
        Self::new(nodes)
    }
}

impl<'a> IntoIterator for &'a ExportSchema {
    type Item = &'a TreeNode;
    type IntoIter = std::slice::Iter<'a, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Serialize for ExportSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

/// A node reached by [`ExportSchema::walk`], with the names of its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry<'a> {
    pub parents: Vec<&'a str>,
    pub node: &'a TreeNode,
}

impl SchemaEntry<'_> {
    /// Nesting depth; top-level relations are at depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Ancestor names and the node's own name joined with `/`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = self.parents.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(self.node.name());
        path
    }
}

/// Result of [`ExportSchema::check_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ArchiveShapeReport {
    /// Relations the tree expects that the archive lacks, in tree order.
    pub missing: Vec<String>,
    /// Relations in the archive the tree does not know, in archive order.
    pub unexpected: Vec<String>,
}

impl ArchiveShapeReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}
