//! Decoding of the raw YAML document into an [`ExportSchema`].
//!
//! The document is either a mapping with a `project_tree` key or a bare
//! sequence. Every sequence element is a relation name or a single-key
//! mapping from a relation name to a nested sequence.
//!
//! Documents are read into [`RawNode`] rather than `serde_yaml::Value` so that
//! mapping entries keep their duplicates: `{ issues: [a], issues: [b] }` is a
//! two-key composite, not a YAML parse failure.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};

use crate::error::SchemaError;
use crate::tree::{ExportSchema, TreeNode};

/// Top-level key holding the tree in a schema document.
pub const ROOT_KEY: &str = "project_tree";

/// A YAML node as written, mapping entries in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum RawNode {
    Null,
    Bool(bool),
    Number(String),
    String(String),
    Sequence(Vec<RawNode>),
    Mapping(Vec<(RawNode, RawNode)>),
    Tagged,
}

impl RawNode {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "a boolean",
            Self::Number(_) => "a number",
            Self::String(_) => "a string",
            Self::Sequence(_) => "a sequence",
            Self::Mapping(_) => "a mapping",
            Self::Tagged => "a tagged value",
        }
    }

    fn label(&self) -> String {
        match self {
            Self::String(name) => name.clone(),
            other => format!("<{}>", other.kind()),
        }
    }
}

impl<'de> Deserialize<'de> for RawNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawNodeVisitor)
    }
}

struct RawNodeVisitor;

impl<'de> Visitor<'de> for RawNodeVisitor {
    type Value = RawNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YAML node")
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawNode, E> {
        Ok(RawNode::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawNode, E> {
        Ok(RawNode::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawNode, D::Error> {
        RawNode::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<RawNode, E> {
        Ok(RawNode::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawNode, E> {
        Ok(RawNode::Number(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawNode, E> {
        Ok(RawNode::Number(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawNode, E> {
        Ok(RawNode::Number(value.to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RawNode, E> {
        Ok(RawNode::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RawNode, E> {
        Ok(RawNode::String(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawNode, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(RawNode::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawNode, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(RawNode::Mapping(entries))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<RawNode, A::Error> {
        let (_tag, variant): (String, _) = data.variant()?;
        variant.newtype_variant::<RawNode>()?;
        Ok(RawNode::Tagged)
    }
}

/// Parse and validate a YAML schema document.
pub fn from_yaml_str(source: &str) -> Result<ExportSchema, SchemaError> {
    let document: RawNode = serde_yaml::from_str(source)?;
    from_raw(&document)
}

/// Validate an already-parsed document.
pub fn from_raw(document: &RawNode) -> Result<ExportSchema, SchemaError> {
    let tree = match document {
        RawNode::Mapping(entries) => root_tree(entries)?,
        RawNode::Sequence(_) => document,
        other => {
            return Err(SchemaError::InvalidShape {
                path: String::new(),
                reason: format!(
                    "expected a sequence or a '{ROOT_KEY}' mapping, found {}",
                    other.kind()
                ),
            });
        }
    };
    decode_sequence(tree, ROOT_KEY)
}

fn root_tree(entries: &[(RawNode, RawNode)]) -> Result<&RawNode, SchemaError> {
    let mut trees = entries
        .iter()
        .filter(|(key, _)| matches!(key, RawNode::String(name) if name == ROOT_KEY))
        .map(|(_, tree)| tree);

    match (trees.next(), trees.next()) {
        (Some(tree), None) => Ok(tree),
        (None, _) => Err(SchemaError::InvalidShape {
            path: String::new(),
            reason: format!("document has no '{ROOT_KEY}' key"),
        }),
        (Some(_), Some(_)) => Err(SchemaError::InvalidShape {
            path: String::new(),
            reason: format!("'{ROOT_KEY}' appears more than once"),
        }),
    }
}

fn decode_sequence(value: &RawNode, path: &str) -> Result<ExportSchema, SchemaError> {
    let RawNode::Sequence(items) = value else {
        return Err(SchemaError::InvalidShape {
            path: path.to_string(),
            reason: format!("expected a sequence of relations, found {}", value.kind()),
        });
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut nodes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let node = decode_node(item, path, index)?;
        if !seen.insert(node.name().to_string()) {
            return Err(SchemaError::DuplicateEntity {
                path: path.to_string(),
                name: node.name().to_string(),
            });
        }
        nodes.push(node);
    }
    Ok(ExportSchema::new(nodes))
}

fn decode_node(value: &RawNode, parent: &str, index: usize) -> Result<TreeNode, SchemaError> {
    let path = format!("{parent}[{index}]");
    match value {
        RawNode::String(name) => Ok(TreeNode::leaf(entity_name(name, &path)?)),
        RawNode::Mapping(entries) => decode_composite(entries, parent, &path),
        other => Err(SchemaError::InvalidShape {
            path,
            reason: format!(
                "expected a relation name or a single-key mapping, found {}",
                other.kind()
            ),
        }),
    }
}

fn decode_composite(
    entries: &[(RawNode, RawNode)],
    parent: &str,
    path: &str,
) -> Result<TreeNode, SchemaError> {
    let [(key, children)] = entries else {
        return Err(SchemaError::MalformedTree {
            path: path.to_string(),
            keys: entries.iter().map(|(key, _)| key.label()).collect(),
        });
    };

    let RawNode::String(name) = key else {
        return Err(SchemaError::InvalidShape {
            path: path.to_string(),
            reason: format!("relation name must be a string, found {}", key.kind()),
        });
    };
    let name = entity_name(name, path)?;
    let children = decode_sequence(children, &format!("{parent}/{name}"))?;
    Ok(TreeNode::composite(name, children))
}

fn entity_name(raw: &str, path: &str) -> Result<String, SchemaError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SchemaError::InvalidShape {
            path: path.to_string(),
            reason: "relation name must not be empty".to_string(),
        });
    }
    Ok(name.to_string())
}
