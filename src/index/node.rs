//! Nested index tree mirroring a document's heading hierarchy.

use crate::domain::Entry;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered children of a branch node: heading text mapped to child node.
///
/// Iteration order is document order. Inserting an existing key replaces the
/// child but keeps the key's original position, matching how a duplicate
/// sibling heading overwrites its predecessor's subtree in place.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Children(Vec<(String, IndexNode)>);

impl Children {
    /// Creates an empty child list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns true when there are no children.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up a child by exact key.
    pub fn get(&self, key: &str) -> Option<&IndexNode> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutable lookup by exact key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut IndexNode> {
        self.0.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Inserts a child. An existing key keeps its position and has its value
    /// replaced (last write wins).
    pub fn insert(&mut self, key: impl Into<String>, node: IndexNode) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = node,
            None => self.0.push((key, node)),
        }
    }

    /// Returns the child for `key`, inserting an empty branch first when the
    /// key is absent. Existing children keep their position.
    pub fn get_or_insert_branch(&mut self, key: &str) -> &mut IndexNode {
        let pos = match self.0.iter().position(|(k, _)| k == key) {
            Some(pos) => pos,
            None => {
                self.0.push((key.to_string(), IndexNode::branch()));
                self.0.len() - 1
            }
        };
        &mut self.0[pos].1
    }

    /// Iterates children in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexNode)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates child keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, IndexNode)> for Children {
    fn from_iter<I: IntoIterator<Item = (String, IndexNode)>>(iter: I) -> Self {
        let mut children = Children::new();
        for (key, node) in iter {
            children.insert(key, node);
        }
        children
    }
}

/// A node of the index tree: either a branch of nested headings or one
/// materialized entry. Exactly one of the two shapes applies; the root is
/// always a branch.
///
/// The serialized form is the nested-object JSON of the persisted index:
/// branches are plain objects keyed by heading text (key order = document
/// order), leaves are `{title, description, source, keywords, segment?}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexNode {
    /// A leaf entry materialized from a table row.
    Entry(Entry),
    /// Nested headings keyed by heading text.
    Branch(Children),
}

impl IndexNode {
    /// Creates an empty branch node.
    pub fn branch() -> Self {
        IndexNode::Branch(Children::new())
    }

    /// Returns true for branch nodes.
    pub fn is_branch(&self) -> bool {
        matches!(self, IndexNode::Branch(_))
    }

    /// Returns true for entry leaves.
    pub fn is_entry(&self) -> bool {
        matches!(self, IndexNode::Entry(_))
    }

    /// Borrows the entry when this node is a leaf.
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            IndexNode::Entry(entry) => Some(entry),
            IndexNode::Branch(_) => None,
        }
    }

    /// Borrows the children when this node is a branch.
    pub fn as_branch(&self) -> Option<&Children> {
        match self {
            IndexNode::Branch(children) => Some(children),
            IndexNode::Entry(_) => None,
        }
    }

    /// Mutably borrows the children when this node is a branch.
    pub fn as_branch_mut(&mut self) -> Option<&mut Children> {
        match self {
            IndexNode::Branch(children) => Some(children),
            IndexNode::Entry(_) => None,
        }
    }

    /// Counts entry leaves anywhere under this node.
    pub fn entry_count(&self) -> usize {
        match self {
            IndexNode::Entry(_) => 1,
            IndexNode::Branch(children) => {
                children.iter().map(|(_, node)| node.entry_count()).sum()
            }
        }
    }

    /// Shallow-merges another tree into this one: the other tree's top-level
    /// keys are inserted here, overwriting existing keys wholesale. Nothing
    /// below the top level is unified.
    pub fn merge_shallow(&mut self, other: IndexNode) {
        match (self, other) {
            (IndexNode::Branch(mine), IndexNode::Branch(theirs)) => {
                for (key, node) in theirs.0 {
                    mine.insert(key, node);
                }
            }
            // Roots are always branches; anything else degenerates to
            // replacement, which keeps the operation total.
            (slot, other) => *slot = other,
        }
    }
}

impl Serialize for Children {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, node) in &self.0 {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Children {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ChildrenVisitor;

        impl<'de> Visitor<'de> for ChildrenVisitor {
            type Value = Children;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of heading keys to index nodes")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Children, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut children = Children::new();
                while let Some((key, node)) = access.next_entry::<String, IndexNode>()? {
                    children.insert(key, node);
                }
                Ok(children)
            }
        }

        deserializer.deserialize_map(ChildrenVisitor)
    }
}
