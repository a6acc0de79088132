//! Core types for the VFS: nodes, ordered child maps, and resolution results.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::time::SystemTime;

/// Enum for distinguishing node types at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Dir,
}

/// A single entry in a drive tree.
///
/// Files carry an optional text payload; `None` reads back as the empty
/// string and is used for placeholders whose `size` has no backing text.
/// Directories own their children and always report a size of zero.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    File {
        name: String,
        size: u64,
        #[serde(with = "serde_millis")]
        modified: SystemTime,
        content: Option<String>,
    },
    Dir {
        name: String,
        #[serde(with = "serde_millis")]
        modified: SystemTime,
        children: NodeMap,
    },
}

impl FsNode {
    /// Create a text file whose size is the byte length of `content`
    pub fn file(name: impl Into<String>, content: impl Into<String>, modified: SystemTime) -> Self {
        let content = content.into();
        FsNode::File {
            name: name.into(),
            size: content.len() as u64,
            modified,
            content: Some(content),
        }
    }

    /// Create a file with a declared size and no text content
    pub fn placeholder(name: impl Into<String>, size: u64, modified: SystemTime) -> Self {
        FsNode::File {
            name: name.into(),
            size,
            modified,
            content: None,
        }
    }

    /// Create a directory holding `children`
    pub fn dir(name: impl Into<String>, children: NodeMap, modified: SystemTime) -> Self {
        FsNode::Dir {
            name: name.into(),
            modified,
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } | FsNode::Dir { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            FsNode::File { .. } => NodeKind::File,
            FsNode::Dir { .. } => NodeKind::Dir,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Dir { .. })
    }

    /// Get file size (0 for directories)
    pub fn size(&self) -> u64 {
        match self {
            FsNode::File { size, .. } => *size,
            FsNode::Dir { .. } => 0,
        }
    }

    pub fn modified(&self) -> SystemTime {
        match self {
            FsNode::File { modified, .. } | FsNode::Dir { modified, .. } => *modified,
        }
    }

    /// Text content of a file; `None` for directories and unset content
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content, .. } => content.as_deref(),
            FsNode::Dir { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&NodeMap> {
        match self {
            FsNode::Dir { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut NodeMap> {
        match self {
            FsNode::Dir { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    pub(crate) fn rename(&mut self, new_name: &str) {
        match self {
            FsNode::File { name, .. } | FsNode::Dir { name, .. } => {
                *name = new_name.to_string();
            }
        }
    }

    pub(crate) fn touch(&mut self, now: SystemTime) {
        match self {
            FsNode::File { modified, .. } | FsNode::Dir { modified, .. } => *modified = now,
        }
    }
}

/// Insertion-ordered set of nodes keyed by their own name.
///
/// Inserting a node whose name is already present replaces the old entry
/// in place, so positions only change on removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<FsNode>", into = "Vec<FsNode>")]
pub struct NodeMap {
    entries: Vec<FsNode>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|node| node.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&FsNode> {
        self.entries.iter().find(|node| node.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FsNode> {
        self.entries.iter_mut().find(|node| node.name() == name)
    }

    /// Insert `node` under its own name, returning the entry it replaced.
    pub fn insert(&mut self, node: FsNode) -> Option<FsNode> {
        match self.position(node.name()) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], node)),
            None => {
                self.entries.push(node);
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FsNode> {
        let index = self.position(name)?;
        Some(self.entries.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FsNode> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(FsNode::name)
    }
}

impl From<Vec<FsNode>> for NodeMap {
    fn from(nodes: Vec<FsNode>) -> Self {
        nodes.into_iter().collect()
    }
}

impl From<NodeMap> for Vec<FsNode> {
    fn from(map: NodeMap) -> Self {
        map.entries
    }
}

impl FromIterator<FsNode> for NodeMap {
    fn from_iter<I: IntoIterator<Item = FsNode>>(iter: I) -> Self {
        let mut map = NodeMap::new();
        for node in iter {
            map.insert(node);
        }
        map
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = &'a FsNode;
    type IntoIter = std::slice::Iter<'a, FsNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Outcome of resolving a path: the node, if any, and the absolute path
/// the lookup was performed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub node: Option<&'a FsNode>,
    pub absolute_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{Duration, UNIX_EPOCH};

    fn at(millis: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(millis)
    }

    #[test]
    fn node_map_replaces_in_place_and_keeps_order() {
        let mut map: NodeMap = vec![
            FsNode::file("a.txt", "a", at(1)),
            FsNode::file("b.txt", "b", at(1)),
            FsNode::file("c.txt", "c", at(1)),
        ]
        .into();

        let old = map.insert(FsNode::file("b.txt", "bee", at(2)));
        assert_eq!(old.and_then(|n| n.content().map(str::to_string)), Some("b".into()));
        assert_eq!(map.names().collect::<Vec<_>>(), ["a.txt", "b.txt", "c.txt"]);
        assert_eq!(map.get("b.txt").and_then(FsNode::content), Some("bee"));

        map.remove("a.txt");
        map.insert(FsNode::file("a.txt", "again", at(3)));
        assert_eq!(map.names().collect::<Vec<_>>(), ["b.txt", "c.txt", "a.txt"]);
    }

    #[test]
    fn node_map_collapses_duplicate_names() {
        let map: NodeMap = vec![
            FsNode::file("x", "first", at(1)),
            FsNode::file("x", "second", at(1)),
        ]
        .into();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x").and_then(FsNode::content), Some("second"));
    }

    #[test]
    fn directories_report_zero_size() {
        let dir = FsNode::dir(
            "docs",
            vec![FsNode::placeholder("big.bin", 4096, at(0))].into(),
            at(0),
        );
        assert_eq!(dir.size(), 0);
        assert_eq!(dir.kind(), NodeKind::Dir);
        assert_eq!(dir.content(), None);
    }

    #[test]
    fn node_serializes_with_type_tag_and_millis() {
        let node = FsNode::dir(
            "Desktop",
            vec![
                FsNode::file("Notes.txt", "hi", at(1_000)),
                FsNode::placeholder("photo.jpg", 12, at(2_000)),
            ]
            .into(),
            at(3_000),
        );

        let value = serde_json::to_value(&node).expect("serialize");
        assert_eq!(value["type"], json!("dir"));
        assert_eq!(value["modified"], json!(3_000));
        assert_eq!(value["children"][0]["type"], json!("file"));
        assert_eq!(value["children"][0]["size"], json!(2));
        assert_eq!(value["children"][0]["content"], json!("hi"));
        assert!(value["children"][1].get("content").is_none());

        let back: FsNode = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, node);
    }
}
