use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fs::RelativePath;

/// `{ $ref: ./relative/path.yml }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefRecord {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl RefRecord {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

impl From<&RelativePath> for RefRecord {
    fn from(path: &RelativePath) -> Self {
        Self::new(path.to_ref())
    }
}

/// One classified file, ready to be merged into an [`IndexObject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    Path {
        directory: String,
        method: String,
        reference: RefRecord,
    },
    Channel {
        key: String,
        reference: RefRecord,
    },
    Component {
        key: String,
        reference: RefRecord,
    },
}

impl IndexEntry {
    /// Top-level key this entry lands on.
    pub fn key(&self) -> &str {
        match self {
            IndexEntry::Path { directory, .. } => directory,
            IndexEntry::Channel { key, .. } | IndexEntry::Component { key, .. } => key,
        }
    }
}

/// Value under a top-level key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexNode {
    Ref(RefRecord),
    /// HTTP method → reference, for a paths-mode directory.
    Methods(BTreeMap<String, RefRecord>),
}

/// The generated index, keys sorted so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexObject {
    nodes: BTreeMap<String, IndexNode>,
}

impl IndexObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one entry. Later writes win:
    /// - `Path` entries for one directory share its method map, per-method
    ///   last write wins.
    /// - Any other collision replaces the node wholesale, so a `Path` entry
    ///   on a flat reference starts a fresh method map and vice versa.
    ///
    /// Returns `true` if an existing value was overwritten.
    pub fn insert(&mut self, entry: IndexEntry) -> bool {
        match entry {
            IndexEntry::Path {
                directory,
                method,
                reference,
            } => {
                let node = self
                    .nodes
                    .entry(directory)
                    .or_insert_with(|| IndexNode::Methods(BTreeMap::new()));
                if let IndexNode::Methods(methods) = &mut *node {
                    return methods.insert(method, reference).is_some();
                }
                *node = IndexNode::Methods(BTreeMap::from([(method, reference)]));
                true
            }
            IndexEntry::Channel { key, reference } | IndexEntry::Component { key, reference } => {
                self.nodes.insert(key, IndexNode::Ref(reference)).is_some()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&IndexNode> {
        self.nodes.get(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexNode)> {
        self.nodes.iter()
    }

    /// Render as a YAML document, two-space indented.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl FromIterator<IndexEntry> for IndexObject {
    fn from_iter<I: IntoIterator<Item = IndexEntry>>(iter: I) -> Self {
        let mut index = IndexObject::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(directory: &str, method: &str, r: &str) -> IndexEntry {
        IndexEntry::Path {
            directory: directory.to_string(),
            method: method.to_string(),
            reference: RefRecord::new(r),
        }
    }

    fn channel(key: &str, r: &str) -> IndexEntry {
        IndexEntry::Channel {
            key: key.to_string(),
            reference: RefRecord::new(r),
        }
    }

    fn component(key: &str, r: &str) -> IndexEntry {
        IndexEntry::Component {
            key: key.to_string(),
            reference: RefRecord::new(r),
        }
    }

    #[test]
    fn test_paths_share_directory() {
        let index: IndexObject = vec![
            path("/users", "get", "./users/get.yml"),
            path("/users", "post", "./users/post.yml"),
        ]
        .into_iter()
        .collect();

        let Some(IndexNode::Methods(methods)) = index.get("/users") else {
            panic!("expected method map");
        };
        assert_eq!(methods.len(), 2);
        assert_eq!(methods["post"], RefRecord::new("./users/post.yml"));
    }

    #[test]
    fn test_same_method_last_write_wins() {
        let mut index = IndexObject::new();
        assert!(!index.insert(path("/users", "get", "./users/get.yml")));
        assert!(index.insert(path("/users", "get", "./users/list.get.yml")));

        let Some(IndexNode::Methods(methods)) = index.get("/users") else {
            panic!("expected method map");
        };
        assert_eq!(methods["get"], RefRecord::new("./users/list.get.yml"));
    }

    // Cross-mode collisions are overwritten silently; these tests pin that
    // behavior down rather than reject it.
    #[test]
    fn test_component_overwrites_channel_with_same_key() {
        let mut index = IndexObject::new();
        index.insert(channel("Users", "./a.yml"));
        assert!(index.insert(component("Users", "./b.yml")));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("Users"), Some(&IndexNode::Ref(RefRecord::new("./b.yml"))));
    }

    #[test]
    fn test_path_replaces_flat_reference() {
        let mut index = IndexObject::new();
        index.insert(channel("/users", "./users.yml"));
        assert!(index.insert(path("/users", "get", "./users/get.yml")));

        let expected = BTreeMap::from([("get".to_string(), RefRecord::new("./users/get.yml"))]);
        assert_eq!(index.get("/users"), Some(&IndexNode::Methods(expected)));
    }

    #[test]
    fn test_yaml_shape() {
        let index: IndexObject = vec![
            path("/users", "get", "./users/get.yml"),
            channel("users.created", "./users/created.yml"),
        ]
        .into_iter()
        .collect();

        let yaml = index.to_yaml().unwrap();
        assert!(yaml.contains("/users:\n  get:\n    $ref: ./users/get.yml\n"));

        let parsed: IndexObject = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, index);
    }

    #[test]
    fn test_empty_index_yaml() {
        let yaml = IndexObject::new().to_yaml().unwrap();
        assert_eq!(yaml.trim(), "{}");
    }
}
