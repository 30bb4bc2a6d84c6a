//! Configuration document model
//!
//! A `Document` is the canonical in-memory representation of a
//! configuration: an ordered tree of maps, sequences, and scalars. The
//! same type is produced by YAML parsing, stored in the database as JSON,
//! and walked by the template renderer, so no component ever reinterprets
//! raw bytes on its own.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tagged-union configuration tree.
///
/// `untagged` serde keeps the wire shape identical to plain YAML/JSON:
/// scalars stay scalars, maps stay objects. Map entries keep their
/// insertion order via `IndexMap`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Document>),
    Map(IndexMap<String, Document>),
}

impl Document {
    pub fn as_map(&self) -> Option<&IndexMap<String, Document>> {
        match self {
            Document::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Document::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Look up a direct child of a map node.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Look up a value by dotted path, e.g. `database.host`.
    ///
    /// Returns `None` as soon as a segment is missing or the current node
    /// is not a map.
    pub fn get_path(&self, path: &str) -> Option<&Document> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_string())
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Integer(value)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Boolean(value)
    }
}
