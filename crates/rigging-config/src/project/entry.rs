use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::helpers::DEFAULT_ENTRY;

/// One entry point: a single module request or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryPoint {
    Path(String),
    Paths(Vec<String>),
}

/// Entry configuration, either anonymous or keyed by chunk name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Point(EntryPoint),
    Named(IndexMap<String, EntryPoint>),
}

impl Entry {
    pub fn named<K, E>(entries: impl IntoIterator<Item = (K, E)>) -> Self
    where
        K: Into<String>,
        E: Into<EntryPoint>,
    {
        Entry::Named(
            entries
                .into_iter()
                .map(|(name, point)| (name.into(), point.into()))
                .collect(),
        )
    }
}

impl Default for Entry {
    fn default() -> Self {
        Entry::from(DEFAULT_ENTRY)
    }
}

impl From<&str> for EntryPoint {
    fn from(path: &str) -> Self {
        EntryPoint::Path(path.to_string())
    }
}

impl From<String> for EntryPoint {
    fn from(path: String) -> Self {
        EntryPoint::Path(path)
    }
}

impl From<Vec<String>> for EntryPoint {
    fn from(paths: Vec<String>) -> Self {
        EntryPoint::Paths(paths)
    }
}

impl From<EntryPoint> for Entry {
    fn from(point: EntryPoint) -> Self {
        Entry::Point(point)
    }
}

impl From<&str> for Entry {
    fn from(path: &str) -> Self {
        Entry::Point(path.into())
    }
}

impl From<String> for Entry {
    fn from(path: String) -> Self {
        Entry::Point(path.into())
    }
}
