// src/stats.rs
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-group file counts. Keys iterate and serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountTable(BTreeMap<String, u64>);

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more file under `key`, creating the entry on first use.
    pub fn record(&mut self, key: impl Into<String>) {
        *self.0.entry(key.into()).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.get(key).copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<K> for CountTable {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut table = Self::new();
        for key in keys {
            table.record(key);
        }
        table
    }
}
