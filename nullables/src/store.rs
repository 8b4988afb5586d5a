//! Nullable store: ordered in-memory key-value store for testing.

use std::collections::BTreeMap;

use atomone_store::{KvPair, KvStore, Order, StoreError};

/// An in-memory [`KvStore`] backed by a `BTreeMap`, so range scans come out
/// in the same lexicographic order a real backend produces.
#[derive(Clone, Debug, Default)]
pub struct NullStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every entry, for before/after comparisons in tests.
    pub fn dump(&self) -> Vec<KvPair> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl KvStore for NullStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn range(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Result<Vec<KvPair>, StoreError> {
        let mut pairs: Vec<KvPair> = self
            .entries
            .iter()
            .filter(|(k, _)| {
                start.map_or(true, |s| k.as_slice() >= s) && end.map_or(true, |e| k.as_slice() < e)
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if order == Order::Descending {
            pairs.reverse();
        }
        Ok(pairs)
    }
}
