//! Cache overlay: a writable view over a parent store whose writes are staged
//! in memory until they are either committed as a unit or dropped.
//!
//! ```ignore
//! let writes = {
//!     let mut cache = CacheStore::new(&parent);
//!     cache.set(b"k", b"v")?;
//!     cache.into_write_set()
//! };
//! writes.apply(&mut parent)?; // or drop `writes` to discard
//! ```

use std::collections::BTreeMap;

use tracing::trace;

use crate::range::in_range;
use crate::{KvPair, KvStore, Order, StoreError};

/// Staged mutation: `Some(value)` for a put, `None` for a delete.
type Pending = BTreeMap<Vec<u8>, Option<Vec<u8>>>;

/// A discardable branch of a parent store.
///
/// Reads see the branch's own writes first and fall through to the parent.
/// The parent is only borrowed immutably, so nothing reaches it until the
/// [`WriteSet`] returned by [`CacheStore::into_write_set`] is applied.
pub struct CacheStore<'a> {
    parent: &'a dyn KvStore,
    writes: Pending,
}

impl<'a> CacheStore<'a> {
    pub fn new(parent: &'a dyn KvStore) -> Self {
        Self {
            parent,
            writes: BTreeMap::new(),
        }
    }

    /// Whether any write has been staged.
    pub fn is_dirty(&self) -> bool {
        !self.writes.is_empty()
    }

    /// Release the parent borrow and hand back the staged writes.
    pub fn into_write_set(self) -> WriteSet {
        WriteSet { ops: self.writes }
    }
}

impl KvStore for CacheStore<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        match self.writes.get(key) {
            Some(staged) => Ok(staged.clone()),
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.writes.insert(key.to_vec(), None);
        Ok(())
    }

    fn range(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Result<Vec<KvPair>, StoreError> {
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> = self
            .parent
            .range(start, end, Order::Ascending)?
            .into_iter()
            .collect();
        for (key, staged) in self.writes.iter().filter(|(k, _)| in_range(k, start, end)) {
            match staged {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        let mut pairs: Vec<KvPair> = merged.into_iter().collect();
        if order == Order::Descending {
            pairs.reverse();
        }
        Ok(pairs)
    }
}

/// The writes of a [`CacheStore`], detached from its parent borrow.
///
/// Dropping a `WriteSet` discards the writes.
#[derive(Debug, Default)]
pub struct WriteSet {
    ops: Pending,
}

impl WriteSet {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Commit every staged write to `store` in key order.
    pub fn apply<S: KvStore + ?Sized>(self, store: &mut S) -> Result<(), StoreError> {
        trace!(ops = self.ops.len(), "applying cached writes");
        for (key, staged) in self.ops {
            match staged {
                Some(value) => store.set(&key, &value)?,
                None => store.delete(&key)?,
            }
        }
        Ok(())
    }
}
