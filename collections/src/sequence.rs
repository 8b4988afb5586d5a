//! Monotonic counter.

use atomone_store::KvStore;

use crate::error::CollectionError;
use crate::item::Item;
use crate::prefix::Prefix;
use crate::schema::SchemaBuilder;

/// A `u64` counter starting at 0.
#[derive(Clone, Debug)]
pub struct Sequence {
    item: Item<u64>,
}

impl Sequence {
    pub fn new(schema: &mut SchemaBuilder, prefix: impl Into<Prefix>, name: &'static str) -> Self {
        Self {
            item: Item::new(schema, prefix, name),
        }
    }

    /// Current value without advancing.
    pub fn peek<S: KvStore + ?Sized>(&self, store: &S) -> Result<u64, CollectionError> {
        Ok(self.item.may_get(store)?.unwrap_or(0))
    }

    /// Return the current value and advance by one.
    pub fn next<S: KvStore + ?Sized>(&self, store: &mut S) -> Result<u64, CollectionError> {
        let current = self.peek(store)?;
        let advanced = current
            .checked_add(1)
            .ok_or_else(|| CollectionError::Value(format!("{} overflowed", self.item.name())))?;
        self.item.set(store, &advanced)?;
        Ok(current)
    }

    pub fn set<S: KvStore + ?Sized>(
        &self,
        store: &mut S,
        value: u64,
    ) -> Result<(), CollectionError> {
        self.item.set(store, &value)
    }
}
