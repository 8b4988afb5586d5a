//! Ordered key-value store abstraction.
//!
//! The host supplies the backing store (a Merkle store on chain, an in-memory
//! map in tests). The rest of the workspace depends only on [`KvStore`], plus
//! the [`CacheStore`] overlay used to stage writes that may be discarded.

pub mod cache;
pub mod error;
pub mod range;

pub use cache::{CacheStore, WriteSet};
pub use error::StoreError;
pub use range::prefix_end;

/// A key/value pair returned by range scans.
pub type KvPair = (Vec<u8>, Vec<u8>);

/// Direction of a range scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

/// Byte-ordered key-value store.
///
/// Ranges are half open: `start` is inclusive, `end` exclusive, and `None`
/// means unbounded on that side. Keys are compared lexicographically.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    fn has(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;

    /// Collect every pair in `[start, end)` in the requested order.
    fn range(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Result<Vec<KvPair>, StoreError>;
}
