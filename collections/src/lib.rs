//! Typed collections over an ordered [`KvStore`](atomone_store::KvStore).
//!
//! Every collection owns a byte [`Prefix`] in the store. Keys are encoded with
//! [`KeyCodec`] so that byte order matches the natural key order, which is
//! what makes prefix range scans over composite keys ([`Pair`], [`Triple`])
//! possible. Values are encoded with bincode.
//!
//! Collections are registered in a [`SchemaBuilder`] when constructed; the
//! builder refuses overlapping prefixes and duplicate names.

pub mod error;
pub mod item;
pub mod keys;
pub mod map;
pub mod prefix;
pub mod schema;
pub mod sequence;
pub mod value;

pub use error::CollectionError;
pub use item::Item;
pub use keys::{KeyCodec, Pair, Triple};
pub use map::Map;
pub use prefix::Prefix;
pub use schema::{Schema, SchemaBuilder};
pub use sequence::Sequence;

pub use atomone_store::Order;
