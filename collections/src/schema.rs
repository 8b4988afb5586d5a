//! Collection registration.
//!
//! Every collection registers its prefix and name when it is constructed.
//! [`SchemaBuilder::build`] rejects duplicate names and prefixes where one is
//! a prefix of the other, since those collections would read each other's keys.

use crate::error::CollectionError;
use crate::prefix::Prefix;

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    entries: Vec<(Prefix, &'static str)>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, prefix: &Prefix, name: &'static str) {
        self.entries.push((prefix.clone(), name));
    }

    pub fn build(self) -> Result<Schema, CollectionError> {
        for (i, (prefix, name)) in self.entries.iter().enumerate() {
            for (other_prefix, other_name) in &self.entries[i + 1..] {
                if name == other_name {
                    return Err(CollectionError::Schema(format!(
                        "duplicate collection name {name}"
                    )));
                }
                if prefix.overlaps(other_prefix) {
                    return Err(CollectionError::Schema(format!(
                        "prefix of {name} ({}) collides with prefix of {other_name} ({})",
                        hex::encode(prefix.as_bytes()),
                        hex::encode(other_prefix.as_bytes())
                    )));
                }
            }
        }
        Ok(Schema {
            entries: self.entries,
        })
    }
}

/// A validated set of collections.
#[derive(Debug)]
pub struct Schema {
    entries: Vec<(Prefix, &'static str)>,
}

impl Schema {
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, name)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, Map, Sequence};

    #[test]
    fn test_distinct_prefixes_build() {
        let mut sb = SchemaBuilder::new();
        let _item: Item<u64> = Item::new(&mut sb, 0u8, "params");
        let _map: Map<u64, String> = Map::new(&mut sb, 1u8, "accounts");
        let _seq = Sequence::new(&mut sb, 2u8, "number");
        let schema = sb.build().unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["params", "accounts", "number"]);
    }

    #[test]
    fn test_overlapping_prefix_rejected() {
        let mut sb = SchemaBuilder::new();
        let _a: Map<u64, u64> = Map::new(&mut sb, "ab", "a");
        let _b: Map<u64, u64> = Map::new(&mut sb, "abc", "b");
        assert!(matches!(sb.build(), Err(CollectionError::Schema(_))));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut sb = SchemaBuilder::new();
        let _a = Sequence::new(&mut sb, 1u8, "seq");
        let _b = Sequence::new(&mut sb, 2u8, "seq");
        assert!(matches!(sb.build(), Err(CollectionError::Schema(_))));
    }
}
