//! Keyed collection with ordered iteration.

use std::marker::PhantomData;

use atomone_store::{prefix_end, KvPair, KvStore, Order};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CollectionError;
use crate::keys::{KeyCodec, Pair, Triple};
use crate::prefix::Prefix;
use crate::schema::SchemaBuilder;
use crate::value;

/// Map from `K` to `V`, stored at `prefix ++ encode(K)`.
#[derive(Debug)]
pub struct Map<K, V> {
    prefix: Prefix,
    name: &'static str,
    _types: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            name: self.name,
            _types: PhantomData,
        }
    }
}

impl<K: KeyCodec, V: Serialize + DeserializeOwned> Map<K, V> {
    pub fn new(schema: &mut SchemaBuilder, prefix: impl Into<Prefix>, name: &'static str) -> Self {
        let prefix = prefix.into();
        schema.register(&prefix, name);
        Self {
            prefix,
            name,
            _types: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn store_key(&self, key: &K) -> Result<Vec<u8>, CollectionError> {
        let mut buf = self.prefix.as_bytes().to_vec();
        key.encode(&mut buf)?;
        Ok(buf)
    }

    fn decode_pair(&self, (raw_key, raw_value): KvPair) -> Result<(K, V), CollectionError> {
        let key = K::decode(&raw_key[self.prefix.as_bytes().len()..])?;
        Ok((key, value::decode(&raw_value)?))
    }

    /// Fails with `NotFound` when the key is absent.
    pub fn get<S: KvStore + ?Sized>(&self, store: &S, key: &K) -> Result<V, CollectionError> {
        self.may_get(store, key)?.ok_or(CollectionError::NotFound {
            collection: self.name,
        })
    }

    pub fn may_get<S: KvStore + ?Sized>(
        &self,
        store: &S,
        key: &K,
    ) -> Result<Option<V>, CollectionError> {
        match store.get(&self.store_key(key)?)? {
            Some(bytes) => Ok(Some(value::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn set<S: KvStore + ?Sized>(
        &self,
        store: &mut S,
        key: &K,
        value: &V,
    ) -> Result<(), CollectionError> {
        store.set(&self.store_key(key)?, &value::encode(value)?)?;
        Ok(())
    }

    pub fn has<S: KvStore + ?Sized>(&self, store: &S, key: &K) -> Result<bool, CollectionError> {
        Ok(store.has(&self.store_key(key)?)?)
    }

    pub fn remove<S: KvStore + ?Sized>(
        &self,
        store: &mut S,
        key: &K,
    ) -> Result<(), CollectionError> {
        store.delete(&self.store_key(key)?)?;
        Ok(())
    }

    /// Every entry, in key order.
    pub fn iter<S: KvStore + ?Sized>(
        &self,
        store: &S,
        order: Order,
    ) -> Result<Vec<(K, V)>, CollectionError> {
        let end = prefix_end(self.prefix.as_bytes());
        self.scan(store, self.prefix.as_bytes(), end.as_deref(), order)
    }

    /// Entries with `start <= key < end`; `None` leaves that side open.
    pub fn iter_range<S: KvStore + ?Sized>(
        &self,
        store: &S,
        start: Option<&K>,
        end: Option<&K>,
        order: Order,
    ) -> Result<Vec<(K, V)>, CollectionError> {
        let start = match start {
            Some(k) => self.store_key(k)?,
            None => self.prefix.as_bytes().to_vec(),
        };
        let end = match end {
            Some(k) => Some(self.store_key(k)?),
            None => prefix_end(self.prefix.as_bytes()),
        };
        self.scan(store, &start, end.as_deref(), order)
    }

    /// Visit entries in key order until `f` returns `true`.
    pub fn walk<S, F>(&self, store: &S, order: Order, mut f: F) -> Result<(), CollectionError>
    where
        S: KvStore + ?Sized,
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in self.iter(store, order)? {
            if f(&key, &value) {
                break;
            }
        }
        Ok(())
    }

    /// Decode every entry whose store key starts with `key_prefix`, which
    /// must already include the collection prefix.
    fn scan_prefix<S: KvStore + ?Sized>(
        &self,
        store: &S,
        key_prefix: &[u8],
        order: Order,
    ) -> Result<Vec<(K, V)>, CollectionError> {
        let end = prefix_end(key_prefix);
        self.scan(store, key_prefix, end.as_deref(), order)
    }

    fn scan<S: KvStore + ?Sized>(
        &self,
        store: &S,
        start: &[u8],
        end: Option<&[u8]>,
        order: Order,
    ) -> Result<Vec<(K, V)>, CollectionError> {
        store
            .range(Some(start), end, order)?
            .into_iter()
            .map(|pair| self.decode_pair(pair))
            .collect()
    }
}

impl<K1, K2, V> Map<Pair<K1, K2>, V>
where
    K1: KeyCodec,
    K2: KeyCodec,
    V: Serialize + DeserializeOwned,
{
    /// Entries whose first key part equals `k1`.
    pub fn iter_prefix<S: KvStore + ?Sized>(
        &self,
        store: &S,
        k1: &K1,
        order: Order,
    ) -> Result<Vec<(Pair<K1, K2>, V)>, CollectionError> {
        let mut key_prefix = self.prefix.as_bytes().to_vec();
        k1.encode_non_terminal(&mut key_prefix)?;
        self.scan_prefix(store, &key_prefix, order)
    }
}

impl<K1, K2, K3, V> Map<Triple<K1, K2, K3>, V>
where
    K1: KeyCodec,
    K2: KeyCodec,
    K3: KeyCodec,
    V: Serialize + DeserializeOwned,
{
    /// Entries whose first key part equals `k1`.
    pub fn iter_prefix<S: KvStore + ?Sized>(
        &self,
        store: &S,
        k1: &K1,
        order: Order,
    ) -> Result<Vec<(Triple<K1, K2, K3>, V)>, CollectionError> {
        let mut key_prefix = self.prefix.as_bytes().to_vec();
        k1.encode_non_terminal(&mut key_prefix)?;
        self.scan_prefix(store, &key_prefix, order)
    }

    /// Entries whose first two key parts equal `(k1, k2)`.
    pub fn iter_super_prefix<S: KvStore + ?Sized>(
        &self,
        store: &S,
        k1: &K1,
        k2: &K2,
        order: Order,
    ) -> Result<Vec<(Triple<K1, K2, K3>, V)>, CollectionError> {
        let mut key_prefix = self.prefix.as_bytes().to_vec();
        k1.encode_non_terminal(&mut key_prefix)?;
        k2.encode_non_terminal(&mut key_prefix)?;
        self.scan_prefix(store, &key_prefix, order)
    }
}
