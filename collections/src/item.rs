//! Single-value collection.

use std::marker::PhantomData;

use atomone_store::KvStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CollectionError;
use crate::prefix::Prefix;
use crate::schema::SchemaBuilder;
use crate::value;

/// A single value stored directly under its prefix.
#[derive(Debug)]
pub struct Item<V> {
    prefix: Prefix,
    name: &'static str,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for Item<V> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            name: self.name,
            _value: PhantomData,
        }
    }
}

impl<V: Serialize + DeserializeOwned> Item<V> {
    pub fn new(schema: &mut SchemaBuilder, prefix: impl Into<Prefix>, name: &'static str) -> Self {
        let prefix = prefix.into();
        schema.register(&prefix, name);
        Self {
            prefix,
            name,
            _value: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fails with `NotFound` when unset.
    pub fn get<S: KvStore + ?Sized>(&self, store: &S) -> Result<V, CollectionError> {
        self.may_get(store)?.ok_or(CollectionError::NotFound {
            collection: self.name,
        })
    }

    pub fn may_get<S: KvStore + ?Sized>(&self, store: &S) -> Result<Option<V>, CollectionError> {
        match store.get(self.prefix.as_bytes())? {
            Some(bytes) => Ok(Some(value::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn set<S: KvStore + ?Sized>(
        &self,
        store: &mut S,
        value: &V,
    ) -> Result<(), CollectionError> {
        store.set(self.prefix.as_bytes(), &value::encode(value)?)?;
        Ok(())
    }

    pub fn has<S: KvStore + ?Sized>(&self, store: &S) -> Result<bool, CollectionError> {
        Ok(store.has(self.prefix.as_bytes())?)
    }

    pub fn remove<S: KvStore + ?Sized>(&self, store: &mut S) -> Result<(), CollectionError> {
        store.delete(self.prefix.as_bytes())?;
        Ok(())
    }
}
