//! Value encoding for stored records.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CollectionError;

pub fn encode<V: Serialize>(value: &V) -> Result<Vec<u8>, CollectionError> {
    Ok(bincode::serialize(value)?)
}

pub fn decode<V: DeserializeOwned>(bytes: &[u8]) -> Result<V, CollectionError> {
    Ok(bincode::deserialize(bytes)?)
}
