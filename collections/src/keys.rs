//! Order-preserving key encodings.
//!
//! A key sits either at the end of the full store key (terminal position) or
//! in front of another key part (non-terminal position). Variable-length
//! keys need a delimiter only in non-terminal position:
//!
//! | key       | terminal    | non-terminal                  |
//! |-----------|-------------|-------------------------------|
//! | `u64`     | 8 bytes BE  | 8 bytes BE                    |
//! | `Vec<u8>` | raw bytes   | 1-byte length + bytes (≤ 255) |
//! | `String`  | raw UTF-8   | UTF-8 + `0x00`                |

use serde::{Deserialize, Serialize};

use crate::error::CollectionError;

/// Encodes a key so that byte order matches key order.
pub trait KeyCodec: Sized {
    /// Terminal encoding: the key is the last part of the store key.
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError>;

    /// Decode a terminal key; must consume all of `bytes`.
    fn decode(bytes: &[u8]) -> Result<Self, CollectionError>;

    /// Non-terminal encoding: another key part follows.
    fn encode_non_terminal(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        self.encode(buf)
    }

    /// Decode a non-terminal key, returning the bytes consumed.
    fn decode_non_terminal(bytes: &[u8]) -> Result<(usize, Self), CollectionError>;

    /// Convenience: terminal encoding into a fresh buffer.
    fn to_key_bytes(&self) -> Result<Vec<u8>, CollectionError> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }
}

impl KeyCodec for u64 {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        buf.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }

    fn decode(bytes: &[u8]) -> Result<Self, CollectionError> {
        let arr: [u8; 8] = bytes
            .try_into()
            .map_err(|_| CollectionError::decoding(bytes, "u64 key must be 8 bytes"))?;
        Ok(u64::from_be_bytes(arr))
    }

    fn decode_non_terminal(bytes: &[u8]) -> Result<(usize, Self), CollectionError> {
        if bytes.len() < 8 {
            return Err(CollectionError::decoding(bytes, "u64 key too short"));
        }
        Ok((8, Self::decode(&bytes[..8])?))
    }
}

impl KeyCodec for Vec<u8> {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        buf.extend_from_slice(self);
        Ok(())
    }

    fn decode(bytes: &[u8]) -> Result<Self, CollectionError> {
        Ok(bytes.to_vec())
    }

    fn encode_non_terminal(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        let len = u8::try_from(self.len()).map_err(|_| {
            CollectionError::Encoding(format!(
                "bytes key of length {} exceeds 255 in non-terminal position",
                self.len()
            ))
        })?;
        buf.push(len);
        buf.extend_from_slice(self);
        Ok(())
    }

    fn decode_non_terminal(bytes: &[u8]) -> Result<(usize, Self), CollectionError> {
        let (&len, rest) = bytes
            .split_first()
            .ok_or_else(|| CollectionError::decoding(bytes, "missing length byte"))?;
        let len = len as usize;
        if rest.len() < len {
            return Err(CollectionError::decoding(bytes, "bytes key shorter than its length"));
        }
        Ok((1 + len, rest[..len].to_vec()))
    }
}

impl KeyCodec for String {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        buf.extend_from_slice(self.as_bytes());
        Ok(())
    }

    fn decode(bytes: &[u8]) -> Result<Self, CollectionError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| CollectionError::decoding(bytes, e.to_string()))
    }

    fn encode_non_terminal(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        if self.as_bytes().contains(&0) {
            return Err(CollectionError::Encoding(
                "string key contains NUL in non-terminal position".to_string(),
            ));
        }
        buf.extend_from_slice(self.as_bytes());
        buf.push(0);
        Ok(())
    }

    fn decode_non_terminal(bytes: &[u8]) -> Result<(usize, Self), CollectionError> {
        let end = bytes
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| CollectionError::decoding(bytes, "unterminated string key"))?;
        Ok((end + 1, Self::decode(&bytes[..end])?))
    }
}

/// Two-part composite key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair<K1, K2> {
    pub k1: K1,
    pub k2: K2,
}

impl<K1, K2> Pair<K1, K2> {
    pub fn new(k1: K1, k2: K2) -> Self {
        Self { k1, k2 }
    }
}

impl<K1: KeyCodec, K2: KeyCodec> KeyCodec for Pair<K1, K2> {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        self.k1.encode_non_terminal(buf)?;
        self.k2.encode(buf)
    }

    fn decode(bytes: &[u8]) -> Result<Self, CollectionError> {
        let (n, k1) = K1::decode_non_terminal(bytes)?;
        let k2 = K2::decode(&bytes[n..])?;
        Ok(Self { k1, k2 })
    }

    fn encode_non_terminal(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        self.k1.encode_non_terminal(buf)?;
        self.k2.encode_non_terminal(buf)
    }

    fn decode_non_terminal(bytes: &[u8]) -> Result<(usize, Self), CollectionError> {
        let (n1, k1) = K1::decode_non_terminal(bytes)?;
        let (n2, k2) = K2::decode_non_terminal(&bytes[n1..])?;
        Ok((n1 + n2, Self { k1, k2 }))
    }
}

/// Three-part composite key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple<K1, K2, K3> {
    pub k1: K1,
    pub k2: K2,
    pub k3: K3,
}

impl<K1, K2, K3> Triple<K1, K2, K3> {
    pub fn new(k1: K1, k2: K2, k3: K3) -> Self {
        Self { k1, k2, k3 }
    }
}

impl<K1: KeyCodec, K2: KeyCodec, K3: KeyCodec> KeyCodec for Triple<K1, K2, K3> {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        self.k1.encode_non_terminal(buf)?;
        self.k2.encode_non_terminal(buf)?;
        self.k3.encode(buf)
    }

    fn decode(bytes: &[u8]) -> Result<Self, CollectionError> {
        let (n1, k1) = K1::decode_non_terminal(bytes)?;
        let (n2, k2) = K2::decode_non_terminal(&bytes[n1..])?;
        let k3 = K3::decode(&bytes[n1 + n2..])?;
        Ok(Self { k1, k2, k3 })
    }

    fn encode_non_terminal(&self, buf: &mut Vec<u8>) -> Result<(), CollectionError> {
        self.k1.encode_non_terminal(buf)?;
        self.k2.encode_non_terminal(buf)?;
        self.k3.encode_non_terminal(buf)
    }

    fn decode_non_terminal(bytes: &[u8]) -> Result<(usize, Self), CollectionError> {
        let (n1, k1) = K1::decode_non_terminal(bytes)?;
        let (n2, k2) = K2::decode_non_terminal(&bytes[n1..])?;
        let (n3, k3) = K3::decode_non_terminal(&bytes[n1 + n2..])?;
        Ok((n1 + n2 + n3, Self { k1, k2, k3 }))
    }
}
