//! Address codec: raw byte identity <-> display string.
//!
//! Format: `<prefix>_` + base32(bytes) + base32(checksum, 8 chars)
//!
//! Checksum: first 5 bytes of Blake2b-256(bytes).
//! Base32 alphabet: `13456789abcdefghijkmnopqrstuwxyz` (avoids ambiguous chars).
//! Any byte length is accepted, so 20-byte user identities and 32-byte derived
//! account addresses share the same codec.

use atomone_types::Address;

use crate::error::AddressError;
use crate::hash::blake2b_256;

/// Base32 alphabet (32 chars, avoids visually ambiguous 0/O, 2/Z, l/I, v).
const BASE32_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte -> 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Number of checksum bytes appended to every address.
const CHECKSUM_LEN: usize = 5;
/// Number of base32 characters for the checksum (40 bits -> 8 chars).
const CHECKSUM_CHARS: usize = 8;

/// Converts raw byte identities to and from their display form.
///
/// Supplied by the host; the multisig keeper only needs these two operations.
pub trait AddressCodec: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> Address;
    fn decode(&self, address: &Address) -> Result<Vec<u8>, AddressError>;
}

/// Prefixed base32 codec with a Blake2b checksum.
#[derive(Clone, Debug)]
pub struct Base32Codec {
    prefix: String,
}

impl Base32Codec {
    /// `prefix` is the human readable part, e.g. `"atone"`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: format!("{}_", prefix.into()),
        }
    }

    pub fn prefix(&self) -> &str {
        self.prefix.trim_end_matches('_')
    }
}

impl AddressCodec for Base32Codec {
    fn encode(&self, bytes: &[u8]) -> Address {
        let checksum = blake2b_256(bytes);
        Address::new(format!(
            "{}{}{}",
            self.prefix,
            encode_base32(bytes),
            encode_base32(&checksum[..CHECKSUM_LEN])
        ))
    }

    fn decode(&self, address: &Address) -> Result<Vec<u8>, AddressError> {
        let raw = address.as_str();
        if raw.is_empty() {
            return Err(AddressError::Empty);
        }
        let encoded = raw
            .strip_prefix(self.prefix.as_str())
            .ok_or_else(|| AddressError::WrongPrefix {
                address: raw.to_string(),
                prefix: self.prefix.clone(),
            })?;
        if encoded.len() <= CHECKSUM_CHARS || !encoded.is_ascii() {
            return Err(AddressError::TooShort(raw.to_string()));
        }

        let (payload, checksum) = encoded.split_at(encoded.len() - CHECKSUM_CHARS);
        let bytes = decode_base32(payload)
            .ok_or_else(|| AddressError::InvalidCharacter(raw.to_string()))?;
        let checksum_bytes = decode_base32(checksum)
            .ok_or_else(|| AddressError::InvalidCharacter(raw.to_string()))?;

        // Trailing pad bits must be zero, otherwise two strings would map to
        // the same identity.
        if encode_base32(&bytes) != payload {
            return Err(AddressError::NonCanonical(raw.to_string()));
        }
        if checksum_bytes[..] != blake2b_256(&bytes)[..CHECKSUM_LEN] {
            return Err(AddressError::BadChecksum(raw.to_string()));
        }
        Ok(bytes)
    }
}

/// Encode a byte slice as base32 using the address alphabet.
fn encode_base32(bytes: &[u8]) -> String {
    let total_bits = bytes.len() * 8;
    let num_chars = total_bits.div_ceil(5);
    let mut result = String::with_capacity(num_chars);

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[idx] as char);
        }
    }
    // Remaining bits (padded with zeros on the right).
    if bits_in_buffer > 0 {
        let idx = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(BASE32_ALPHABET[idx] as char);
    }

    result
}

/// Decode a base32 string. Leftover pad bits (< 8) are dropped.
fn decode_base32(s: &str) -> Option<Vec<u8>> {
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;
    let mut result = Vec::with_capacity(s.len() * 5 / 8);

    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits_in_buffer += 5;
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((buffer >> bits_in_buffer) as u8);
        }
    }
    Some(result)
}
