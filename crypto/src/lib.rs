//! Cryptographic helpers for the multisig core.
//!
//! - **SHA-256** for deterministic account address derivation
//! - **Blake2b** for the address checksum
//! - An [`AddressCodec`] that maps raw byte identities to display strings

pub mod address;
pub mod error;
pub mod hash;

pub use address::{AddressCodec, Base32Codec};
pub use error::AddressError;
pub use hash::{blake2b_256, sha256, sha256_multi};
