//! Fundamental types shared across the workspace.
//!
//! Addresses are kept in their display form; converting them to and from the
//! raw byte identity is the job of an address codec (see `atomone-crypto`).

pub mod address;
pub mod dec;
pub mod time;

pub use address::Address;
pub use dec::{Dec, DEC_ONE};
pub use time::Timestamp;
