//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies (clock, storage, staking, bank) are abstracted behind
//! traits. The implementations here:
//! - return deterministic values
//! - can be controlled programmatically
//! - never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod bank;
pub mod clock;
pub mod staking;
pub mod store;

pub use bank::NullBank;
pub use clock::NullClock;
pub use staking::NullStaking;
pub use store::NullStore;
