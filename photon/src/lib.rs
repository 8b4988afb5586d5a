//! Photon conversion.
//!
//! Holders burn the bond denom and receive photons in exchange. The rate
//! spreads the photons still unminted under the fixed cap over the bond
//! supply:
//!
//! ```text
//! rate = (PHOTON_MAX_SUPPLY - photon_supply) / bond_supply
//! minted = round(burned * rate)
//! ```
//!
//! Token balances live behind the [`Bank`] capability supplied by the host.
//! The [`Keeper`] only owns the module params:
//!
//! | prefix          | collection | key |
//! |-----------------|------------|-----|
//! | `photon/params` | params     | -   |

pub mod bank;
pub mod conversion;
pub mod error;
pub mod events;
pub mod genesis;
pub mod keeper;
pub mod keys;
pub mod msg_server;
pub mod msgs;
pub mod params;
pub mod query;

pub use bank::{Bank, BankError, Coin};
pub use conversion::conversion_rate;
pub use error::PhotonError;
pub use genesis::GenesisState;
pub use keeper::Keeper;
pub use msgs::{MsgMintPhoton, MsgMintPhotonResponse, MsgUpdateParams, MsgUpdateParamsResponse};
pub use params::Params;

pub const MODULE_NAME: &str = "photon";

/// Denom of the minted token.
pub const PHOTON_DENOM: &str = "uphoton";

/// Default bond denom, the only one that may be burned.
pub const BOND_DENOM: &str = "uatone";

/// 1 billion photons, in micro units.
pub const PHOTON_MAX_SUPPLY: u128 = 1_000_000_000_000_000;
