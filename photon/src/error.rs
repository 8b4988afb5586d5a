use atomone_collections::CollectionError;
use atomone_types::Address;
use thiserror::Error;

use crate::bank::BankError;

#[derive(Debug, Error)]
pub enum PhotonError {
    #[error("photon minting is disabled")]
    MintDisabled,

    #[error("only {expected} can be burned, got {got}")]
    InvalidBurnDenom { expected: String, got: String },

    #[error("burn amount must be positive")]
    ZeroAmount,

    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("no photons can be minted for this burn")]
    NoMintablePhotons,

    #[error("minting {minted} would take photon supply {supply} past {max}")]
    NotEnoughPhotons { supply: u128, minted: String, max: u128 },

    #[error("invalid authority; expected {expected}, got {got}")]
    Unauthorized { expected: Address, got: Address },

    #[error("invalid genesis: {0}")]
    InvalidGenesis(String),

    #[error("conversion overflow")]
    Overflow,

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}
