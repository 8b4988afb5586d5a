//! Multisig accounts and address derivation.

use atomone_crypto::sha256_multi;
use atomone_types::Address;
use serde::{Deserialize, Serialize};

use crate::error::MultisigError;
use crate::MODULE_NAME;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub address: Address,
    pub weight: u64,
}

impl Member {
    pub fn new(address: impl Into<Address>, weight: u64) -> Self {
        Self {
            address: address.into(),
            weight,
        }
    }
}

/// A weighted group acting as a single signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub creator: Address,
    pub members: Vec<Member>,
    /// Minimum `Yes` weight needed to execute a proposal.
    pub threshold: u64,
}

impl Account {
    pub fn has_member(&self, address: &Address) -> bool {
        self.members.iter().any(|m| &m.address == address)
    }

    pub fn member_weight(&self, address: &Address) -> Option<u64> {
        self.members
            .iter()
            .find(|m| &m.address == address)
            .map(|m| m.weight)
    }

    pub fn total_weight(&self) -> Result<u64, MultisigError> {
        total_weight(&self.members)
    }
}

/// Sum of member weights; fails on `u64` overflow.
pub fn total_weight(members: &[Member]) -> Result<u64, MultisigError> {
    members.iter().try_fold(0u64, |sum, m| {
        sum.checked_add(m.weight).ok_or(MultisigError::WeightsOverflow)
    })
}

/// `sha256(module name || creator || be_u64(sequence))`.
///
/// Mixing in the creator means nobody but the creator can occupy an address
/// before the account is created.
pub fn derive_address(creator: &[u8], sequence: u64) -> Vec<u8> {
    sha256_multi(&[MODULE_NAME.as_bytes(), creator, &sequence.to_be_bytes()[..]]).to_vec()
}
