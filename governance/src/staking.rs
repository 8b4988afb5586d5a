//! The staking capability the tally reads voting power from.

use atomone_types::Address;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub operator: Address,
    pub bonded_tokens: u128,
    pub delegator_shares: u128,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegator: Address,
    pub validator: Address,
    pub shares: u128,
}

/// Read-only view of the staking module.
pub trait StakingView {
    /// Validators currently in the bonded set.
    fn bonded_validators(&self) -> Vec<Validator>;

    /// Every delegation made by `delegator`, bonded or not.
    fn delegations(&self, delegator: &Address) -> Vec<Delegation>;

    fn total_bonded_tokens(&self) -> u128;
}
