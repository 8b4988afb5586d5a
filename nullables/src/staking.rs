//! Nullable staking view: a programmable validator set for tally tests.

use std::collections::BTreeMap;

use atomone_governance::{Delegation, StakingView, Validator};
use atomone_types::Address;

/// In-memory [`StakingView`].
///
/// `total_bonded_tokens` is the sum over bonded validators unless overridden.
#[derive(Clone, Debug, Default)]
pub struct NullStaking {
    validators: BTreeMap<Address, (Validator, bool)>,
    delegations: BTreeMap<Address, Vec<Delegation>>,
    total_bonded_override: Option<u128>,
}

impl NullStaking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bonded validator whose shares equal its tokens (1:1 exchange rate).
    pub fn with_validator(mut self, operator: &Address, bonded_tokens: u128) -> Self {
        self.add_validator(operator, bonded_tokens, bonded_tokens, true);
        self
    }

    pub fn add_validator(
        &mut self,
        operator: &Address,
        bonded_tokens: u128,
        delegator_shares: u128,
        bonded: bool,
    ) {
        self.validators.insert(
            operator.clone(),
            (
                Validator {
                    operator: operator.clone(),
                    bonded_tokens,
                    delegator_shares,
                },
                bonded,
            ),
        );
    }

    pub fn with_delegation(
        mut self,
        delegator: &Address,
        validator: &Address,
        shares: u128,
    ) -> Self {
        self.delegations
            .entry(delegator.clone())
            .or_default()
            .push(Delegation {
                delegator: delegator.clone(),
                validator: validator.clone(),
                shares,
            });
        self
    }

    pub fn set_total_bonded(&mut self, total: u128) {
        self.total_bonded_override = Some(total);
    }
}

impl StakingView for NullStaking {
    fn bonded_validators(&self) -> Vec<Validator> {
        self.validators
            .values()
            .filter(|(_, bonded)| *bonded)
            .map(|(v, _)| v.clone())
            .collect()
    }

    fn delegations(&self, delegator: &Address) -> Vec<Delegation> {
        self.delegations.get(delegator).cloned().unwrap_or_default()
    }

    fn total_bonded_tokens(&self) -> u128 {
        self.total_bonded_override.unwrap_or_else(|| {
            self.validators
                .values()
                .filter(|(_, bonded)| *bonded)
                .map(|(v, _)| v.bonded_tokens)
                .sum()
        })
    }
}
