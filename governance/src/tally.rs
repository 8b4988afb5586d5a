//! Stake-weighted tally.

use std::collections::HashMap;

use atomone_types::{Dec, DEC_ONE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GovernanceError;
use crate::params::BPS_DENOMINATOR;
use crate::staking::{StakingView, Validator};
use crate::vote::{VoteOption, WeightedVote};

/// Voting power per option.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyResult {
    pub yes: Dec,
    pub abstain: Dec,
    pub no: Dec,
}

impl TallyResult {
    fn add(&mut self, option: VoteOption, power: Dec) -> Result<(), GovernanceError> {
        let slot = match option {
            VoteOption::Yes => &mut self.yes,
            VoteOption::Abstain => &mut self.abstain,
            VoteOption::No => &mut self.no,
        };
        *slot = slot.checked_add(power).ok_or(GovernanceError::Overflow)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyOutcome {
    pub passes: bool,
    pub burn_deposits: bool,
    pub total_voting_power: Dec,
    pub result: TallyResult,
}

/// Sum the voting power behind `votes`.
///
/// A voter's power is the sum over their delegations to bonded validators of
/// `shares * bonded_tokens / delegator_shares`, split across the vote's
/// options by weight. Power is kept in 18-decimal fixed point, so a share
/// worth less than one token still counts. Delegations to validators outside
/// the bonded set count for nothing.
pub fn tally_votes(
    votes: &[WeightedVote],
    staking: &dyn StakingView,
) -> Result<(Dec, TallyResult), GovernanceError> {
    let validators: HashMap<_, Validator> = staking
        .bonded_validators()
        .into_iter()
        .map(|v| (v.operator.clone(), v))
        .collect();

    let mut total = Dec::ZERO;
    let mut result = TallyResult::default();

    for vote in votes {
        for delegation in staking.delegations(&vote.voter) {
            let Some(validator) = validators.get(&delegation.validator) else {
                continue;
            };
            let power = delegation_power(delegation.shares, validator)?;
            for option in &vote.options {
                let sub_power = power
                    .checked_mul_bps(option.weight_bps)
                    .ok_or(GovernanceError::Overflow)?;
                result.add(option.option, sub_power)?;
            }
            total = total.checked_add(power).ok_or(GovernanceError::Overflow)?;
        }
        debug!(proposal = vote.proposal_id, voter = %vote.voter, "vote tallied");
    }
    Ok((total, result))
}

fn delegation_power(shares: u128, validator: &Validator) -> Result<Dec, GovernanceError> {
    if validator.delegator_shares == 0 {
        if validator.bonded_tokens == 0 {
            return Ok(Dec::ZERO);
        }
        return Err(GovernanceError::ZeroDelegatorShares(
            validator.operator.to_string(),
        ));
    }
    Dec::checked_from_ratio(shares, validator.bonded_tokens, validator.delegator_shares)
        .ok_or(GovernanceError::Overflow)
}

/// Decide the outcome from the summed power.
///
/// In order: no bonded stake fails; turnout below quorum fails (burning
/// deposits iff `burn_vote_quorum`); all-abstain fails; otherwise the
/// proposal passes iff `yes / (total - abstain) > threshold`. Ratios are
/// compared by cross-multiplying the raw fixed-point values.
pub fn evaluate(
    total_voting_power: Dec,
    result: TallyResult,
    total_bonded: u128,
    quorum_bps: u32,
    threshold_bps: u32,
    burn_vote_quorum: bool,
) -> Result<TallyOutcome, GovernanceError> {
    let outcome = |passes, burn_deposits, result| TallyOutcome {
        passes,
        burn_deposits,
        total_voting_power,
        result,
    };
    let denominator = u128::from(BPS_DENOMINATOR);

    if total_bonded == 0 {
        return Ok(outcome(false, false, result));
    }

    let turnout = total_voting_power
        .raw()
        .checked_mul(denominator)
        .ok_or(GovernanceError::Overflow)?;
    let needed = u128::from(quorum_bps)
        .checked_mul(total_bonded)
        .and_then(|n| n.checked_mul(DEC_ONE))
        .ok_or(GovernanceError::Overflow)?;
    if turnout < needed {
        return Ok(outcome(false, burn_vote_quorum, result));
    }

    let non_abstaining = total_voting_power.saturating_sub(result.abstain);
    if non_abstaining.is_zero() {
        return Ok(outcome(false, false, result));
    }

    let yes = result
        .yes
        .raw()
        .checked_mul(denominator)
        .ok_or(GovernanceError::Overflow)?;
    let bar = u128::from(threshold_bps)
        .checked_mul(non_abstaining.raw())
        .ok_or(GovernanceError::Overflow)?;
    Ok(outcome(yes > bar, false, result))
}
