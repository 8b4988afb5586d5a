//! Weighted votes.

use std::collections::HashSet;
use std::fmt;

use atomone_types::Address;
use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;
use crate::params::BPS_DENOMINATOR;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    Abstain,
    No,
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("yes"),
            Self::Abstain => f.write_str("abstain"),
            Self::No => f.write_str("no"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedVoteOption {
    pub option: VoteOption,
    pub weight_bps: u32,
}

impl WeightedVoteOption {
    pub fn new(option: VoteOption, weight_bps: u32) -> Self {
        Self { option, weight_bps }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedVote {
    pub proposal_id: u64,
    pub voter: Address,
    pub options: Vec<WeightedVoteOption>,
}

/// Options must be non-empty, unique, and sum to exactly 100%.
pub fn validate_options(options: &[WeightedVoteOption]) -> Result<(), GovernanceError> {
    if options.is_empty() {
        return Err(GovernanceError::EmptyVote);
    }
    let mut seen = HashSet::new();
    let mut total: u64 = 0;
    for o in options {
        if !seen.insert(o.option) {
            return Err(GovernanceError::DuplicateOption(o.option.to_string()));
        }
        total += u64::from(o.weight_bps);
    }
    if total != u64::from(BPS_DENOMINATOR) {
        return Err(GovernanceError::InvalidVoteWeights {
            expected: BPS_DENOMINATOR,
            got: total,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_full_option_is_valid() {
        assert!(validate_options(&[WeightedVoteOption::new(VoteOption::Yes, 10_000)]).is_ok());
    }

    #[test]
    fn test_split_vote_is_valid() {
        let options = [
            WeightedVoteOption::new(VoteOption::Yes, 6_000),
            WeightedVoteOption::new(VoteOption::No, 4_000),
        ];
        assert!(validate_options(&options).is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(validate_options(&[]), Err(GovernanceError::EmptyVote));
    }

    #[test]
    fn test_duplicate_rejected() {
        let options = [
            WeightedVoteOption::new(VoteOption::Yes, 5_000),
            WeightedVoteOption::new(VoteOption::Yes, 5_000),
        ];
        assert!(matches!(
            validate_options(&options),
            Err(GovernanceError::DuplicateOption(_))
        ));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let options = [
            WeightedVoteOption::new(VoteOption::Yes, 5_000),
            WeightedVoteOption::new(VoteOption::No, 4_000),
        ];
        assert_eq!(
            validate_options(&options),
            Err(GovernanceError::InvalidVoteWeights {
                expected: 10_000,
                got: 9_000
            })
        );
    }
}
