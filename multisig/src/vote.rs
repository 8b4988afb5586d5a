//! Member votes.

use std::fmt;
use std::str::FromStr;

use atomone_types::Address;
use serde::{Deserialize, Serialize};

use crate::error::MultisigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOption {
    #[default]
    Unspecified,
    Yes,
    No,
    Abstain,
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => f.write_str("unspecified"),
            Self::Yes => f.write_str("yes"),
            Self::No => f.write_str("no"),
            Self::Abstain => f.write_str("abstain"),
        }
    }
}

impl FromStr for VoteOption {
    type Err = MultisigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" | "Yes" => Ok(Self::Yes),
            "no" | "No" => Ok(Self::No),
            "abstain" | "Abstain" => Ok(Self::Abstain),
            _ => Err(MultisigError::InvalidVoteOption),
        }
    }
}

/// The latest vote of one member on one proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub account_address: Address,
    pub proposal_id: u64,
    pub voter: Address,
    pub option: VoteOption,
}
