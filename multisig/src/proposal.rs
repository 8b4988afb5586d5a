//! Proposals.

use std::fmt;

use atomone_types::{Address, Timestamp};
use serde::{Deserialize, Serialize};

use crate::msgs::AnyMsg;

/// `VotingPeriod` moves to `Passed` or `Failed` exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    VotingPeriod,
    Passed,
    Failed,
}

impl ProposalStatus {
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::VotingPeriod)
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VotingPeriod => f.write_str("voting_period"),
            Self::Passed => f.write_str("passed"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    pub account_address: Address,
    pub proposer: Address,
    pub title: String,
    pub summary: String,
    pub messages: Vec<AnyMsg>,
    pub submit_time: Timestamp,
    /// Block time of the execution that finalized the proposal.
    pub exec_time: Option<Timestamp>,
    pub status: ProposalStatus,
    /// Why execution failed, when `status` is `Failed`.
    #[serde(default)]
    pub failure_reason: Option<String>,
}
