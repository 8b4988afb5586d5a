//! Governance proposals.

use atomone_types::{Address, Timestamp};
use serde::{Deserialize, Serialize};

use crate::params::TallyParams;
use crate::tally::TallyResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    VotingPeriod,
    Passed,
    Rejected,
}

/// What a proposal asks for. Laws and constitution amendments carry their
/// own, usually stricter, quorum and threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalContent {
    Text { description: String },
    ParameterChange { key: String, value: String },
    Law { description: String },
    ConstitutionAmendment { amendment: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub title: String,
    pub contents: Vec<ProposalContent>,
    pub submit_time: Timestamp,
    pub status: ProposalStatus,
    /// Set once the final tally has run.
    pub final_tally: Option<TallyResult>,
    pub burn_deposits: bool,
}

impl Proposal {
    /// The quorum and threshold this proposal must meet: the defaults,
    /// raised to the stricter values of any law or amendment it contains.
    pub fn quorum_and_threshold(&self, params: &TallyParams) -> (u32, u32) {
        let mut quorum = params.quorum_bps;
        let mut threshold = params.threshold_bps;
        for content in &self.contents {
            let (q, t) = match content {
                ProposalContent::Law { .. } => (params.law_quorum_bps, params.law_threshold_bps),
                ProposalContent::ConstitutionAmendment { .. } => (
                    params.constitution_amendment_quorum_bps,
                    params.constitution_amendment_threshold_bps,
                ),
                ProposalContent::Text { .. } | ProposalContent::ParameterChange { .. } => continue,
            };
            quorum = quorum.max(q);
            threshold = threshold.max(t);
        }
        (quorum, threshold)
    }
}
