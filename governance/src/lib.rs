//! Legacy stake-weighted governance tally.
//!
//! Voting power comes from a voter's own delegations to bonded validators
//! (validators do not vote on behalf of their delegators). A vote may be split
//! across options by weight. The proposal passes when turnout reaches quorum
//! and the yes share of non-abstaining power exceeds the threshold; laws and
//! constitution amendments raise both bars.
//!
//! Voting power is an 18-decimal fixed-point [`Dec`]. Quorum and threshold are
//! basis points (10 000 = 100%) compared against it by cross-multiplication.

pub mod engine;
pub mod error;
pub mod params;
pub mod proposal;
pub mod staking;
pub mod tally;
pub mod vote;

pub use atomone_types::{Dec, DEC_ONE};
pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use params::{TallyParams, BPS_DENOMINATOR};
pub use proposal::{Proposal, ProposalContent, ProposalStatus};
pub use staking::{Delegation, StakingView, Validator};
pub use tally::{TallyOutcome, TallyResult};
pub use vote::{VoteOption, WeightedVote, WeightedVoteOption};
