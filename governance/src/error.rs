use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("proposal {0} not found")]
    ProposalNotFound(u64),

    #[error("proposal {0} is no longer in its voting period")]
    VotingClosed(u64),

    #[error("proposal must have a title")]
    EmptyTitle,

    #[error("vote must have at least one option")]
    EmptyVote,

    #[error("option {0} appears more than once")]
    DuplicateOption(String),

    #[error("option weights must sum to {expected} basis points, got {got}")]
    InvalidVoteWeights { expected: u32, got: u64 },

    #[error("invalid tally params: {0}")]
    InvalidParams(String),

    #[error("validator {0} has bonded tokens but no delegator shares")]
    ZeroDelegatorShares(String),

    #[error("voting power overflow")]
    Overflow,
}
