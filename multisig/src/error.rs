use atomone_collections::CollectionError;
use atomone_crypto::AddressError;
use atomone_store::StoreError;
use atomone_types::Address;
use thiserror::Error;

use crate::proposal::ProposalStatus;
use crate::router::RouterError;

#[derive(Debug, Error)]
pub enum MultisigError {
    // ── Validation ──────────────────────────────────────────────────────
    #[error("invalid address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("account must have at least one member")]
    MissingMembers,

    #[error("duplicate member {0}")]
    DuplicateMember(Address),

    #[error("member {0} has zero weight")]
    ZeroMemberWeight(Address),

    #[error("threshold must be greater than zero")]
    ZeroThreshold,

    #[error("creator {0} is not a member of the account")]
    CreatorNotAMember(Address),

    #[error("sum of member weights overflows")]
    WeightsOverflow,

    #[error("threshold {threshold} exceeds total member weight {total}")]
    TotalWeightGreaterThanThreshold { total: u64, threshold: u64 },

    #[error("proposal title cannot be empty")]
    EmptyTitle,

    #[error("proposal summary cannot be empty")]
    EmptySummary,

    #[error("proposal must contain at least one message")]
    EmptyMessages,

    #[error("proposal title is {len} bytes, max {max}")]
    TitleTooLong { len: usize, max: u64 },

    #[error("proposal summary is {len} bytes, max {max}")]
    SummaryTooLong { len: usize, max: u64 },

    #[error("proposal has {count} messages, max {max}")]
    TooManyMessages { count: usize, max: u64 },

    #[error("invalid vote option")]
    InvalidVoteOption,

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("invalid genesis: {0}")]
    InvalidGenesis(String),

    // ── Authorization ───────────────────────────────────────────────────
    #[error("{0} is not a member of the account")]
    NotAMember(Address),

    #[error("invalid authority; expected {expected}, got {got}")]
    Unauthorized { expected: Address, got: Address },

    // ── Routing ─────────────────────────────────────────────────────────
    #[error("message {type_url} must be signed by the account {expected} only")]
    InvalidSigner { type_url: String, expected: Address },

    #[error("no route for proposal message {0}")]
    UnroutableMessage(String),

    #[error("router error: {0}")]
    Router(#[from] RouterError),

    // ── Not found / state ───────────────────────────────────────────────
    #[error("multisig account {0} doesn't exist")]
    AccountNotFound(Address),

    #[error("multisig account {0} already exists")]
    AccountExists(Address),

    #[error("multisig proposal {id} of account {account} doesn't exist")]
    ProposalNotFound { account: Address, id: u64 },

    #[error("no vote from {voter} on proposal {id} of account {account}")]
    VoteNotFound {
        account: Address,
        id: u64,
        voter: Address,
    },

    #[error("proposal {id} is already {status}")]
    ProposalFinalized { id: u64, status: ProposalStatus },

    #[error("yes weight {yes} is below threshold {threshold}")]
    ThresholdNotMet { yes: u64, threshold: u64 },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    // ── Infrastructure ──────────────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
