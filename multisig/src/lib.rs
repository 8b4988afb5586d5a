//! Weighted multisig accounts.
//!
//! A multisig account is a group of weighted members with a threshold.
//! Members submit proposals, each carrying an ordered list of sub-messages
//! whose only signer is the account itself. Members vote; once the combined
//! weight of `Yes` votes reaches the threshold, any member may execute the
//! proposal. Execution runs every sub-message through the injected
//! [`Router`] against a [`CacheStore`](atomone_store::CacheStore) overlay:
//! either all of them succeed and the overlay is committed, or none of their
//! effects survive and the proposal is recorded as failed.
//!
//! The [`Keeper`] owns the module's collections:
//!
//! | prefix | collection        | key                               |
//! |--------|-------------------|-----------------------------------|
//! | `0x00` | params            | -                                 |
//! | `0x01` | accounts          | account bytes                     |
//! | `0x02` | account number    | -                                 |
//! | `0x03` | proposals         | (account bytes, proposal id)      |
//! | `0x04` | proposal number   | -                                 |
//! | `0x05` | votes             | (account bytes, proposal id, voter bytes) |

pub mod account;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod execution;
pub mod genesis;
pub mod keeper;
pub mod keys;
pub mod msg_server;
pub mod msgs;
pub mod params;
pub mod proposal;
pub mod query;
pub mod router;
pub mod vote;

#[cfg(test)]
mod testutil;

pub use account::{Account, Member};
pub use config::MultisigConfig;
pub use context::{Context, Event, EventManager};
pub use error::MultisigError;
pub use execution::ExecOutcome;
pub use genesis::GenesisState;
pub use keeper::Keeper;
pub use msgs::{
    AnyMsg, Msg, MsgCreateAccount, MsgCreateAccountResponse, MsgCreateProposal,
    MsgCreateProposalResponse, MsgExecuteProposal, MsgExecuteProposalResponse, MsgUpdateParams,
    MsgUpdateParamsResponse, MsgVote, MsgVoteResponse,
};
pub use params::{Params, VoteRetention};
pub use proposal::{Proposal, ProposalStatus};
pub use router::{MsgHandler, MsgRouter, Router, RouterError};
pub use vote::{Vote, VoteOption};

/// Name mixed into derived account addresses.
pub const MODULE_NAME: &str = "multisig";
