//! State-changing operations.
//!
//! Every operation runs its stateless checks, then its stateful checks, and
//! only then writes; a returned error means the store was not touched.

use atomone_collections::{Pair, Triple};
use tracing::{debug, info};

use crate::account::{derive_address, total_weight, Account};
use crate::context::Context;
use crate::error::MultisigError;
use crate::events;
use crate::execution::ExecOutcome;
use crate::keeper::Keeper;
use crate::msgs::{
    MsgCreateAccount, MsgCreateAccountResponse, MsgCreateProposal, MsgCreateProposalResponse,
    MsgExecuteProposal, MsgExecuteProposalResponse, MsgUpdateParams, MsgUpdateParamsResponse,
    MsgVote, MsgVoteResponse,
};
use crate::params::VoteRetention;
use crate::proposal::{Proposal, ProposalStatus};
use crate::vote::Vote;

impl Keeper {
    pub fn create_account(
        &self,
        ctx: &mut Context<'_>,
        msg: MsgCreateAccount,
    ) -> Result<MsgCreateAccountResponse, MultisigError> {
        msg.validate_basic(self.codec())?;
        let total = total_weight(&msg.members)?;
        if total < msg.threshold {
            return Err(MultisigError::TotalWeightGreaterThanThreshold {
                total,
                threshold: msg.threshold,
            });
        }

        let creator = self.decode_address(&msg.sender)?;
        let number = self.account_number.peek(ctx.store())?;
        let account_bytes = derive_address(&creator, number);
        let address = self.codec().encode(&account_bytes);
        if self.accounts.has(ctx.store(), &account_bytes)? {
            return Err(MultisigError::AccountExists(address));
        }

        self.account_number.next(ctx.store_mut())?;
        let account = Account {
            address: address.clone(),
            creator: msg.sender,
            members: msg.members,
            threshold: msg.threshold,
        };
        self.accounts.set(ctx.store_mut(), &account_bytes, &account)?;

        info!(
            account = %address,
            number,
            members = account.members.len(),
            threshold = account.threshold,
            "multisig account created"
        );
        ctx.emit(events::account_created(&address));
        Ok(MsgCreateAccountResponse { address })
    }

    pub fn create_proposal(
        &self,
        ctx: &mut Context<'_>,
        msg: MsgCreateProposal,
    ) -> Result<MsgCreateProposalResponse, MultisigError> {
        msg.validate_basic(self.codec())?;
        let account_bytes = self.decode_address(&msg.account_address)?;
        let account = self.get_account(ctx.store(), &msg.account_address)?;
        if !account.has_member(&msg.sender) {
            return Err(MultisigError::NotAMember(msg.sender));
        }

        let params = self.get_params(ctx.store())?;
        if msg.title.len() as u64 > params.max_title_len {
            return Err(MultisigError::TitleTooLong {
                len: msg.title.len(),
                max: params.max_title_len,
            });
        }
        if msg.summary.len() as u64 > params.max_summary_len {
            return Err(MultisigError::SummaryTooLong {
                len: msg.summary.len(),
                max: params.max_summary_len,
            });
        }
        if msg.messages.len() as u64 > params.max_proposal_msgs {
            return Err(MultisigError::TooManyMessages {
                count: msg.messages.len(),
                max: params.max_proposal_msgs,
            });
        }

        for sub in &msg.messages {
            let handler = self
                .router()
                .route(&sub.type_url)
                .ok_or_else(|| MultisigError::UnroutableMessage(sub.type_url.clone()))?;
            let signers = handler.signers(sub)?;
            if signers.len() != 1 || signers[0] != account.address {
                return Err(MultisigError::InvalidSigner {
                    type_url: sub.type_url.clone(),
                    expected: account.address.clone(),
                });
            }
        }

        let id = self.proposal_number.next(ctx.store_mut())?;
        let proposal = Proposal {
            id,
            account_address: msg.account_address,
            proposer: msg.sender,
            title: msg.title,
            summary: msg.summary,
            messages: msg.messages,
            submit_time: ctx.block_time(),
            exec_time: None,
            status: ProposalStatus::VotingPeriod,
            failure_reason: None,
        };
        self.set_proposal(ctx.store_mut(), &account_bytes, &proposal)?;

        info!(
            account = %proposal.account_address,
            id,
            proposer = %proposal.proposer,
            messages = proposal.messages.len(),
            "multisig proposal created"
        );
        ctx.emit(events::proposal_created(&proposal.account_address, id));
        Ok(MsgCreateProposalResponse { proposal_id: id })
    }

    /// Record or replace a member's vote.
    pub fn vote(
        &self,
        ctx: &mut Context<'_>,
        msg: MsgVote,
    ) -> Result<MsgVoteResponse, MultisigError> {
        msg.validate_basic(self.codec())?;
        let account_bytes = self.decode_address(&msg.account_address)?;
        let voter_bytes = self.decode_address(&msg.voter)?;
        let proposal = self.get_proposal(ctx.store(), &msg.account_address, msg.proposal_id)?;
        let account = self.get_account(ctx.store(), &msg.account_address)?;
        if proposal.status.is_final() {
            return Err(MultisigError::ProposalFinalized {
                id: proposal.id,
                status: proposal.status,
            });
        }
        if !account.has_member(&msg.voter) {
            return Err(MultisigError::NotAMember(msg.voter));
        }

        let key = Triple::new(account_bytes, msg.proposal_id, voter_bytes);
        let vote = Vote {
            account_address: msg.account_address,
            proposal_id: msg.proposal_id,
            voter: msg.voter,
            option: msg.option,
        };
        self.votes.set(ctx.store_mut(), &key, &vote)?;

        debug!(
            account = %vote.account_address,
            id = vote.proposal_id,
            voter = %vote.voter,
            option = %vote.option,
            "multisig vote recorded"
        );
        ctx.emit(events::vote_cast(
            &vote.account_address,
            vote.proposal_id,
            &vote.voter,
            vote.option,
        ));
        Ok(MsgVoteResponse {})
    }

    /// Execute a proposal whose `Yes` weight has reached the threshold.
    ///
    /// Below the threshold this fails with `ThresholdNotMet` and changes
    /// nothing, so it can be retried after more votes. Otherwise the proposal
    /// is finalized as `Passed` or `Failed` and the call returns `Ok` either
    /// way; the response says which.
    pub fn execute_proposal(
        &self,
        ctx: &mut Context<'_>,
        msg: MsgExecuteProposal,
    ) -> Result<MsgExecuteProposalResponse, MultisigError> {
        msg.validate_basic(self.codec())?;
        let account_bytes = self.decode_address(&msg.account_address)?;
        let mut proposal = self.get_proposal(ctx.store(), &msg.account_address, msg.proposal_id)?;
        let account = self.get_account(ctx.store(), &msg.account_address)?;
        if proposal.status.is_final() {
            return Err(MultisigError::ProposalFinalized {
                id: proposal.id,
                status: proposal.status,
            });
        }
        if !account.has_member(&msg.executor) {
            return Err(MultisigError::NotAMember(msg.executor));
        }

        let yes = self.tally_yes_weight(ctx.store(), &account, proposal.id)?;
        if yes < account.threshold {
            return Err(MultisigError::ThresholdNotMet {
                yes,
                threshold: account.threshold,
            });
        }

        let params = self.get_params(ctx.store())?;
        let (responses, error) = match self.execute_msgs(ctx, &proposal.messages)? {
            ExecOutcome::Success(responses) => {
                proposal.status = ProposalStatus::Passed;
                if params.vote_retention == VoteRetention::DeleteOnPass {
                    let deleted = self.delete_votes(ctx.store_mut(), &account_bytes, proposal.id)?;
                    debug!(id = proposal.id, deleted, "votes deleted after pass");
                }
                (responses, None)
            }
            ExecOutcome::Failure(reason) => {
                proposal.status = ProposalStatus::Failed;
                proposal.failure_reason = Some(reason.clone());
                (Vec::new(), Some(reason))
            }
        };
        proposal.exec_time = Some(ctx.block_time());
        self.set_proposal(ctx.store_mut(), &account_bytes, &proposal)?;

        info!(
            account = %proposal.account_address,
            id = proposal.id,
            status = %proposal.status,
            yes,
            threshold = account.threshold,
            "multisig proposal executed"
        );
        ctx.emit(events::proposal_executed(
            &proposal.account_address,
            proposal.id,
            proposal.status,
            error.as_deref(),
        ));
        Ok(MsgExecuteProposalResponse {
            status: proposal.status,
            responses,
            error,
        })
    }

    pub fn update_params(
        &self,
        ctx: &mut Context<'_>,
        msg: MsgUpdateParams,
    ) -> Result<MsgUpdateParamsResponse, MultisigError> {
        if &msg.authority != self.authority() {
            return Err(MultisigError::Unauthorized {
                expected: self.authority().clone(),
                got: msg.authority,
            });
        }
        msg.validate_basic(self.codec())?;
        self.params.set(ctx.store_mut(), &msg.params)?;
        info!(params = ?msg.params, "multisig params updated");
        Ok(MsgUpdateParamsResponse {})
    }
}
