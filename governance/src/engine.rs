//! Governance engine: proposals, weighted votes, and the final tally.

use std::collections::BTreeMap;

use atomone_types::{Address, Timestamp};
use tracing::{debug, info};

use crate::error::GovernanceError;
use crate::params::TallyParams;
use crate::proposal::{Proposal, ProposalContent, ProposalStatus};
use crate::staking::StakingView;
use crate::tally::{evaluate, tally_votes, TallyOutcome};
use crate::vote::{validate_options, WeightedVote, WeightedVoteOption};

pub struct GovernanceEngine {
    params: TallyParams,
    proposals: BTreeMap<u64, Proposal>,
    /// (proposal id, voter) -> latest vote.
    votes: BTreeMap<(u64, Address), WeightedVote>,
    next_proposal_id: u64,
}

impl GovernanceEngine {
    pub fn new(params: TallyParams) -> Result<Self, GovernanceError> {
        params.validate()?;
        Ok(Self {
            params,
            proposals: BTreeMap::new(),
            votes: BTreeMap::new(),
            next_proposal_id: 1,
        })
    }

    pub fn params(&self) -> &TallyParams {
        &self.params
    }

    pub fn proposal(&self, id: u64) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Votes currently recorded on a proposal, ordered by voter.
    pub fn votes(&self, proposal_id: u64) -> Vec<&WeightedVote> {
        self.votes
            .range((proposal_id, Address::default())..)
            .take_while(|((id, _), _)| *id == proposal_id)
            .map(|(_, vote)| vote)
            .collect()
    }

    /// Submit a new proposal; it enters its voting period immediately.
    pub fn submit_proposal(
        &mut self,
        proposer: Address,
        title: impl Into<String>,
        contents: Vec<ProposalContent>,
        now: Timestamp,
    ) -> Result<u64, GovernanceError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GovernanceError::EmptyTitle);
        }
        let id = self.next_proposal_id;
        self.next_proposal_id = id.checked_add(1).ok_or(GovernanceError::Overflow)?;
        info!(id, proposer = %proposer, "governance proposal submitted");
        self.proposals.insert(
            id,
            Proposal {
                id,
                proposer,
                title,
                contents,
                submit_time: now,
                status: ProposalStatus::VotingPeriod,
                final_tally: None,
                burn_deposits: false,
            },
        );
        Ok(id)
    }

    /// Record a weighted vote, replacing any earlier vote by the same voter.
    pub fn cast_vote(
        &mut self,
        proposal_id: u64,
        voter: Address,
        options: Vec<WeightedVoteOption>,
    ) -> Result<(), GovernanceError> {
        let proposal = self
            .proposals
            .get(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;
        if proposal.status != ProposalStatus::VotingPeriod {
            return Err(GovernanceError::VotingClosed(proposal_id));
        }
        validate_options(&options)?;
        debug!(proposal = proposal_id, voter = %voter, "governance vote cast");
        self.votes.insert(
            (proposal_id, voter.clone()),
            WeightedVote {
                proposal_id,
                voter,
                options,
            },
        );
        Ok(())
    }

    /// Run the final tally: compute the outcome, close the proposal, and
    /// delete its votes.
    pub fn tally(
        &mut self,
        proposal_id: u64,
        staking: &dyn StakingView,
    ) -> Result<TallyOutcome, GovernanceError> {
        let proposal = self
            .proposals
            .get(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;
        if proposal.status != ProposalStatus::VotingPeriod {
            return Err(GovernanceError::VotingClosed(proposal_id));
        }
        let (quorum, threshold) = proposal.quorum_and_threshold(&self.params);

        let votes: Vec<WeightedVote> = self.votes(proposal_id).into_iter().cloned().collect();
        let (total, result) = tally_votes(&votes, staking)?;
        let outcome = evaluate(
            total,
            result,
            staking.total_bonded_tokens(),
            quorum,
            threshold,
            self.params.burn_vote_quorum,
        )?;

        for vote in &votes {
            self.votes.remove(&(proposal_id, vote.voter.clone()));
        }
        if let Some(proposal) = self.proposals.get_mut(&proposal_id) {
            proposal.status = if outcome.passes {
                ProposalStatus::Passed
            } else {
                ProposalStatus::Rejected
            };
            proposal.final_tally = Some(outcome.result.clone());
            proposal.burn_deposits = outcome.burn_deposits;
        }
        info!(
            id = proposal_id,
            passes = outcome.passes,
            burn_deposits = outcome.burn_deposits,
            total_voting_power = %outcome.total_voting_power,
            "governance proposal tallied"
        );
        Ok(outcome)
    }
}
