//! Genesis import and export.

use std::collections::{BTreeMap, BTreeSet};

use atomone_collections::{Order, Triple};
use atomone_crypto::AddressCodec;
use atomone_store::KvStore;
use atomone_types::Address;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::account::{total_weight, Account};
use crate::error::MultisigError;
use crate::keeper::Keeper;
use crate::params::Params;
use crate::proposal::Proposal;
use crate::vote::{Vote, VoteOption};

/// Every record of the module, as loaded at chain start and dumped on export.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub proposals: Vec<Proposal>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub next_account_number: u64,
    /// Must be greater than every proposal id.
    #[serde(default)]
    pub next_proposal_number: u64,
}

fn invalid(msg: impl Into<String>) -> MultisigError {
    MultisigError::InvalidGenesis(msg.into())
}

impl GenesisState {
    pub fn from_json(json: &str) -> Result<Self, MultisigError> {
        serde_json::from_str(json).map_err(|e| invalid(format!("malformed json: {e}")))
    }

    pub fn to_json(&self) -> Result<String, MultisigError> {
        serde_json::to_string_pretty(self).map_err(|e| invalid(format!("cannot encode json: {e}")))
    }

    /// Check internal consistency: unique ids and every reference resolves.
    pub fn validate(&self, codec: &dyn AddressCodec) -> Result<(), MultisigError> {
        self.params.validate()?;

        let decode = |address: &Address| {
            codec
                .decode(address)
                .map_err(|e| invalid(format!("address {address}: {e}")))
        };

        let mut accounts: BTreeMap<Vec<u8>, &Account> = BTreeMap::new();
        for account in &self.accounts {
            let key = decode(&account.address)?;
            if accounts.insert(key, account).is_some() {
                return Err(invalid(format!("duplicate account {}", account.address)));
            }
            if account.members.is_empty() {
                return Err(invalid(format!("account {} has no members", account.address)));
            }
            let mut members = BTreeSet::new();
            for member in &account.members {
                decode(&member.address)?;
                if !members.insert(&member.address) {
                    return Err(invalid(format!(
                        "duplicate member {} in account {}",
                        member.address, account.address
                    )));
                }
                if member.weight == 0 {
                    return Err(invalid(format!(
                        "member {} of account {} has zero weight",
                        member.address, account.address
                    )));
                }
            }
            if !account.has_member(&account.creator) {
                return Err(invalid(format!(
                    "creator {} is not a member of account {}",
                    account.creator, account.address
                )));
            }
            let total = total_weight(&account.members)?;
            if account.threshold == 0 || account.threshold > total {
                return Err(invalid(format!(
                    "account {} threshold {} outside 1..={total}",
                    account.address, account.threshold
                )));
            }
        }

        let mut proposal_ids = BTreeSet::new();
        let mut proposals = BTreeSet::new();
        for proposal in &self.proposals {
            if !proposal_ids.insert(proposal.id) {
                return Err(invalid(format!("duplicate proposal id {}", proposal.id)));
            }
            let key = decode(&proposal.account_address)?;
            let account = accounts.get(&key).ok_or_else(|| {
                invalid(format!(
                    "proposal {} references unknown account {}",
                    proposal.id, proposal.account_address
                ))
            })?;
            if !account.has_member(&proposal.proposer) {
                return Err(invalid(format!(
                    "proposer {} of proposal {} is not a member",
                    proposal.proposer, proposal.id
                )));
            }
            proposals.insert((key, proposal.id));
        }
        if let Some(&max) = proposal_ids.last() {
            if self.next_proposal_number <= max {
                return Err(invalid(format!(
                    "next_proposal_number {} must exceed highest proposal id {max}",
                    self.next_proposal_number
                )));
            }
        }

        let mut votes = BTreeSet::new();
        for vote in &self.votes {
            let account_key = decode(&vote.account_address)?;
            let account = accounts.get(&account_key).ok_or_else(|| {
                invalid(format!("vote references unknown account {}", vote.account_address))
            })?;
            if !proposals.contains(&(account_key.clone(), vote.proposal_id)) {
                return Err(invalid(format!(
                    "vote references unknown proposal {} of account {}",
                    vote.proposal_id, vote.account_address
                )));
            }
            if !account.has_member(&vote.voter) {
                return Err(invalid(format!(
                    "voter {} on proposal {} is not a member",
                    vote.voter, vote.proposal_id
                )));
            }
            if vote.option == VoteOption::Unspecified {
                return Err(invalid(format!(
                    "vote of {} on proposal {} has no option",
                    vote.voter, vote.proposal_id
                )));
            }
            let voter_key = decode(&vote.voter)?;
            if !votes.insert((account_key, vote.proposal_id, voter_key)) {
                return Err(invalid(format!(
                    "duplicate vote of {} on proposal {}",
                    vote.voter, vote.proposal_id
                )));
            }
        }
        Ok(())
    }
}

impl Keeper {
    /// Validate `genesis`, then write every record.
    pub fn init_genesis(
        &self,
        store: &mut dyn KvStore,
        genesis: &GenesisState,
    ) -> Result<(), MultisigError> {
        genesis.validate(self.codec())?;

        self.params.set(store, &genesis.params)?;
        for account in &genesis.accounts {
            let key = self.decode_address(&account.address)?;
            self.accounts.set(store, &key, account)?;
        }
        for proposal in &genesis.proposals {
            let key = self.decode_address(&proposal.account_address)?;
            self.set_proposal(store, &key, proposal)?;
        }
        for vote in &genesis.votes {
            let key = Triple::new(
                self.decode_address(&vote.account_address)?,
                vote.proposal_id,
                self.decode_address(&vote.voter)?,
            );
            self.votes.set(store, &key, vote)?;
        }
        self.account_number.set(store, genesis.next_account_number)?;
        self.proposal_number.set(store, genesis.next_proposal_number)?;

        info!(
            accounts = genesis.accounts.len(),
            proposals = genesis.proposals.len(),
            votes = genesis.votes.len(),
            "multisig genesis loaded"
        );
        Ok(())
    }

    /// Dump every record in store key order.
    pub fn export_genesis(&self, store: &dyn KvStore) -> Result<GenesisState, MultisigError> {
        Ok(GenesisState {
            params: self.get_params(store)?,
            accounts: self
                .accounts
                .iter(store, Order::Ascending)?
                .into_iter()
                .map(|(_, account)| account)
                .collect(),
            proposals: self
                .proposals
                .iter(store, Order::Ascending)?
                .into_iter()
                .map(|(_, proposal)| proposal)
                .collect(),
            votes: self
                .votes
                .iter(store, Order::Ascending)?
                .into_iter()
                .map(|(_, vote)| vote)
                .collect(),
            next_account_number: self.account_number.peek(store)?,
            next_proposal_number: self.proposal_number.peek(store)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Member;
    use crate::proposal::ProposalStatus;
    use crate::testutil::*;
    use atomone_types::Timestamp;

    fn account_addr(n: u8) -> Address {
        codec().encode(&[n; 32])
    }

    fn valid() -> GenesisState {
        let account = account_addr(1);
        GenesisState {
            params: Params::default(),
            accounts: vec![Account {
                address: account.clone(),
                creator: addr(1),
                members: vec![Member::new(addr(1), 2), Member::new(addr(2), 1)],
                threshold: 2,
            }],
            proposals: vec![Proposal {
                id: 4,
                account_address: account.clone(),
                proposer: addr(2),
                title: "t".to_string(),
                summary: "s".to_string(),
                messages: vec![send(&account, &addr(3), 1)],
                submit_time: Timestamp::new(10),
                exec_time: None,
                status: ProposalStatus::VotingPeriod,
                failure_reason: None,
            }],
            votes: vec![Vote {
                account_address: account,
                proposal_id: 4,
                voter: addr(1),
                option: VoteOption::Yes,
            }],
            next_account_number: 1,
            next_proposal_number: 5,
        }
    }

    fn rejects(mutate: impl FnOnce(&mut GenesisState)) {
        let mut genesis = valid();
        mutate(&mut genesis);
        assert!(
            matches!(genesis.validate(&codec()), Err(MultisigError::InvalidGenesis(_))),
            "expected rejection of {genesis:?}"
        );
    }

    #[test]
    fn test_valid_genesis_passes() {
        valid().validate(&codec()).unwrap();
        GenesisState::default().validate(&codec()).unwrap();
    }

    #[test]
    fn test_duplicate_account() {
        rejects(|g| g.accounts.push(g.accounts[0].clone()));
    }

    #[test]
    fn test_creator_not_member() {
        rejects(|g| g.accounts[0].creator = addr(9));
    }

    #[test]
    fn test_duplicate_member() {
        rejects(|g| g.accounts[0].members.push(Member::new(addr(1), 1)));
    }

    #[test]
    fn test_threshold_above_total() {
        rejects(|g| g.accounts[0].threshold = 4);
    }

    #[test]
    fn test_duplicate_proposal_id() {
        rejects(|g| g.proposals.push(g.proposals[0].clone()));
    }

    #[test]
    fn test_proposal_unknown_account() {
        rejects(|g| g.proposals[0].account_address = account_addr(2));
    }

    #[test]
    fn test_proposer_not_member() {
        rejects(|g| g.proposals[0].proposer = addr(9));
    }

    #[test]
    fn test_duplicate_vote() {
        rejects(|g| {
            let mut vote = g.votes[0].clone();
            vote.option = VoteOption::No;
            g.votes.push(vote);
        });
    }

    #[test]
    fn test_vote_unknown_account() {
        rejects(|g| g.votes[0].account_address = account_addr(2));
    }

    #[test]
    fn test_vote_unknown_proposal() {
        rejects(|g| g.votes[0].proposal_id = 5);
    }

    #[test]
    fn test_voter_not_member() {
        rejects(|g| g.votes[0].voter = addr(9));
    }

    #[test]
    fn test_stale_proposal_number() {
        rejects(|g| g.next_proposal_number = 4);
    }

    #[test]
    fn test_invalid_params() {
        rejects(|g| g.params.max_proposal_msgs = 0);
    }

    #[test]
    fn test_init_rejects_without_writing() {
        let (keeper, mut store, _) = setup();
        let mut genesis = valid();
        genesis.votes[0].voter = addr(9);
        assert!(keeper.init_genesis(&mut store, &genesis).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_init_then_export_roundtrips() {
        let (keeper, mut store, _) = setup();
        let genesis = valid();
        keeper.init_genesis(&mut store, &genesis).unwrap();
        assert_eq!(keeper.export_genesis(&store).unwrap(), genesis);
        assert_eq!(keeper.proposal_number.peek(&store).unwrap(), 5);
    }

    #[test]
    fn test_json_roundtrip_and_defaults() {
        let genesis = valid();
        let json = genesis.to_json().unwrap();
        assert_eq!(GenesisState::from_json(&json).unwrap(), genesis);

        let empty = GenesisState::from_json("{}").unwrap();
        assert_eq!(empty, GenesisState::default());
        assert!(matches!(
            GenesisState::from_json("{"),
            Err(MultisigError::InvalidGenesis(_))
        ));
    }
}
