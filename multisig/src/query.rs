//! Read-only queries.
//!
//! Lists come back in store key order: accounts by account bytes, proposals
//! by id, votes by voter bytes.

use atomone_collections::{Order, Triple};
use atomone_store::KvStore;
use atomone_types::Address;

use crate::account::Account;
use crate::error::MultisigError;
use crate::keeper::Keeper;
use crate::params::Params;
use crate::proposal::Proposal;
use crate::vote::Vote;

impl Keeper {
    pub fn query_params(&self, store: &dyn KvStore) -> Result<Params, MultisigError> {
        self.get_params(store)
    }

    pub fn query_account(
        &self,
        store: &dyn KvStore,
        address: &Address,
    ) -> Result<Account, MultisigError> {
        self.get_account(store, address)
    }

    pub fn query_accounts(&self, store: &dyn KvStore) -> Result<Vec<Account>, MultisigError> {
        Ok(self
            .accounts
            .iter(store, Order::Ascending)?
            .into_iter()
            .map(|(_, account)| account)
            .collect())
    }

    pub fn query_proposal(
        &self,
        store: &dyn KvStore,
        account: &Address,
        id: u64,
    ) -> Result<Proposal, MultisigError> {
        self.get_proposal(store, account, id)
    }

    /// Every proposal of `account`, oldest first. An unknown account simply
    /// has none.
    pub fn query_proposals(
        &self,
        store: &dyn KvStore,
        account: &Address,
    ) -> Result<Vec<Proposal>, MultisigError> {
        let account_bytes = self.decode_address(account)?;
        Ok(self
            .proposals
            .iter_prefix(store, &account_bytes, Order::Ascending)?
            .into_iter()
            .map(|(_, proposal)| proposal)
            .collect())
    }

    pub fn query_votes(
        &self,
        store: &dyn KvStore,
        account: &Address,
        id: u64,
    ) -> Result<Vec<Vote>, MultisigError> {
        let account_bytes = self.decode_address(account)?;
        self.proposal_votes(store, &account_bytes, id)
    }

    pub fn query_vote(
        &self,
        store: &dyn KvStore,
        account: &Address,
        id: u64,
        voter: &Address,
    ) -> Result<Vote, MultisigError> {
        let key = Triple::new(self.decode_address(account)?, id, self.decode_address(voter)?);
        self.votes
            .may_get(store, &key)?
            .ok_or_else(|| MultisigError::VoteNotFound {
                account: account.clone(),
                id,
                voter: voter.clone(),
            })
    }
}
