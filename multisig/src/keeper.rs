//! Keeper: collections, capabilities and shared lookups.

use std::sync::Arc;

use atomone_collections::{Item, Map, Order, Pair, Schema, SchemaBuilder, Sequence, Triple};
use atomone_crypto::{AddressCodec, Base32Codec};
use atomone_store::KvStore;
use atomone_types::Address;

use crate::account::Account;
use crate::config::MultisigConfig;
use crate::error::MultisigError;
use crate::keys;
use crate::params::Params;
use crate::proposal::Proposal;
use crate::router::Router;
use crate::vote::{Vote, VoteOption};

pub struct Keeper {
    router: Arc<dyn Router>,
    codec: Arc<dyn AddressCodec>,
    authority: Address,

    schema: Schema,
    pub params: Item<Params>,
    /// account bytes -> account
    pub accounts: Map<Vec<u8>, Account>,
    pub account_number: Sequence,
    /// (account bytes, proposal id) -> proposal
    pub proposals: Map<Pair<Vec<u8>, u64>, Proposal>,
    pub proposal_number: Sequence,
    /// (account bytes, proposal id, voter bytes) -> vote
    pub votes: Map<Triple<Vec<u8>, u64, Vec<u8>>, Vote>,
}

impl Keeper {
    pub fn new(
        router: Arc<dyn Router>,
        codec: Arc<dyn AddressCodec>,
        authority: Address,
    ) -> Result<Self, MultisigError> {
        let mut sb = SchemaBuilder::new();
        let params = Item::new(&mut sb, keys::PARAMS, "params");
        let accounts = Map::new(&mut sb, keys::ACCOUNTS, "accounts");
        let account_number = Sequence::new(&mut sb, keys::ACCOUNT_NUMBER, "account_number");
        let proposals = Map::new(&mut sb, keys::PROPOSALS, "proposals");
        let proposal_number = Sequence::new(&mut sb, keys::PROPOSAL_NUMBER, "proposal_number");
        let votes = Map::new(&mut sb, keys::VOTES, "votes");
        let schema = sb.build()?;

        Ok(Self {
            router,
            codec,
            authority,
            schema,
            params,
            accounts,
            account_number,
            proposals,
            proposal_number,
            votes,
        })
    }

    /// Build a keeper with a [`Base32Codec`] for the configured prefix.
    pub fn from_config(
        config: &MultisigConfig,
        router: Arc<dyn Router>,
    ) -> Result<Self, MultisigError> {
        let codec = Base32Codec::new(config.address_prefix.clone());
        let authority = config.authority.clone();
        codec.decode(&authority).map_err(|e| {
            MultisigError::Config(format!("authority {authority:?} is not a valid address: {e}"))
        })?;
        Self::new(router, Arc::new(codec), authority)
    }

    pub fn authority(&self) -> &Address {
        &self.authority
    }

    pub fn codec(&self) -> &dyn AddressCodec {
        self.codec.as_ref()
    }

    pub fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn decode_address(&self, address: &Address) -> Result<Vec<u8>, MultisigError> {
        self.codec
            .decode(address)
            .map_err(|source| MultisigError::InvalidAddress {
                address: address.to_string(),
                source,
            })
    }

    /// Stored params, or the defaults before any were set.
    pub fn get_params(&self, store: &dyn KvStore) -> Result<Params, MultisigError> {
        Ok(self.params.may_get(store)?.unwrap_or_default())
    }

    pub fn get_account(
        &self,
        store: &dyn KvStore,
        address: &Address,
    ) -> Result<Account, MultisigError> {
        let key = self.decode_address(address)?;
        self.accounts
            .may_get(store, &key)?
            .ok_or_else(|| MultisigError::AccountNotFound(address.clone()))
    }

    pub fn get_proposal(
        &self,
        store: &dyn KvStore,
        account: &Address,
        id: u64,
    ) -> Result<Proposal, MultisigError> {
        let key = Pair::new(self.decode_address(account)?, id);
        self.proposals
            .may_get(store, &key)?
            .ok_or_else(|| MultisigError::ProposalNotFound {
                account: account.clone(),
                id,
            })
    }

    pub(crate) fn set_proposal(
        &self,
        store: &mut dyn KvStore,
        account_bytes: &[u8],
        proposal: &Proposal,
    ) -> Result<(), MultisigError> {
        let key = Pair::new(account_bytes.to_vec(), proposal.id);
        self.proposals.set(store, &key, proposal)?;
        Ok(())
    }

    /// Every recorded vote of a proposal, ordered by voter bytes.
    pub fn proposal_votes(
        &self,
        store: &dyn KvStore,
        account_bytes: &[u8],
        id: u64,
    ) -> Result<Vec<Vote>, MultisigError> {
        Ok(self
            .votes
            .iter_super_prefix(store, &account_bytes.to_vec(), &id, Order::Ascending)?
            .into_iter()
            .map(|(_, vote)| vote)
            .collect())
    }

    /// Sum of the current member weights of every `Yes` voter.
    ///
    /// A recorded voter that is no longer a member means the store is
    /// inconsistent and is reported as an invariant violation.
    pub fn tally_yes_weight(
        &self,
        store: &dyn KvStore,
        account: &Account,
        id: u64,
    ) -> Result<u64, MultisigError> {
        let account_bytes = self.decode_address(&account.address)?;
        let mut yes: u64 = 0;
        for vote in self.proposal_votes(store, &account_bytes, id)? {
            let weight = account.member_weight(&vote.voter).ok_or_else(|| {
                MultisigError::InvariantViolation(format!(
                    "voter {} of proposal {id} is not a member of {}",
                    vote.voter, account.address
                ))
            })?;
            if vote.option == VoteOption::Yes {
                yes = yes
                    .checked_add(weight)
                    .ok_or(MultisigError::WeightsOverflow)?;
            }
        }
        Ok(yes)
    }

    pub(crate) fn delete_votes(
        &self,
        store: &mut dyn KvStore,
        account_bytes: &[u8],
        id: u64,
    ) -> Result<usize, MultisigError> {
        let keys: Vec<_> = self
            .votes
            .iter_super_prefix(&*store, &account_bytes.to_vec(), &id, Order::Ascending)?
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        for key in &keys {
            self.votes.remove(store, key)?;
        }
        Ok(keys.len())
    }
}
