//! Host fixture: a keeper wired to a coin ledger that proposals can spend from.

#![allow(dead_code)]

use std::sync::Arc;

use atomone_collections::{Map, SchemaBuilder};
use atomone_crypto::{AddressCodec, Base32Codec};
use atomone_multisig::{
    AnyMsg, Context, Event, Keeper, Msg, MsgCreateAccount, MsgCreateProposal, MsgExecuteProposal,
    MsgExecuteProposalResponse, MsgRouter, MsgVote, MultisigError, RouterError, VoteOption,
    Member,
};
use atomone_nullables::{NullClock, NullStore};
use atomone_types::Address;
use serde::{Deserialize, Serialize};

pub fn codec() -> Base32Codec {
    Base32Codec::new("atone")
}

pub fn user(n: u8) -> Address {
    codec().encode(&[n; 20])
}

pub fn governance() -> Address {
    user(0xFF)
}

fn coins() -> Map<String, u64> {
    Map::new(&mut SchemaBuilder::new(), "coins", "coins")
}

pub fn mint(store: &mut NullStore, to: &Address, amount: u64) {
    coins().set(store, &to.to_string(), &amount).unwrap();
}

pub fn coins_of(store: &NullStore, who: &Address) -> u64 {
    coins().may_get(store, &who.to_string()).unwrap().unwrap_or(0)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MsgTransfer {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
}

impl Msg for MsgTransfer {
    const TYPE_URL: &'static str = "/host.coins.MsgTransfer";

    fn signers(&self) -> Vec<Address> {
        vec![self.from.clone()]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MsgTransferResponse {
    pub remaining: u64,
}

impl Msg for MsgTransferResponse {
    const TYPE_URL: &'static str = "/host.coins.MsgTransferResponse";
}

fn transfer(ctx: &mut Context<'_>, msg: MsgTransfer) -> Result<MsgTransferResponse, RouterError> {
    let coins = coins();
    let from = coins
        .may_get(ctx.store(), &msg.from.to_string())
        .map_err(RouterError::handler)?
        .unwrap_or(0);
    let remaining = from
        .checked_sub(msg.amount)
        .ok_or_else(|| RouterError::Handler(format!("{} has only {from}", msg.from)))?;
    let to = coins
        .may_get(ctx.store(), &msg.to.to_string())
        .map_err(RouterError::handler)?
        .unwrap_or(0);
    coins
        .set(ctx.store_mut(), &msg.from.to_string(), &remaining)
        .map_err(RouterError::handler)?;
    coins
        .set(ctx.store_mut(), &msg.to.to_string(), &(to + msg.amount))
        .map_err(RouterError::handler)?;
    ctx.emit(Event::new("coin_transfer").with_attribute("amount", msg.amount));
    Ok(MsgTransferResponse { remaining })
}

pub fn pay(from: &Address, to: &Address, amount: u64) -> AnyMsg {
    AnyMsg::pack(&MsgTransfer {
        from: from.clone(),
        to: to.clone(),
        amount,
    })
    .unwrap()
}

pub struct Host {
    pub keeper: Keeper,
    pub store: NullStore,
    pub clock: NullClock,
}

impl Host {
    pub fn new() -> Self {
        let mut router = MsgRouter::new();
        router.register(transfer).unwrap();
        let keeper = Keeper::new(Arc::new(router), Arc::new(codec()), governance()).unwrap();
        Self {
            keeper,
            store: NullStore::new(),
            clock: NullClock::default(),
        }
    }

    pub fn create_account(
        &mut self,
        creator: u8,
        members: &[(u8, u64)],
        threshold: u64,
    ) -> Result<Address, MultisigError> {
        let mut ctx = Context::new(&mut self.store, self.clock.now());
        Ok(self
            .keeper
            .create_account(
                &mut ctx,
                MsgCreateAccount {
                    sender: user(creator),
                    members: members.iter().map(|&(n, w)| Member::new(user(n), w)).collect(),
                    threshold,
                },
            )?
            .address)
    }

    pub fn propose(
        &mut self,
        proposer: u8,
        account: &Address,
        messages: Vec<AnyMsg>,
    ) -> Result<u64, MultisigError> {
        let mut ctx = Context::new(&mut self.store, self.clock.now());
        Ok(self
            .keeper
            .create_proposal(
                &mut ctx,
                MsgCreateProposal {
                    sender: user(proposer),
                    account_address: account.clone(),
                    title: "spend".to_string(),
                    summary: "spend from the treasury".to_string(),
                    messages,
                },
            )?
            .proposal_id)
    }

    pub fn vote(
        &mut self,
        voter: u8,
        account: &Address,
        id: u64,
        option: VoteOption,
    ) -> Result<(), MultisigError> {
        let mut ctx = Context::new(&mut self.store, self.clock.now());
        self.keeper.vote(
            &mut ctx,
            MsgVote {
                voter: user(voter),
                account_address: account.clone(),
                proposal_id: id,
                option,
            },
        )?;
        Ok(())
    }

    /// Execute and return the response together with the emitted events.
    pub fn execute(
        &mut self,
        executor: u8,
        account: &Address,
        id: u64,
    ) -> Result<(MsgExecuteProposalResponse, Vec<Event>), MultisigError> {
        let mut ctx = Context::new(&mut self.store, self.clock.now());
        let response = self.keeper.execute_proposal(
            &mut ctx,
            MsgExecuteProposal {
                executor: user(executor),
                account_address: account.clone(),
                proposal_id: id,
            },
        )?;
        Ok((response, ctx.into_events()))
    }
}
