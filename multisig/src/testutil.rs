//! Shared fixtures for unit tests: a keeper wired to a toy bank router.

use std::sync::Arc;

use atomone_collections::{Map, SchemaBuilder};
use atomone_crypto::{AddressCodec, Base32Codec};
use atomone_nullables::{NullClock, NullStore};
use atomone_types::Address;
use serde::{Deserialize, Serialize};

use crate::account::Member;
use crate::context::{Context, Event};
use crate::error::MultisigError;
use crate::keeper::Keeper;
use crate::msgs::{
    AnyMsg, Msg, MsgCreateAccount, MsgCreateProposal, MsgExecuteProposal,
    MsgExecuteProposalResponse, MsgVote, MsgVoteResponse,
};
use crate::router::{MsgRouter, RouterError};
use crate::vote::VoteOption;

pub const PREFIX: &str = "atone";

pub fn codec() -> Base32Codec {
    Base32Codec::new(PREFIX)
}

/// A 20-byte user address filled with `n`.
pub fn addr(n: u8) -> Address {
    codec().encode(&[n; 20])
}

pub fn authority() -> Address {
    addr(200)
}

fn bank() -> Map<String, u64> {
    Map::new(&mut SchemaBuilder::new(), 0x20u8, "balances")
}

pub fn fund(store: &mut NullStore, who: &Address, amount: u64) {
    bank().set(store, &who.to_string(), &amount).unwrap();
}

pub fn balance(store: &NullStore, who: &Address) -> u64 {
    bank().may_get(store, &who.to_string()).unwrap().unwrap_or(0)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MsgSend {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
}

impl Msg for MsgSend {
    const TYPE_URL: &'static str = "/test.bank.MsgSend";

    fn signers(&self) -> Vec<Address> {
        vec![self.from.clone()]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MsgSendResponse {}

impl Msg for MsgSendResponse {
    const TYPE_URL: &'static str = "/test.bank.MsgSendResponse";
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MsgAlwaysFail {
    pub signer: Address,
}

impl Msg for MsgAlwaysFail {
    const TYPE_URL: &'static str = "/test.MsgAlwaysFail";

    fn signers(&self) -> Vec<Address> {
        vec![self.signer.clone()]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MsgPanic {
    pub signer: Address,
}

impl Msg for MsgPanic {
    const TYPE_URL: &'static str = "/test.MsgPanic";

    fn signers(&self) -> Vec<Address> {
        vec![self.signer.clone()]
    }
}

fn handle_send(ctx: &mut Context<'_>, msg: MsgSend) -> Result<MsgSendResponse, RouterError> {
    let bank = bank();
    let (from, to) = (msg.from.to_string(), msg.to.to_string());
    let from_balance = bank
        .may_get(ctx.store(), &from)
        .map_err(RouterError::handler)?
        .unwrap_or(0);
    let remaining = from_balance.checked_sub(msg.amount).ok_or_else(|| {
        RouterError::Handler(format!("insufficient funds: {from_balance} < {}", msg.amount))
    })?;
    bank.set(ctx.store_mut(), &from, &remaining)
        .map_err(RouterError::handler)?;
    let to_balance = bank
        .may_get(ctx.store(), &to)
        .map_err(RouterError::handler)?
        .unwrap_or(0);
    bank.set(ctx.store_mut(), &to, &(to_balance + msg.amount))
        .map_err(RouterError::handler)?;
    ctx.emit(
        Event::new("transfer")
            .with_attribute("sender", &msg.from)
            .with_attribute("recipient", &msg.to)
            .with_attribute("amount", msg.amount),
    );
    Ok(MsgSendResponse {})
}

pub fn router() -> MsgRouter {
    let mut router = MsgRouter::new();
    router.register(handle_send).unwrap();
    router
        .register(|_: &mut Context<'_>, _: MsgAlwaysFail| -> Result<MsgSendResponse, RouterError> {
            Err(RouterError::Handler("always fails".to_string()))
        })
        .unwrap();
    router
        .register(|_: &mut Context<'_>, _: MsgPanic| -> Result<MsgSendResponse, RouterError> {
            panic!("handler exploded")
        })
        .unwrap();
    router
}

pub fn setup() -> (Keeper, NullStore, NullClock) {
    let keeper = Keeper::new(Arc::new(router()), Arc::new(codec()), authority()).unwrap();
    (keeper, NullStore::new(), NullClock::default())
}

pub fn send(from: &Address, to: &Address, amount: u64) -> AnyMsg {
    AnyMsg::pack(&MsgSend {
        from: from.clone(),
        to: to.clone(),
        amount,
    })
    .unwrap()
}

/// Create an account from `(member seed, weight)` pairs; the first member
/// is the creator.
pub fn create_account(
    keeper: &Keeper,
    store: &mut NullStore,
    members: &[(u8, u64)],
    threshold: u64,
) -> Address {
    let mut ctx = Context::new(store, NullClock::default().now());
    keeper
        .create_account(
            &mut ctx,
            MsgCreateAccount {
                sender: addr(members[0].0),
                members: members.iter().map(|&(n, w)| Member::new(addr(n), w)).collect(),
                threshold,
            },
        )
        .unwrap()
        .address
}

pub fn proposal_msg(
    sender: &Address,
    account: &Address,
    messages: Vec<AnyMsg>,
) -> MsgCreateProposal {
    MsgCreateProposal {
        sender: sender.clone(),
        account_address: account.clone(),
        title: "pay".to_string(),
        summary: "pay the contributor".to_string(),
        messages,
    }
}

pub fn create_proposal(
    keeper: &Keeper,
    store: &mut NullStore,
    clock: &NullClock,
    sender: &Address,
    account: &Address,
    messages: Vec<AnyMsg>,
) -> u64 {
    let mut ctx = Context::new(store, clock.now());
    keeper
        .create_proposal(&mut ctx, proposal_msg(sender, account, messages))
        .unwrap()
        .proposal_id
}

pub fn cast(
    keeper: &Keeper,
    store: &mut NullStore,
    clock: &NullClock,
    account: &Address,
    id: u64,
    voter: u8,
    option: VoteOption,
) -> Result<MsgVoteResponse, MultisigError> {
    let mut ctx = Context::new(store, clock.now());
    keeper.vote(
        &mut ctx,
        MsgVote {
            voter: addr(voter),
            account_address: account.clone(),
            proposal_id: id,
            option,
        },
    )
}

pub fn execute(
    keeper: &Keeper,
    store: &mut NullStore,
    clock: &NullClock,
    account: &Address,
    id: u64,
    executor: u8,
) -> Result<MsgExecuteProposalResponse, MultisigError> {
    let mut ctx = Context::new(store, clock.now());
    keeper.execute_proposal(
        &mut ctx,
        MsgExecuteProposal {
            executor: addr(executor),
            account_address: account.clone(),
            proposal_id: id,
        },
    )
}
