//! Event kinds and attribute keys emitted by the module.

use atomone_types::Address;

use crate::context::Event;
use crate::proposal::ProposalStatus;
use crate::vote::VoteOption;

pub const EVENT_TYPE_ACCOUNT_CREATION: &str = "account_creation";
pub const EVENT_TYPE_PROPOSAL_CREATION: &str = "proposal_creation";
pub const EVENT_TYPE_PROPOSAL_VOTE: &str = "proposal_vote";
pub const EVENT_TYPE_PROPOSAL_EXECUTION: &str = "proposal_execution";

pub const ATTRIBUTE_KEY_ACCOUNT_ADDRESS: &str = "account_address";
pub const ATTRIBUTE_KEY_PROPOSAL_ID: &str = "proposal_id";
pub const ATTRIBUTE_KEY_VOTER: &str = "voter";
pub const ATTRIBUTE_KEY_OPTION: &str = "option";
pub const ATTRIBUTE_KEY_STATUS: &str = "status";
pub const ATTRIBUTE_KEY_ERROR: &str = "error";

pub(crate) fn account_created(account: &Address) -> Event {
    Event::new(EVENT_TYPE_ACCOUNT_CREATION).with_attribute(ATTRIBUTE_KEY_ACCOUNT_ADDRESS, account)
}

pub(crate) fn proposal_created(account: &Address, id: u64) -> Event {
    Event::new(EVENT_TYPE_PROPOSAL_CREATION)
        .with_attribute(ATTRIBUTE_KEY_ACCOUNT_ADDRESS, account)
        .with_attribute(ATTRIBUTE_KEY_PROPOSAL_ID, id)
}

pub(crate) fn vote_cast(account: &Address, id: u64, voter: &Address, option: VoteOption) -> Event {
    Event::new(EVENT_TYPE_PROPOSAL_VOTE)
        .with_attribute(ATTRIBUTE_KEY_ACCOUNT_ADDRESS, account)
        .with_attribute(ATTRIBUTE_KEY_PROPOSAL_ID, id)
        .with_attribute(ATTRIBUTE_KEY_VOTER, voter)
        .with_attribute(ATTRIBUTE_KEY_OPTION, option)
}

pub(crate) fn proposal_executed(
    account: &Address,
    id: u64,
    status: ProposalStatus,
    error: Option<&str>,
) -> Event {
    let event = Event::new(EVENT_TYPE_PROPOSAL_EXECUTION)
        .with_attribute(ATTRIBUTE_KEY_ACCOUNT_ADDRESS, account)
        .with_attribute(ATTRIBUTE_KEY_PROPOSAL_ID, id)
        .with_attribute(ATTRIBUTE_KEY_STATUS, status);
    match error {
        Some(reason) => event.with_attribute(ATTRIBUTE_KEY_ERROR, reason),
        None => event,
    }
}
