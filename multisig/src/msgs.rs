//! Module messages and the opaque sub-message envelope.

use atomone_crypto::AddressCodec;
use atomone_types::Address;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::account::Member;
use crate::error::MultisigError;
use crate::params::Params;
use crate::proposal::ProposalStatus;
use crate::router::RouterError;
use crate::vote::VoteOption;

/// A message tagged with its type, as stored in proposals and passed to the
/// router.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnyMsg {
    pub type_url: String,
    pub value: Vec<u8>,
}

impl AnyMsg {
    pub fn pack<M: Msg>(msg: &M) -> Result<Self, RouterError> {
        let value = bincode::serialize(msg).map_err(|e| RouterError::Encode {
            type_url: M::TYPE_URL.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            type_url: M::TYPE_URL.to_string(),
            value,
        })
    }

    pub fn unpack<M: Msg>(&self) -> Result<M, RouterError> {
        if self.type_url != M::TYPE_URL {
            return Err(RouterError::Decode {
                type_url: self.type_url.clone(),
                reason: format!("expected {}", M::TYPE_URL),
            });
        }
        bincode::deserialize(&self.value).map_err(|e| RouterError::Decode {
            type_url: self.type_url.clone(),
            reason: e.to_string(),
        })
    }

    pub fn is<M: Msg>(&self) -> bool {
        self.type_url == M::TYPE_URL
    }
}

/// A typed message. Responses use the default, empty signer list.
pub trait Msg: Serialize + DeserializeOwned {
    const TYPE_URL: &'static str;

    fn signers(&self) -> Vec<Address> {
        Vec::new()
    }
}

fn decode(codec: &dyn AddressCodec, address: &Address) -> Result<Vec<u8>, MultisigError> {
    codec
        .decode(address)
        .map_err(|source| MultisigError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

// ── Create account ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateAccount {
    pub sender: Address,
    pub members: Vec<Member>,
    pub threshold: u64,
}

impl MsgCreateAccount {
    /// Checks that need no state.
    pub fn validate_basic(&self, codec: &dyn AddressCodec) -> Result<(), MultisigError> {
        decode(codec, &self.sender)?;
        if self.members.is_empty() {
            return Err(MultisigError::MissingMembers);
        }
        if self.threshold == 0 {
            return Err(MultisigError::ZeroThreshold);
        }
        for (i, member) in self.members.iter().enumerate() {
            if self.members[..i].iter().any(|m| m.address == member.address) {
                return Err(MultisigError::DuplicateMember(member.address.clone()));
            }
            if member.weight == 0 {
                return Err(MultisigError::ZeroMemberWeight(member.address.clone()));
            }
            decode(codec, &member.address)?;
        }
        if !self.members.iter().any(|m| m.address == self.sender) {
            return Err(MultisigError::CreatorNotAMember(self.sender.clone()));
        }
        Ok(())
    }
}

impl Msg for MsgCreateAccount {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgCreateAccount";

    fn signers(&self) -> Vec<Address> {
        vec![self.sender.clone()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateAccountResponse {
    pub address: Address,
}

impl Msg for MsgCreateAccountResponse {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgCreateAccountResponse";
}

// ── Create proposal ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateProposal {
    pub sender: Address,
    pub account_address: Address,
    pub title: String,
    pub summary: String,
    pub messages: Vec<AnyMsg>,
}

impl MsgCreateProposal {
    pub fn validate_basic(&self, codec: &dyn AddressCodec) -> Result<(), MultisigError> {
        decode(codec, &self.sender)?;
        decode(codec, &self.account_address)?;
        if self.title.is_empty() {
            return Err(MultisigError::EmptyTitle);
        }
        if self.summary.is_empty() {
            return Err(MultisigError::EmptySummary);
        }
        if self.messages.is_empty() {
            return Err(MultisigError::EmptyMessages);
        }
        Ok(())
    }
}

impl Msg for MsgCreateProposal {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgCreateProposal";

    fn signers(&self) -> Vec<Address> {
        vec![self.sender.clone()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateProposalResponse {
    pub proposal_id: u64,
}

impl Msg for MsgCreateProposalResponse {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgCreateProposalResponse";
}

// ── Vote ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgVote {
    pub voter: Address,
    pub account_address: Address,
    pub proposal_id: u64,
    pub option: VoteOption,
}

impl MsgVote {
    pub fn validate_basic(&self, codec: &dyn AddressCodec) -> Result<(), MultisigError> {
        decode(codec, &self.voter)?;
        decode(codec, &self.account_address)?;
        if self.option == VoteOption::Unspecified {
            return Err(MultisigError::InvalidVoteOption);
        }
        Ok(())
    }
}

impl Msg for MsgVote {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgVote";

    fn signers(&self) -> Vec<Address> {
        vec![self.voter.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgVoteResponse {}

impl Msg for MsgVoteResponse {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgVoteResponse";
}

// ── Execute proposal ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgExecuteProposal {
    pub executor: Address,
    pub account_address: Address,
    pub proposal_id: u64,
}

impl MsgExecuteProposal {
    pub fn validate_basic(&self, codec: &dyn AddressCodec) -> Result<(), MultisigError> {
        decode(codec, &self.executor)?;
        decode(codec, &self.account_address)?;
        Ok(())
    }
}

impl Msg for MsgExecuteProposal {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgExecuteProposal";

    fn signers(&self) -> Vec<Address> {
        vec![self.executor.clone()]
    }
}

/// Returned whenever the threshold was met, whatever the execution outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgExecuteProposalResponse {
    pub status: ProposalStatus,
    /// Sub-message responses, in order, when every message succeeded.
    pub responses: Vec<AnyMsg>,
    /// Failure description when a message failed.
    pub error: Option<String>,
}

impl Msg for MsgExecuteProposalResponse {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgExecuteProposalResponse";
}

// ── Update params ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParams {
    pub authority: Address,
    pub params: Params,
}

impl MsgUpdateParams {
    pub fn validate_basic(&self, codec: &dyn AddressCodec) -> Result<(), MultisigError> {
        decode(codec, &self.authority)?;
        self.params.validate()
    }
}

impl Msg for MsgUpdateParams {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgUpdateParams";

    fn signers(&self) -> Vec<Address> {
        vec![self.authority.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParamsResponse {}

impl Msg for MsgUpdateParamsResponse {
    const TYPE_URL: &'static str = "/atomone.multisig.v1.MsgUpdateParamsResponse";
}
