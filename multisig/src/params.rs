//! Module parameters.

use serde::{Deserialize, Serialize};

use crate::error::MultisigError;

/// What happens to a proposal's votes once it has passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteRetention {
    /// Delete every vote of the proposal when it passes.
    #[default]
    DeleteOnPass,
    /// Keep votes as an audit trail.
    Retain,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default)]
    pub vote_retention: VoteRetention,
    #[serde(default = "default_max_title_len")]
    pub max_title_len: u64,
    #[serde(default = "default_max_summary_len")]
    pub max_summary_len: u64,
    #[serde(default = "default_max_proposal_msgs")]
    pub max_proposal_msgs: u64,
}

fn default_max_title_len() -> u64 {
    255
}

fn default_max_summary_len() -> u64 {
    10_000
}

fn default_max_proposal_msgs() -> u64 {
    32
}

impl Default for Params {
    fn default() -> Self {
        Self {
            vote_retention: VoteRetention::default(),
            max_title_len: default_max_title_len(),
            max_summary_len: default_max_summary_len(),
            max_proposal_msgs: default_max_proposal_msgs(),
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), MultisigError> {
        if self.max_title_len == 0 {
            return Err(MultisigError::InvalidParams("max_title_len must be positive".into()));
        }
        if self.max_summary_len == 0 {
            return Err(MultisigError::InvalidParams("max_summary_len must be positive".into()));
        }
        if self.max_proposal_msgs == 0 {
            return Err(MultisigError::InvalidParams(
                "max_proposal_msgs must be positive".into(),
            ));
        }
        Ok(())
    }
}
