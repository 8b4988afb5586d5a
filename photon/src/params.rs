use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Reject every `MintPhoton` while set.
    #[serde(default)]
    pub mint_disabled: bool,
}
