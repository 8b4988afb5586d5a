//! Genesis import and export.

use atomone_store::KvStore;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PhotonError;
use crate::keeper::Keeper;
use crate::params::Params;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub params: Params,
}

impl GenesisState {
    pub fn from_json(json: &str) -> Result<Self, PhotonError> {
        serde_json::from_str(json)
            .map_err(|e| PhotonError::InvalidGenesis(format!("malformed json: {e}")))
    }

    pub fn to_json(&self) -> Result<String, PhotonError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PhotonError::InvalidGenesis(format!("cannot encode json: {e}")))
    }
}

impl Keeper {
    pub fn init_genesis(
        &self,
        store: &mut dyn KvStore,
        genesis: &GenesisState,
    ) -> Result<(), PhotonError> {
        self.params.set(store, &genesis.params)?;
        info!(mint_disabled = genesis.params.mint_disabled, "photon genesis loaded");
        Ok(())
    }

    pub fn export_genesis(&self, store: &dyn KvStore) -> Result<GenesisState, PhotonError> {
        Ok(GenesisState {
            params: self.get_params(store)?,
        })
    }
}
