//! Keeper: params collection and module identity.

use std::sync::Arc;

use atomone_collections::{Item, Schema, SchemaBuilder};
use atomone_crypto::{sha256, AddressCodec};
use atomone_store::KvStore;
use atomone_types::Address;

use crate::error::PhotonError;
use crate::keys;
use crate::params::Params;
use crate::MODULE_NAME;

pub struct Keeper {
    codec: Arc<dyn AddressCodec>,
    authority: Address,
    bond_denom: String,
    module_address: Address,

    schema: Schema,
    pub params: Item<Params>,
}

impl Keeper {
    pub fn new(
        codec: Arc<dyn AddressCodec>,
        authority: Address,
        bond_denom: impl Into<String>,
    ) -> Result<Self, PhotonError> {
        let mut sb = SchemaBuilder::new();
        let params = Item::new(&mut sb, keys::PARAMS, "params");
        let schema = sb.build()?;
        let module_address = codec.encode(&sha256(MODULE_NAME.as_bytes())[..20]);

        Ok(Self {
            codec,
            authority,
            bond_denom: bond_denom.into(),
            module_address,
            schema,
            params,
        })
    }

    pub fn authority(&self) -> &Address {
        &self.authority
    }

    pub fn codec(&self) -> &dyn AddressCodec {
        self.codec.as_ref()
    }

    pub fn bond_denom(&self) -> &str {
        &self.bond_denom
    }

    /// Account the burned and minted coins pass through.
    pub fn module_address(&self) -> &Address {
        &self.module_address
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Stored params, or the defaults before any were set.
    pub fn get_params(&self, store: &dyn KvStore) -> Result<Params, PhotonError> {
        Ok(self.params.may_get(store)?.unwrap_or_default())
    }
}
