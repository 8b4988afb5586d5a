//! Module messages.

use atomone_crypto::AddressCodec;
use atomone_multisig::Msg;
use atomone_types::{Address, Dec};
use serde::{Deserialize, Serialize};

use crate::bank::Coin;
use crate::error::PhotonError;
use crate::params::Params;

fn decode(codec: &dyn AddressCodec, address: &Address) -> Result<Vec<u8>, PhotonError> {
    codec
        .decode(address)
        .map_err(|e| PhotonError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Burn `amount` of the bond denom held by `to_address` and mint photons back
/// to the same address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMintPhoton {
    pub to_address: Address,
    pub amount: Coin,
}

impl MsgMintPhoton {
    pub fn validate_basic(&self, codec: &dyn AddressCodec) -> Result<(), PhotonError> {
        decode(codec, &self.to_address)?;
        if self.amount.amount == 0 {
            return Err(PhotonError::ZeroAmount);
        }
        Ok(())
    }
}

impl Msg for MsgMintPhoton {
    const TYPE_URL: &'static str = "/atomone.photon.v1.MsgMintPhoton";

    fn signers(&self) -> Vec<Address> {
        vec![self.to_address.clone()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMintPhotonResponse {
    pub minted: Coin,
    pub conversion_rate: Dec,
}

impl Msg for MsgMintPhotonResponse {
    const TYPE_URL: &'static str = "/atomone.photon.v1.MsgMintPhotonResponse";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParams {
    pub authority: Address,
    pub params: Params,
}

impl Msg for MsgUpdateParams {
    const TYPE_URL: &'static str = "/atomone.photon.v1.MsgUpdateParams";

    fn signers(&self) -> Vec<Address> {
        vec![self.authority.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParamsResponse {}

impl Msg for MsgUpdateParamsResponse {
    const TYPE_URL: &'static str = "/atomone.photon.v1.MsgUpdateParamsResponse";
}
