//! Message handlers.

use atomone_multisig::Context;
use atomone_types::Dec;
use tracing::{debug, info};

use crate::bank::{Bank, Coin};
use crate::conversion::{conversion_rate, photons_for};
use crate::error::PhotonError;
use crate::events;
use crate::keeper::Keeper;
use crate::msgs::{MsgMintPhoton, MsgMintPhotonResponse, MsgUpdateParams, MsgUpdateParamsResponse};
use crate::{PHOTON_DENOM, PHOTON_MAX_SUPPLY};

impl Keeper {
    /// Burn bond tokens from `msg.to_address` and mint photons back to it.
    ///
    /// The rate is read from current supply before anything moves. Nothing
    /// is burned when the burn would mint zero photons or push photon supply
    /// past [`PHOTON_MAX_SUPPLY`].
    pub fn mint_photon(
        &self,
        ctx: &mut Context<'_>,
        bank: &mut dyn Bank,
        msg: MsgMintPhoton,
    ) -> Result<MsgMintPhotonResponse, PhotonError> {
        msg.validate_basic(self.codec())?;
        if self.get_params(ctx.store())?.mint_disabled {
            return Err(PhotonError::MintDisabled);
        }
        if msg.amount.denom != self.bond_denom() {
            return Err(PhotonError::InvalidBurnDenom {
                expected: self.bond_denom().to_string(),
                got: msg.amount.denom,
            });
        }

        let bond_supply = bank.supply(self.bond_denom());
        let photon_supply = bank.supply(PHOTON_DENOM);
        let rate = conversion_rate(bond_supply, photon_supply)?;
        let to_mint = photons_for(msg.amount.amount, rate)?;
        debug!(%bond_supply, %photon_supply, %rate, %to_mint, "photon conversion");
        if to_mint.is_zero() {
            return Err(PhotonError::NoMintablePhotons);
        }
        let supply_after = Dec::checked_from_int(photon_supply)
            .and_then(|supply| supply.checked_add(to_mint))
            .ok_or(PhotonError::Overflow)?;
        let cap = Dec::checked_from_int(PHOTON_MAX_SUPPLY).ok_or(PhotonError::Overflow)?;
        if supply_after > cap {
            return Err(PhotonError::NotEnoughPhotons {
                supply: photon_supply,
                minted: to_mint.to_string(),
                max: PHOTON_MAX_SUPPLY,
            });
        }
        // Sub-unit remainders round to whole micro photons.
        let minted = to_mint.round();
        if minted == 0 {
            return Err(PhotonError::NoMintablePhotons);
        }

        let burned = msg.amount;
        let minted = Coin::new(PHOTON_DENOM, minted);
        let module = self.module_address();
        bank.send(&msg.to_address, module, &burned)?;
        bank.burn(module, &burned)?;
        bank.mint(module, &minted)?;
        bank.send(module, &msg.to_address, &minted)?;

        ctx.emit(events::photon_minted(&burned, &minted));
        info!(to = %msg.to_address, %burned, %minted, %rate, "photons minted");
        Ok(MsgMintPhotonResponse {
            minted,
            conversion_rate: rate,
        })
    }

    pub fn update_params(
        &self,
        ctx: &mut Context<'_>,
        msg: MsgUpdateParams,
    ) -> Result<MsgUpdateParamsResponse, PhotonError> {
        if &msg.authority != self.authority() {
            return Err(PhotonError::Unauthorized {
                expected: self.authority().clone(),
                got: msg.authority,
            });
        }
        self.params.set(ctx.store_mut(), &msg.params)?;
        info!(params = ?msg.params, "photon params updated");
        Ok(MsgUpdateParamsResponse {})
    }
}
