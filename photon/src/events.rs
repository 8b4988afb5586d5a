//! Event kinds and attribute keys emitted by the module.

use atomone_multisig::Event;

use crate::bank::Coin;

pub const EVENT_TYPE_MINT_PHOTON: &str = "mint_photon";

pub const ATTRIBUTE_KEY_BURNED: &str = "burned";
pub const ATTRIBUTE_KEY_MINTED: &str = "minted";

pub(crate) fn photon_minted(burned: &Coin, minted: &Coin) -> Event {
    Event::new(EVENT_TYPE_MINT_PHOTON)
        .with_attribute(ATTRIBUTE_KEY_BURNED, burned)
        .with_attribute(ATTRIBUTE_KEY_MINTED, minted)
}
