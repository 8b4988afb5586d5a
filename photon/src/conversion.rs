//! Supply-dependent conversion rate.

use atomone_types::Dec;

use crate::error::PhotonError;
use crate::PHOTON_MAX_SUPPLY;

/// Photons minted per burned bond token.
///
/// Zero once photon supply reaches the cap or when nothing is bonded, so a
/// burn at that point mints nothing.
pub fn conversion_rate(bond_supply: u128, photon_supply: u128) -> Result<Dec, PhotonError> {
    let Some(remaining) = PHOTON_MAX_SUPPLY.checked_sub(photon_supply) else {
        return Ok(Dec::ZERO);
    };
    if bond_supply == 0 {
        return Ok(Dec::ZERO);
    }
    Dec::checked_from_ratio(remaining, 1, bond_supply).ok_or(PhotonError::Overflow)
}

/// `burned * rate`, before rounding to whole micro units.
pub fn photons_for(burned: u128, rate: Dec) -> Result<Dec, PhotonError> {
    rate.checked_mul_int(burned).ok_or(PhotonError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomone_types::DEC_ONE;
    use proptest::prelude::*;

    #[test]
    fn test_rate_at_genesis() {
        // 1B photons over 100M atone: 10 photons per atone.
        let rate = conversion_rate(100_000_000_000_000, 0).unwrap();
        assert_eq!(rate, Dec::from_int(10));
    }

    #[test]
    fn test_rate_shrinks_with_photon_supply() {
        let bond = 100_000_000_000_000;
        let early = conversion_rate(bond, 0).unwrap();
        let late = conversion_rate(bond, PHOTON_MAX_SUPPLY / 2).unwrap();
        assert_eq!(late, Dec::from_int(5));
        assert!(late < early);
    }

    #[test]
    fn test_rate_is_zero_at_and_past_cap() {
        assert_eq!(conversion_rate(1_000, PHOTON_MAX_SUPPLY).unwrap(), Dec::ZERO);
        assert_eq!(conversion_rate(1_000, PHOTON_MAX_SUPPLY + 1).unwrap(), Dec::ZERO);
    }

    #[test]
    fn test_rate_is_zero_without_bond_supply() {
        assert_eq!(conversion_rate(0, 0).unwrap(), Dec::ZERO);
    }

    #[test]
    fn test_fractional_rate() {
        let rate = conversion_rate(3 * PHOTON_MAX_SUPPLY, 0).unwrap();
        assert_eq!(rate.raw(), DEC_ONE / 3);
        assert_eq!(photons_for(3, rate).unwrap().round(), 1);
    }

    proptest! {
        #[test]
        fn test_burning_all_bond_supply_never_exceeds_cap(
            bond in 1u128..1_000_000_000_000_000_000,
            photon in 0u128..=PHOTON_MAX_SUPPLY,
        ) {
            let rate = conversion_rate(bond, photon).unwrap();
            let minted = photons_for(bond, rate).unwrap();
            prop_assert!(minted.truncate() + photon <= PHOTON_MAX_SUPPLY);
        }
    }
}
