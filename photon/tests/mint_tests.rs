//! Burn-and-mint scenarios against a nullable bank.

use std::sync::Arc;

use atomone_crypto::{AddressCodec, Base32Codec};
use atomone_multisig::Context;
use atomone_nullables::{NullBank, NullClock, NullStore};
use atomone_photon::events::{ATTRIBUTE_KEY_BURNED, ATTRIBUTE_KEY_MINTED, EVENT_TYPE_MINT_PHOTON};
use atomone_photon::{
    Bank, BankError, Coin, GenesisState, Keeper, MsgMintPhoton, MsgUpdateParams, Params,
    PhotonError, BOND_DENOM, PHOTON_DENOM, PHOTON_MAX_SUPPLY,
};
use atomone_types::{Address, Dec};

fn codec() -> Base32Codec {
    Base32Codec::new("atone")
}

fn user(n: u8) -> Address {
    codec().encode(&[n; 20])
}

fn authority() -> Address {
    user(0xFF)
}

fn keeper() -> Keeper {
    Keeper::new(Arc::new(codec()), authority(), BOND_DENOM).unwrap()
}

fn burn(amount: u128) -> MsgMintPhoton {
    MsgMintPhoton {
        to_address: user(1),
        amount: Coin::new(BOND_DENOM, amount),
    }
}

/// User 1 holds 100 atone, user 2 the other 900: 1 000 atone bonded supply.
fn bank() -> NullBank {
    NullBank::new()
        .with_balance(&user(1), BOND_DENOM, 100_000_000)
        .with_balance(&user(2), BOND_DENOM, 900_000_000)
}

#[test]
fn test_mint_burns_atone_and_credits_photons() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank();
    let mut ctx = Context::new(&mut store, clock.now());

    let resp = keeper
        .mint_photon(&mut ctx, &mut bank, burn(10_000_000))
        .unwrap();

    // 1B photons over 1 000 atone: 1 000 000 photons per atone.
    assert_eq!(resp.conversion_rate, Dec::from_int(1_000_000));
    assert_eq!(resp.minted, Coin::new(PHOTON_DENOM, 10_000_000_000_000));
    assert_eq!(bank.balance(&user(1), BOND_DENOM), 90_000_000);
    assert_eq!(bank.balance(&user(1), PHOTON_DENOM), 10_000_000_000_000);
    assert_eq!(bank.supply(BOND_DENOM), 990_000_000);
    assert_eq!(bank.balance(keeper.module_address(), BOND_DENOM), 0);
    assert_eq!(bank.balance(keeper.module_address(), PHOTON_DENOM), 0);

    let event = &ctx.events()[0];
    assert_eq!(event.kind, EVENT_TYPE_MINT_PHOTON);
    assert_eq!(event.attribute(ATTRIBUTE_KEY_BURNED), Some("10000000uatone"));
    assert_eq!(event.attribute(ATTRIBUTE_KEY_MINTED), Some("10000000000000uphoton"));
}

#[test]
fn test_rate_holds_across_mints_and_drops_with_inflation() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank();
    let mut ctx = Context::new(&mut store, clock.now());

    // Each burn shrinks bond supply as much as it shrinks the unminted photons.
    let first = keeper
        .mint_photon(&mut ctx, &mut bank, burn(50_000_000))
        .unwrap();
    let second = keeper
        .mint_photon(&mut ctx, &mut bank, burn(50_000_000))
        .unwrap();
    assert_eq!(second.conversion_rate, first.conversion_rate);
    assert_eq!(second.minted, first.minted);
    assert_eq!(bank.balance(&user(1), BOND_DENOM), 0);

    let mut bank = bank.with_balance(&user(1), BOND_DENOM, 900_000_000);
    let third = keeper
        .mint_photon(&mut ctx, &mut bank, burn(50_000_000))
        .unwrap();
    assert!(third.conversion_rate < first.conversion_rate);
    assert!(bank.supply(PHOTON_DENOM) <= PHOTON_MAX_SUPPLY);
    let remaining = PHOTON_MAX_SUPPLY - bank.supply(PHOTON_DENOM);
    assert_eq!(
        keeper.query_conversion_rate(&bank).unwrap(),
        Dec::checked_from_ratio(remaining, 1, bank.supply(BOND_DENOM)).unwrap()
    );
}

#[test]
fn test_mint_disabled() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank();
    let mut ctx = Context::new(&mut store, clock.now());
    keeper
        .update_params(
            &mut ctx,
            MsgUpdateParams {
                authority: authority(),
                params: Params {
                    mint_disabled: true,
                },
            },
        )
        .unwrap();

    let err = keeper
        .mint_photon(&mut ctx, &mut bank, burn(1_000))
        .unwrap_err();
    assert!(matches!(err, PhotonError::MintDisabled));
    assert_eq!(bank.balance(&user(1), BOND_DENOM), 100_000_000);
}

#[test]
fn test_only_bond_denom_can_be_burned() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank().with_balance(&user(1), "ufoo", 1_000);
    let mut ctx = Context::new(&mut store, clock.now());

    let msg = MsgMintPhoton {
        to_address: user(1),
        amount: Coin::new("ufoo", 1_000),
    };
    let err = keeper.mint_photon(&mut ctx, &mut bank, msg).unwrap_err();
    assert!(matches!(err, PhotonError::InvalidBurnDenom { ref got, .. } if got == "ufoo"));
    assert_eq!(bank.balance(&user(1), "ufoo"), 1_000);
}

#[test]
fn test_no_mintable_photons_at_cap() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank().with_balance(&user(3), PHOTON_DENOM, PHOTON_MAX_SUPPLY);
    let mut ctx = Context::new(&mut store, clock.now());

    let err = keeper
        .mint_photon(&mut ctx, &mut bank, burn(1_000))
        .unwrap_err();
    assert!(matches!(err, PhotonError::NoMintablePhotons));
    assert_eq!(bank.balance(&user(1), BOND_DENOM), 100_000_000);
    assert!(ctx.events().is_empty());
}

#[test]
fn test_burn_below_one_photon_is_rejected() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    // 1 uatone is worth a third of a uphoton.
    let mut bank = NullBank::new()
        .with_balance(&user(1), BOND_DENOM, 1)
        .with_balance(&user(2), BOND_DENOM, 3 * PHOTON_MAX_SUPPLY - 1);
    let mut ctx = Context::new(&mut store, clock.now());

    let err = keeper.mint_photon(&mut ctx, &mut bank, burn(1)).unwrap_err();
    assert!(matches!(err, PhotonError::NoMintablePhotons));
    assert_eq!(bank.balance(&user(1), BOND_DENOM), 1);
}

#[test]
fn test_not_enough_photons_past_max_supply() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank();
    // Reported supply smaller than the burn: the rate would overshoot the cap.
    bank.set_supply(BOND_DENOM, 10);
    let mut ctx = Context::new(&mut store, clock.now());

    let err = keeper
        .mint_photon(&mut ctx, &mut bank, burn(100))
        .unwrap_err();
    assert!(matches!(
        err,
        PhotonError::NotEnoughPhotons { supply: 0, max: PHOTON_MAX_SUPPLY, .. }
    ));
    assert_eq!(bank.supply(PHOTON_DENOM), 0);
}

#[test]
fn test_insufficient_funds_moves_nothing() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank();
    let mut ctx = Context::new(&mut store, clock.now());

    let err = keeper
        .mint_photon(&mut ctx, &mut bank, burn(100_000_001))
        .unwrap_err();
    assert!(matches!(
        err,
        PhotonError::Bank(BankError::InsufficientFunds { needed: 100_000_001, .. })
    ));
    assert_eq!(bank.supply(BOND_DENOM), 1_000_000_000);
    assert_eq!(bank.supply(PHOTON_DENOM), 0);
}

#[test]
fn test_zero_burn_rejected() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut bank = bank();
    let mut ctx = Context::new(&mut store, clock.now());

    let err = keeper.mint_photon(&mut ctx, &mut bank, burn(0)).unwrap_err();
    assert!(matches!(err, PhotonError::ZeroAmount));
}

#[test]
fn test_update_params_requires_authority() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let clock = NullClock::default();
    let mut ctx = Context::new(&mut store, clock.now());

    let err = keeper
        .update_params(
            &mut ctx,
            MsgUpdateParams {
                authority: user(1),
                params: Params {
                    mint_disabled: true,
                },
            },
        )
        .unwrap_err();
    assert!(matches!(err, PhotonError::Unauthorized { .. }));
    assert!(!keeper.query_params(ctx.store()).unwrap().mint_disabled);
}

#[test]
fn test_genesis_round_trip() {
    let keeper = keeper();
    let mut store = NullStore::new();
    let genesis = GenesisState {
        params: Params {
            mint_disabled: true,
        },
    };
    keeper.init_genesis(&mut store, &genesis).unwrap();
    assert_eq!(keeper.export_genesis(&store).unwrap(), genesis);
}

#[test]
fn test_module_address_is_stable() {
    let a = keeper();
    let b = keeper();
    assert_eq!(a.module_address(), b.module_address());
    assert!(codec().decode(a.module_address()).is_ok());
}
