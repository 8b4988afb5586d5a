//! Nullable bank: in-memory balances with derived supply.

use std::collections::BTreeMap;

use atomone_photon::{Bank, BankError, Coin};
use atomone_types::Address;

/// In-memory [`Bank`].
///
/// Supply of a denom is the sum of its balances unless overridden with
/// [`NullBank::set_supply`].
#[derive(Clone, Debug, Default)]
pub struct NullBank {
    balances: BTreeMap<(Address, String), u128>,
    supply_override: BTreeMap<String, u128>,
}

impl NullBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `holder` out of thin air, growing supply.
    pub fn with_balance(mut self, holder: &Address, denom: &str, amount: u128) -> Self {
        *self
            .balances
            .entry((holder.clone(), denom.to_string()))
            .or_default() += amount;
        self
    }

    pub fn set_supply(&mut self, denom: &str, supply: u128) {
        self.supply_override.insert(denom.to_string(), supply);
    }

    fn debit(&mut self, holder: &Address, coin: &Coin) -> Result<(), BankError> {
        let key = (holder.clone(), coin.denom.clone());
        let available = self.balances.get(&key).copied().unwrap_or(0);
        let Some(remaining) = available.checked_sub(coin.amount) else {
            return Err(BankError::InsufficientFunds {
                holder: holder.clone(),
                denom: coin.denom.clone(),
                needed: coin.amount,
                available,
            });
        };
        self.balances.insert(key, remaining);
        Ok(())
    }

    fn credit(&mut self, holder: &Address, coin: &Coin) -> Result<(), BankError> {
        let balance = self
            .balances
            .entry((holder.clone(), coin.denom.clone()))
            .or_default();
        *balance = balance
            .checked_add(coin.amount)
            .ok_or_else(|| BankError::SupplyOverflow(coin.denom.clone()))?;
        Ok(())
    }
}

impl Bank for NullBank {
    fn supply(&self, denom: &str) -> u128 {
        self.supply_override.get(denom).copied().unwrap_or_else(|| {
            self.balances
                .iter()
                .filter(|((_, d), _)| d == denom)
                .map(|(_, amount)| amount)
                .sum()
        })
    }

    fn balance(&self, holder: &Address, denom: &str) -> u128 {
        self.balances
            .get(&(holder.clone(), denom.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn send(&mut self, from: &Address, to: &Address, coin: &Coin) -> Result<(), BankError> {
        self.debit(from, coin)?;
        self.credit(to, coin)
    }

    fn burn(&mut self, holder: &Address, coin: &Coin) -> Result<(), BankError> {
        self.debit(holder, coin)?;
        if let Some(supply) = self.supply_override.get_mut(&coin.denom) {
            *supply = supply.saturating_sub(coin.amount);
        }
        Ok(())
    }

    fn mint(&mut self, holder: &Address, coin: &Coin) -> Result<(), BankError> {
        self.credit(holder, coin)?;
        if let Some(supply) = self.supply_override.get_mut(&coin.denom) {
            *supply = supply
                .checked_add(coin.amount)
                .ok_or_else(|| BankError::SupplyOverflow(coin.denom.clone()))?;
        }
        Ok(())
    }
}
