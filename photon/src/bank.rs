//! The bank capability photon conversion moves tokens through.

use std::fmt;

use atomone_types::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("{holder} has {available}{denom}, needs {needed}{denom}")]
    InsufficientFunds {
        holder: Address,
        denom: String,
        needed: u128,
        available: u128,
    },

    #[error("{0} supply overflow")]
    SupplyOverflow(String),
}

/// Balances and total supply per denom.
///
/// `burn` and `mint` change total supply; `send` never does.
pub trait Bank {
    fn supply(&self, denom: &str) -> u128;

    fn balance(&self, holder: &Address, denom: &str) -> u128;

    fn send(&mut self, from: &Address, to: &Address, coin: &Coin) -> Result<(), BankError>;

    fn burn(&mut self, holder: &Address, coin: &Coin) -> Result<(), BankError>;

    fn mint(&mut self, holder: &Address, coin: &Coin) -> Result<(), BankError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_display() {
        assert_eq!(Coin::new("uatone", 42).to_string(), "42uatone");
    }
}
