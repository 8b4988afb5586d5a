//! Fixed-point decimal with 18 decimal places.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One whole unit, in raw fixed-point units.
pub const DEC_ONE: u128 = 1_000_000_000_000_000_000;

const BPS_DENOMINATOR: u128 = 10_000;

/// A non-negative decimal stored as `value * 10^18`.
///
/// Arithmetic is checked and returns `None` on overflow. Division and
/// scaling by a weight truncate at the 18th decimal place.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Dec(u128);

impl Dec {
    pub const ZERO: Dec = Dec(0);

    /// Every `u64` fits without overflow.
    pub const fn from_int(n: u64) -> Self {
        Dec(n as u128 * DEC_ONE)
    }

    pub fn checked_from_int(n: u128) -> Option<Self> {
        n.checked_mul(DEC_ONE).map(Dec)
    }

    pub const fn from_raw(raw: u128) -> Self {
        Dec(raw)
    }

    pub const fn raw(self) -> u128 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `numerator * factor / denominator` at full precision. `None` on
    /// overflow or a zero denominator.
    pub fn checked_from_ratio(numerator: u128, factor: u128, denominator: u128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let product = numerator.checked_mul(factor)?;
        let whole = (product / denominator).checked_mul(DEC_ONE)?;
        let frac = (product % denominator).checked_mul(DEC_ONE)? / denominator;
        whole.checked_add(frac).map(Dec)
    }

    pub fn checked_add(self, other: Dec) -> Option<Dec> {
        self.0.checked_add(other.0).map(Dec)
    }

    pub fn saturating_sub(self, other: Dec) -> Dec {
        Dec(self.0.saturating_sub(other.0))
    }

    /// `self * bps / 10 000`.
    pub fn checked_mul_bps(self, bps: u32) -> Option<Dec> {
        self.0
            .checked_mul(u128::from(bps))
            .map(|scaled| Dec(scaled / BPS_DENOMINATOR))
    }

    /// `self * n`, exact.
    pub fn checked_mul_int(self, n: u128) -> Option<Dec> {
        self.0.checked_mul(n).map(Dec)
    }

    /// Whole units, rounded down.
    pub fn truncate(self) -> u128 {
        self.0 / DEC_ONE
    }

    /// Whole units, rounded half up.
    pub fn round(self) -> u128 {
        let whole = self.0 / DEC_ONE;
        if self.0 % DEC_ONE >= DEC_ONE / 2 {
            whole + 1
        } else {
            whole
        }
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / DEC_ONE, self.0 % DEC_ONE)
    }
}
