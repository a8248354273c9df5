use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{LoanError, Result};

/// internal precision kept on every money operation
const MONEY_SCALE: u32 = 8;

/// currency amount; arithmetic keeps 8 decimal places, presentation rounds to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_SCALE))
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from cents
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to whole cents (banker's rounding)
    pub fn round_cents(&self) -> Self {
        Money(self.0.round_dp(2))
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn checked_add(self, other: Money) -> Result<Money> {
        self.0
            .checked_add(other.0)
            .map(Money::from_decimal)
            .ok_or_else(|| LoanError::domain(format!("{} + {} overflows", self, other)))
    }

    pub fn checked_sub(self, other: Money) -> Result<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money::from_decimal)
            .ok_or_else(|| LoanError::domain(format!("{} - {} overflows", self, other)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// per-period growth rate as a decimal fraction (0.18 is 18%)
///
/// The period a rate refers to (annual, monthly, daily) is carried by the
/// function that produced it, see [`crate::interest::conversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `1 + rate`, rejecting rates at or below -100%
    pub fn growth_factor(&self) -> Result<Decimal> {
        match self.0.checked_add(Decimal::ONE) {
            Some(factor) if factor > Decimal::ZERO => Ok(factor),
            _ => Err(LoanError::InvalidRate { rate: *self }),
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.checked_mul(Decimal::ONE_HUNDRED) {
            Some(percentage) => write!(f, "{}%", percentage.normalize()),
            None => write!(f, "{}", self.0),
        }
    }
}
