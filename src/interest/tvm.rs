//! Time-value-of-money factors for lump sums and uniform series.
//!
//! Every function is pure. Amounts are plain `Decimal` so the same formulas
//! serve money, discount factors and unit payments alike.

use rust_decimal::prelude::MathematicalOps;
use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::errors::{LoanError, Result};

/// `(1 + rate)^n`; `n` may be negative
pub fn compound_factor(rate: Rate, n: i64) -> Result<Decimal> {
    let base = rate.growth_factor()?;
    base.checked_powi(n).ok_or_else(|| {
        LoanError::domain(format!("compound factor (1 + {})^{} overflows", rate.as_decimal(), n))
    })
}

/// future value of a single amount: `present * (1 + rate)^n`
pub fn future_value(present: Decimal, rate: Rate, n: i64) -> Result<Decimal> {
    let factor = compound_factor(rate, n)?;
    present
        .checked_mul(factor)
        .ok_or_else(|| LoanError::domain("future value overflows"))
}

/// present value of a single amount: `future * (1 + rate)^(-n)`
pub fn present_value(future: Decimal, rate: Rate, n: i64) -> Result<Decimal> {
    let factor = compound_factor(rate, n)?;
    future
        .checked_div(factor)
        .ok_or_else(|| LoanError::domain("present value overflows"))
}

/// present value of `n` end-of-period payments
///
/// A zero rate takes the limit `payment * n` instead of dividing by zero.
pub fn present_value_of_series(payment: Decimal, rate: Rate, n: u32) -> Result<Decimal> {
    if rate.is_zero() {
        return scale(payment, Decimal::from(n), "series present value");
    }
    let factor = compound_factor(rate, i64::from(n))?;
    let numerator = scale(payment, factor - Decimal::ONE, "series present value")?;
    scale(rate.as_decimal(), factor, "series present value")
        .and_then(|denominator| divide(numerator, denominator, "series present value"))
}

/// payment of a uniform series worth `present` today
pub fn payment_from_present_value(present: Decimal, rate: Rate, n: u32) -> Result<Decimal> {
    if n == 0 {
        return Err(LoanError::domain("payment series needs at least one period"));
    }
    if rate.is_zero() {
        return divide(present, Decimal::from(n), "series payment");
    }
    let discount = compound_factor(rate, -i64::from(n))?;
    let numerator = scale(present, rate.as_decimal(), "series payment")?;
    divide(numerator, Decimal::ONE - discount, "series payment")
}

/// future value of `n` end-of-period payments
pub fn future_value_of_series(payment: Decimal, rate: Rate, n: u32) -> Result<Decimal> {
    if rate.is_zero() {
        return scale(payment, Decimal::from(n), "series future value");
    }
    let factor = compound_factor(rate, i64::from(n))?;
    let numerator = scale(payment, factor - Decimal::ONE, "series future value")?;
    divide(numerator, rate.as_decimal(), "series future value")
}

/// payment of a uniform series accumulating to `future`
pub fn payment_from_future_value(future: Decimal, rate: Rate, n: u32) -> Result<Decimal> {
    if n == 0 {
        return Err(LoanError::domain("payment series needs at least one period"));
    }
    if rate.is_zero() {
        return divide(future, Decimal::from(n), "series payment");
    }
    let factor = compound_factor(rate, i64::from(n))?;
    let numerator = scale(future, rate.as_decimal(), "series payment")?;
    divide(numerator, factor - Decimal::ONE, "series payment")
}

fn scale(amount: Decimal, by: Decimal, what: &str) -> Result<Decimal> {
    amount
        .checked_mul(by)
        .ok_or_else(|| LoanError::domain(format!("{} overflows", what)))
}

fn divide(amount: Decimal, by: Decimal, what: &str) -> Result<Decimal> {
    amount
        .checked_div(by)
        .ok_or_else(|| LoanError::domain(format!("{} is undefined", what)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn close(a: Decimal, b: Decimal, tol: Decimal) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_future_value() {
        let fv = future_value(dec!(10000), Rate::from_percentage(5), 3).unwrap();
        assert_eq!(fv.round_dp(2), dec!(11576.25));
    }

    #[test]
    fn test_present_value_round_trip() {
        let cases = [
            (dec!(0.00046), 410_i64),
            (dec!(0.0138884), 36),
            (dec!(0.18), 30),
            (dec!(-0.05), 60),
            (dec!(0), 410),
        ];
        for (r, max_n) in cases {
            let rate = Rate::from_decimal(r);
            for n in [1_i64, 12, max_n] {
                let fv = future_value(dec!(1234.56), rate, n).unwrap();
                let pv = present_value(fv, rate, n).unwrap();
                assert!(close(pv, dec!(1234.56), dec!(0.000000001)), "r={} n={} pv={}", r, n, pv);
            }
        }
    }

    #[test]
    fn test_negative_periods_discount_forward() {
        let rate = Rate::from_percentage(10);
        assert_eq!(present_value(dec!(100), rate, -1).unwrap(), dec!(110));
    }

    #[test]
    fn test_series_present_value() {
        let pv = present_value_of_series(dec!(100), Rate::from_percentage(10), 3).unwrap();
        assert_eq!(pv.round_dp(2), dec!(248.69));
    }

    #[test]
    fn test_series_zero_rate_limit() {
        assert_eq!(present_value_of_series(dec!(100), Rate::ZERO, 12).unwrap(), dec!(1200));
        assert_eq!(future_value_of_series(dec!(100), Rate::ZERO, 12).unwrap(), dec!(1200));
        assert_eq!(payment_from_present_value(dec!(1200), Rate::ZERO, 12).unwrap(), dec!(100));
        assert_eq!(payment_from_future_value(dec!(1200), Rate::ZERO, 12).unwrap(), dec!(100));
    }

    #[test]
    fn test_payment_from_present_value() {
        let pmt = payment_from_present_value(dec!(1000), Rate::from_percentage(1), 12).unwrap();
        assert_eq!(pmt.round_dp(2), dec!(88.85));

        let pv = present_value_of_series(pmt, Rate::from_percentage(1), 12).unwrap();
        assert!(close(pv, dec!(1000), dec!(0.0000001)));
    }

    #[test]
    fn test_future_series_round_trip() {
        let rate = Rate::from_decimal(dec!(0.015));
        let fv = future_value_of_series(dec!(250), rate, 24).unwrap();
        let pmt = payment_from_future_value(fv, rate, 24).unwrap();
        assert!(close(pmt, dec!(250), dec!(0.0000001)));
    }

    #[test]
    fn test_zero_periods_rejected() {
        assert!(payment_from_present_value(dec!(1000), Rate::from_percentage(1), 0).is_err());
        assert!(payment_from_future_value(dec!(1000), Rate::ZERO, 0).is_err());
    }

    #[test]
    fn test_series_overflow_is_domain_error() {
        let huge = dec!(10000000000000000000000000000);
        let rate = Rate::from_decimal(dec!(0.5));
        assert!(matches!(future_value_of_series(huge, rate, 10), Err(LoanError::Domain { .. })));
        assert!(matches!(present_value_of_series(huge, rate, 10), Err(LoanError::Domain { .. })));
        assert!(matches!(present_value_of_series(huge, Rate::ZERO, 10), Err(LoanError::Domain { .. })));
        assert!(matches!(payment_from_present_value(huge, Rate::from_decimal(dec!(20)), 10), Err(LoanError::Domain { .. })));
    }

    #[test]
    fn test_rate_at_minus_one_rejected() {
        let rate = Rate::from_decimal(dec!(-1));
        assert!(matches!(future_value(dec!(1), rate, 2), Err(LoanError::InvalidRate { .. })));
        assert!(matches!(present_value(dec!(1), rate, 2), Err(LoanError::InvalidRate { .. })));
    }
}
