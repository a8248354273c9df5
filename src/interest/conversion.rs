//! Rate-basis conversions.
//!
//! Effective rates are converted with the compounding identity
//! `(1 + r_long) = (1 + r_short)^k`. The period ratios are fixed
//! conventions, not actual day counts: 12 months per year, 30 days per
//! month, 360 days per year.

use rust_decimal::prelude::MathematicalOps;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{LoanError, Result};
use crate::solver::{newton_raphson, SolverConfig};

pub const MONTHS_PER_YEAR: u32 = 12;
pub const DAYS_PER_MONTH: u32 = 30;
pub const DAYS_PER_YEAR: u32 = 360;

/// tolerance for fractional roots, well below anything that reaches a cent
const ROOT_TOLERANCE: Decimal = dec!(0.000000000000000000000001);

/// compounding period an effective rate refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateBasis {
    Annual,
    Monthly,
    Daily,
}

impl RateBasis {
    /// number of periods of this basis in one conventional year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            RateBasis::Annual => 1,
            RateBasis::Monthly => MONTHS_PER_YEAR,
            RateBasis::Daily => DAYS_PER_YEAR,
        }
    }
}

/// convert an effective rate between bases
pub fn convert(rate: Rate, from: RateBasis, to: RateBasis) -> Result<Rate> {
    let factor = rate.growth_factor()?;
    let from_periods = from.periods_per_year();
    let to_periods = to.periods_per_year();

    let converted = if from_periods >= to_periods {
        // shorter period to longer: raise to the ratio
        let k = from_periods / to_periods;
        factor
            .checked_powi(i64::from(k))
            .ok_or_else(|| LoanError::domain(format!("rate {} overflows at power {}", rate, k)))?
    } else {
        // longer period to shorter: take the k-th root
        nth_root(factor, to_periods / from_periods)?
    };

    Ok(Rate::from_decimal(converted - Decimal::ONE))
}

/// effective annual rate to effective monthly rate
pub fn annual_to_monthly(ear: Rate) -> Result<Rate> {
    convert(ear, RateBasis::Annual, RateBasis::Monthly)
}

/// effective monthly rate to effective annual rate
pub fn monthly_to_annual(emr: Rate) -> Result<Rate> {
    convert(emr, RateBasis::Monthly, RateBasis::Annual)
}

/// effective monthly rate to effective daily rate
pub fn monthly_to_daily(emr: Rate) -> Result<Rate> {
    let factor = emr.growth_factor()?;
    Ok(Rate::from_decimal(nth_root(factor, DAYS_PER_MONTH)? - Decimal::ONE))
}

/// effective daily rate to effective monthly rate
pub fn daily_to_monthly(edr: Rate) -> Result<Rate> {
    let factor = edr.growth_factor()?;
    let monthly = factor
        .checked_powi(i64::from(DAYS_PER_MONTH))
        .ok_or_else(|| LoanError::domain(format!("daily rate {} overflows", edr)))?;
    Ok(Rate::from_decimal(monthly - Decimal::ONE))
}

/// effective daily rate to effective annual rate
pub fn daily_to_annual(edr: Rate) -> Result<Rate> {
    convert(edr, RateBasis::Daily, RateBasis::Annual)
}

/// effective annual rate to effective daily rate
pub fn annual_to_daily(ear: Rate) -> Result<Rate> {
    convert(ear, RateBasis::Annual, RateBasis::Daily)
}

/// nominal annual rate to the effective rate of one compounding period
pub fn nominal_to_period_rate(nar: Rate, periods_per_year: u32) -> Result<Rate> {
    if periods_per_year == 0 {
        return Err(LoanError::domain("periods per year must be positive"));
    }
    Ok(Rate::from_decimal(nar.as_decimal() / Decimal::from(periods_per_year)))
}

/// nominal annual rate to effective annual rate
pub fn nominal_to_effective_annual(nar: Rate, periods_per_year: u32) -> Result<Rate> {
    let period_rate = nominal_to_period_rate(nar, periods_per_year)?;
    let factor = period_rate
        .growth_factor()?
        .checked_powi(i64::from(periods_per_year))
        .ok_or_else(|| LoanError::domain(format!("nominal rate {} overflows", nar)))?;
    Ok(Rate::from_decimal(factor - Decimal::ONE))
}

/// effective annual rate to nominal annual rate
pub fn effective_annual_to_nominal(ear: Rate, periods_per_year: u32) -> Result<Rate> {
    if periods_per_year == 0 {
        return Err(LoanError::domain("periods per year must be positive"));
    }
    let period_factor = nth_root(ear.growth_factor()?, periods_per_year)?;
    Ok(Rate::from_decimal(
        Decimal::from(periods_per_year) * (period_factor - Decimal::ONE),
    ))
}

/// positive `k`-th root of a positive number
pub fn nth_root(x: Decimal, k: u32) -> Result<Decimal> {
    if x <= Decimal::ZERO {
        return Err(LoanError::domain(format!("root of non-positive value {}", x)));
    }
    if k == 0 {
        return Err(LoanError::domain("zeroth root is undefined"));
    }
    if k == 1 {
        return Ok(x);
    }

    let k_dec = Decimal::from(k);
    let power = |y: Decimal, e: u32| {
        y.checked_powi(i64::from(e))
            .ok_or_else(|| LoanError::domain(format!("root iteration overflowed at {}", y)))
    };
    let f = |y: Decimal| Ok(power(y, k)? - x);
    let df = |y: Decimal| {
        power(y, k - 1)?
            .checked_mul(k_dec)
            .ok_or_else(|| LoanError::domain(format!("root derivative overflowed at {}", y)))
    };

    // first-order expansion around 1, close for growth factors
    let guess = Decimal::ONE + (x - Decimal::ONE) / k_dec;
    let config = SolverConfig::new(ROOT_TOLERANCE, 100);

    Ok(newton_raphson(f, df, guess, &config)?.root)
}
