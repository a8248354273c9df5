pub mod conversion;
pub mod tvm;

pub use conversion::{
    annual_to_daily, annual_to_monthly, convert, daily_to_annual, daily_to_monthly,
    effective_annual_to_nominal, monthly_to_annual, monthly_to_daily, nominal_to_effective_annual,
    nominal_to_period_rate, nth_root, RateBasis,
};
pub use tvm::{
    compound_factor, future_value, future_value_of_series, payment_from_future_value,
    payment_from_present_value, present_value, present_value_of_series,
};

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// uniform monthly payment that amortizes `capital` at an effective annual
/// rate, assuming every period is exactly one month
///
/// This is the textbook approximation the exact solver is compared against.
pub fn simplified_monthly_payment(capital: Money, ear: Rate, periods: u32) -> Result<Money> {
    let emr = annual_to_monthly(ear)?;
    let payment = payment_from_present_value(capital.as_decimal(), emr, periods)?;
    Ok(Money::from_decimal(payment))
}

/// compounded interest earned by `balance` over `days` at an effective daily rate
pub fn interest_for_days(balance: Money, daily_rate: Rate, days: i64) -> Result<Money> {
    let factor = compound_factor(daily_rate, days)?;
    balance
        .as_decimal()
        .checked_mul(factor - Decimal::ONE)
        .map(Money::from_decimal)
        .ok_or_else(|| LoanError::domain(format!("interest on {} over {} days overflows", balance, days)))
}
