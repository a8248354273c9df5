use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::interest::present_value;
use crate::solver::{newton_raphson, SolverConfig};

/// constant payment plus a final payment absorbing rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentPlan {
    /// rounded constant payment, charged on every date but the last
    pub payment: Money,
    /// rounded last payment
    pub final_payment: Money,
    /// unrounded solution of the present-value equation
    pub exact_payment: Decimal,
    pub periods: u32,
    pub solver_iterations: u32,
}

impl PaymentPlan {
    /// payment due on each date, in order
    pub fn amounts(&self) -> Vec<Money> {
        let mut amounts = vec![self.payment; self.periods.saturating_sub(1) as usize];
        amounts.push(self.final_payment);
        amounts
    }
}

/// solves `capital = sum(F / (1 + daily_rate)^days)` for the constant payment `F`
#[derive(Debug, Clone, Copy)]
pub struct PaymentSolver {
    config: SolverConfig,
    initial_guess: Decimal,
}

impl Default for PaymentSolver {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
            initial_guess: Decimal::ONE,
        }
    }
}

impl PaymentSolver {
    pub fn new(config: SolverConfig, initial_guess: Decimal) -> Self {
        Self {
            config,
            initial_guess,
        }
    }

    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: Decimal) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// solve for the payment and split it into constant and final amounts
    ///
    /// Every date carries the same unknown payment. The rounded payment is
    /// then used for all but the last date, and the last payment is
    /// `round(F + (F - round(F)) * n)`.
    pub fn solve(
        &self,
        capital: Money,
        daily_rate: Rate,
        purchase_date: NaiveDate,
        payment_dates: &[NaiveDate],
    ) -> Result<PaymentPlan> {
        if !capital.is_positive() {
            return Err(LoanError::domain(format!("capital must be positive, got {}", capital)));
        }
        if payment_dates.is_empty() {
            return Err(LoanError::domain("at least one payment date is required"));
        }
        if let Some(early) = payment_dates.iter().find(|d| **d <= purchase_date) {
            return Err(LoanError::domain(format!(
                "payment date {} is not after purchase date {}",
                early, purchase_date
            )));
        }

        // discount factor of each date; the equation is linear in F
        let factors = payment_dates
            .iter()
            .map(|date| present_value(Decimal::ONE, daily_rate, days_between(purchase_date, *date)))
            .collect::<Result<Vec<Decimal>>>()?;
        let annuity = discounted_sum(&factors, Decimal::ONE)?;

        let target = capital.as_decimal();
        let f = |payment: Decimal| -> Result<Decimal> {
            target
                .checked_sub(discounted_sum(&factors, payment)?)
                .ok_or_else(|| LoanError::domain(format!("payment {} overflows", payment)))
        };
        let df = |_: Decimal| -> Result<Decimal> { Ok(-annuity) };

        let solution = newton_raphson(f, df, self.initial_guess, &self.config)?;
        let exact = solution.root;
        let periods = payment_dates.len() as u32;

        let payment = exact.round_dp(2);
        let final_payment = (exact - payment)
            .checked_mul(Decimal::from(periods))
            .and_then(|carry| carry.checked_add(exact))
            .ok_or_else(|| LoanError::domain(format!("final payment for {} overflows", exact)))?
            .round_dp(2);

        debug!(
            "solved payment {} in {} iterations (residual {}), rounded {} / final {}",
            exact, solution.iterations, solution.residual, payment, final_payment
        );

        Ok(PaymentPlan {
            payment: Money::from_decimal(payment),
            final_payment: Money::from_decimal(final_payment),
            exact_payment: exact,
            periods,
            solver_iterations: solution.iterations,
        })
    }
}

/// `payment * sum(factors)`
fn discounted_sum(factors: &[Decimal], payment: Decimal) -> Result<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ZERO, |total, factor| {
            payment
                .checked_mul(*factor)
                .and_then(|discounted| total.checked_add(discounted))
        })
        .ok_or_else(|| LoanError::domain(format!("discounting payment {} overflows", payment)))
}

/// whole calendar days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
