use chrono::NaiveDate;
use serde::Serialize;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::interest::interest_for_days;
use crate::payments::plan::{days_between, PaymentPlan};

/// scheduled payment in amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    /// days accrued since the previous payment (or the purchase)
    pub days: i64,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// amortization schedule of a solved plan over its real payment dates
#[derive(Debug, Clone, Serialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub daily_rate: Rate,
    pub start_date: NaiveDate,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// accrue compound interest at the daily rate between consecutive dates
    /// and apply each payment of `plan` to interest first
    pub fn generate(
        principal: Money,
        daily_rate: Rate,
        start_date: NaiveDate,
        payment_dates: &[NaiveDate],
        plan: &PaymentPlan,
    ) -> Result<Self> {
        if payment_dates.len() != plan.periods as usize {
            return Err(LoanError::domain(format!(
                "plan covers {} periods but {} payment dates were given",
                plan.periods,
                payment_dates.len()
            )));
        }

        let mut payments = Vec::with_capacity(payment_dates.len());
        let mut balance = principal;
        let mut previous_date = start_date;
        let mut cumulative_interest = Money::ZERO;
        let mut cumulative_principal = Money::ZERO;

        for (i, (date, amount)) in payment_dates.iter().zip(plan.amounts()).enumerate() {
            let days = days_between(previous_date, *date);
            let interest_portion = interest_for_days(balance, daily_rate, days)?;
            let principal_portion = amount.checked_sub(interest_portion)?;

            cumulative_interest = cumulative_interest.checked_add(interest_portion)?;
            cumulative_principal = cumulative_principal.checked_add(principal_portion)?;

            let ending_balance = balance.checked_sub(principal_portion)?;

            payments.push(ScheduledPayment {
                payment_number: i as u32 + 1,
                payment_date: *date,
                days,
                beginning_balance: balance,
                payment_amount: amount,
                interest_portion,
                principal_portion,
                ending_balance,
                cumulative_interest,
                cumulative_principal,
            });

            balance = ending_balance;
            previous_date = *date;
        }

        let total_payment = payments
            .iter()
            .try_fold(Money::ZERO, |total, p| total.checked_add(p.payment_amount))?;

        Ok(Self {
            principal,
            daily_rate,
            start_date,
            payments,
            total_interest: cumulative_interest,
            total_payment,
        })
    }

    /// get payment for specific period (1-based)
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        let index = payment_number.checked_sub(1)?;
        self.payments.get(index as usize)
    }

    /// get remaining balance after payment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }

    /// balance left (positive) or overpaid (negative) after the last payment
    pub fn residual_balance(&self) -> Money {
        self.payments
            .last()
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }
}
