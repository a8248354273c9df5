use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::calendar::BusinessDayCalendar;
use crate::config::LoanTerms;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::{annual_to_monthly, monthly_to_daily, simplified_monthly_payment};
use crate::payments::{AmortizationSchedule, PaymentDateGenerator, PaymentPlan, PaymentSolver};
use crate::solver::SolverConfig;

/// everything computed for one set of loan terms
#[derive(Debug, Clone, Serialize)]
pub struct LoanQuote {
    pub terms: LoanTerms,
    pub monthly_rate: Rate,
    pub daily_rate: Rate,
    /// level payment assuming every period is exactly one month, rounded to cents
    pub simplified_payment: Money,
    pub payment_dates: Vec<NaiveDate>,
    pub plan: PaymentPlan,
}

impl LoanQuote {
    /// interest/principal split of every payment over the real dates
    pub fn schedule(&self) -> Result<AmortizationSchedule> {
        AmortizationSchedule::generate(
            self.terms.capital(),
            self.daily_rate,
            self.terms.purchase_date(),
            &self.payment_dates,
            &self.plan,
        )
    }

    /// amount due on each payment date
    pub fn installments(&self) -> Vec<(NaiveDate, Money)> {
        self.payment_dates
            .iter()
            .copied()
            .zip(self.plan.amounts())
            .collect()
    }
}

/// ties rate conversion, date generation and the payment solve together
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanCalculator {
    generator: PaymentDateGenerator,
    solver_config: SolverConfig,
}

impl LoanCalculator {
    pub fn new(calendar: BusinessDayCalendar) -> Self {
        Self {
            generator: PaymentDateGenerator::new(calendar),
            solver_config: SolverConfig::default(),
        }
    }

    #[must_use]
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    pub fn calendar(&self) -> &BusinessDayCalendar {
        self.generator.calendar()
    }

    pub fn quote(&self, terms: &LoanTerms) -> Result<LoanQuote> {
        let monthly_rate = annual_to_monthly(terms.annual_effective_rate())?;
        let daily_rate = monthly_to_daily(monthly_rate)?;

        let simplified_payment =
            simplified_monthly_payment(terms.capital(), terms.annual_effective_rate(), terms.periods())?
                .round_cents();

        let payment_dates =
            self.generator
                .generate(terms.purchase_date(), terms.payment_day(), terms.periods())?;

        let plan = PaymentSolver::new(self.solver_config, terms.initial_guess()).solve(
            terms.capital(),
            daily_rate,
            terms.purchase_date(),
            &payment_dates,
        )?;

        info!(
            "quoted {} over {} periods at {}: payment {}, last {}",
            terms.capital(),
            terms.periods(),
            terms.annual_effective_rate(),
            plan.payment,
            plan.final_payment
        );

        Ok(LoanQuote {
            terms: terms.clone(),
            monthly_rate,
            daily_rate,
            simplified_payment,
            payment_dates,
            plan,
        })
    }
}
