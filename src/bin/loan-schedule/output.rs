//! Output formatting utilities.

use chrono::NaiveDate;
use serde::Serialize;

use loan_schedule_rs::config::format_date;
use loan_schedule_rs::{AmortizationSchedule, LoanQuote, Money};

/// quote plus its optional schedule, as printed in JSON
#[derive(Serialize)]
pub struct PlanReport<'a> {
    #[serde(flatten)]
    pub quote: &'a LoanQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<AmortizationSchedule>,
}

pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_quote(quote: &LoanQuote) {
    println!(
        "Periodic payment (simple calculation) = {:.2}",
        quote.simplified_payment
    );
    println!("Periodic payment (exact calculation) = {:.2}", quote.plan.payment);
    println!("Last payment (exact calculation) = {:.2}", quote.plan.final_payment);
}

pub fn print_schedule(schedule: &AmortizationSchedule) {
    println!();
    println!(
        "{:>3}  {:<10}  {:>4}  {:>12}  {:>10}  {:>10}  {:>10}  {:>12}",
        "#", "Date", "Days", "Balance", "Payment", "Interest", "Principal", "Remaining"
    );
    for row in &schedule.payments {
        println!(
            "{:>3}  {:<10}  {:>4}  {:>12}  {:>10}  {:>10}  {:>10}  {:>12}",
            row.payment_number,
            format_date(row.payment_date),
            row.days,
            cents(row.beginning_balance),
            cents(row.payment_amount),
            cents(row.interest_portion),
            cents(row.principal_portion),
            cents(row.ending_balance),
        );
    }
    println!(
        "Total paid = {:.2}, total interest = {:.2}",
        schedule.total_payment,
        schedule.total_interest.round_cents()
    );
}

fn cents(amount: Money) -> String {
    format!("{:.2}", amount.round_cents())
}

pub fn print_holidays(year: i32, holidays: &[(&'static str, NaiveDate)]) {
    if holidays.is_empty() {
        println!("No holidays in {}.", year);
        return;
    }
    for (name, date) in holidays {
        println!("{}  {}  {}", format_date(*date), date.format("%a"), name);
    }
}
