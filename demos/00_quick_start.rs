/// quick start - minimal example to get started
use loan_schedule_rs::chrono::NaiveDate;
use loan_schedule_rs::{LoanCalculator, LoanTerms, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10,000 at 18% effective annual, paid on the 15th over 12 months
    let terms = LoanTerms::builder()
        .capital(Money::from_major(10_000))
        .annual_effective_rate(Rate::from_percentage(18))
        .payment_day(15)
        .periods(12)
        .purchase_date(NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?)
        .build()?;

    let quote = LoanCalculator::default().quote(&terms)?;

    println!("Periodic payment (simple calculation) = {:.2}", quote.simplified_payment);
    println!("Periodic payment (exact calculation) = {:.2}", quote.plan.payment);
    println!("Last payment (exact calculation) = {:.2}", quote.plan.final_payment);

    for (date, amount) in quote.installments() {
        println!("{}  {:.2}", date.format("%d/%m/%Y"), amount);
    }

    Ok(())
}
