/// custom terms - config json, pinned clock, weekend-only calendar and schedule
use loan_schedule_rs::chrono::{TimeZone, Utc};
use loan_schedule_rs::{
    BusinessDayCalendar, LoanCalculator, LoanConfig, LoanTermsBuilder, SafeTimeProvider,
    TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // no purchase date in the file: the pinned clock supplies it
    let config = LoanConfig::from_json(
        r#"{
            "capital": "25000",
            "annual_effective_rate": "0.215",
            "payment_day": 31,
            "periods": 24
        }"#,
    )?;
    let now = Utc
        .with_ymd_and_hms(2024, 6, 10, 9, 0, 0)
        .single()
        .ok_or("bad time")?;
    let time = SafeTimeProvider::new(TimeSource::Test(now));
    let terms = LoanTermsBuilder::from_config(&config)?.build_with_time(&time)?;

    for calculator in [
        LoanCalculator::default(),
        LoanCalculator::new(BusinessDayCalendar::weekend_only()),
    ] {
        let quote = calculator.quote(&terms)?;
        println!(
            "{}: payment {:.2}, last {:.2}",
            calculator.calendar().holidays().name(),
            quote.plan.payment,
            quote.plan.final_payment
        );

        let schedule = quote.schedule()?;
        for row in schedule.payments.iter().take(3) {
            println!(
                "  {}  interest {:.2}  principal {:.2}",
                row.payment_date,
                row.interest_portion.round_cents(),
                row.principal_portion.round_cents()
            );
        }
        println!("  total interest {:.2}", schedule.total_interest.round_cents());
    }

    Ok(())
}
