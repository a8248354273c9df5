/// holidays - which dates the payment calendar skips
use loan_schedule_rs::chrono::{Datelike, NaiveDate};
use loan_schedule_rs::{BusinessDayCalendar, PERU};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for (name, date) in PERU.holidays(2024) {
        println!("{}  {:?}  {}", date, date.weekday(), name);
    }

    let calendar = BusinessDayCalendar::peru();
    let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).ok_or("bad date")?;
    println!(
        "payday on {} moves to {}",
        christmas,
        calendar.roll_forward(christmas)
    );

    Ok(())
}
