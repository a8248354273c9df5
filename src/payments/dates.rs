use chrono::{Datelike, Months, NaiveDate};
use log::debug;

use crate::calendar::BusinessDayCalendar;
use crate::errors::{LoanError, Result};

/// monthly payment dates pinned to a day of the month, rolled to business days
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentDateGenerator {
    calendar: BusinessDayCalendar,
}

impl PaymentDateGenerator {
    pub fn new(calendar: BusinessDayCalendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &BusinessDayCalendar {
        &self.calendar
    }

    /// generate `periods` payment dates
    ///
    /// The purchase date is first moved one month ahead onto `payment_day`;
    /// that theoretical payday is skipped, so the first returned date lies
    /// two months after the purchase. Every subsequent payday is one month
    /// after the previous (already rolled) one, clamped to the month length
    /// and rolled forward to a business day.
    pub fn generate(
        &self,
        purchase_date: NaiveDate,
        payment_day: u32,
        periods: u32,
    ) -> Result<Vec<NaiveDate>> {
        validate_payment_day(payment_day)?;
        if periods == 0 {
            return Err(LoanError::domain("period count must be at least 1"));
        }

        let mut payday = next_payday(purchase_date, payment_day)?;
        let mut paydays = Vec::with_capacity(periods as usize);

        for _ in 0..periods {
            payday = next_payday(payday, payment_day)?;

            if !self.calendar.is_business_day(payday) {
                let rolled = self.calendar.roll_forward(payday);
                debug!(
                    "{} is not a business day, rolled to {}",
                    payday.format("%d/%m/%Y"),
                    rolled.format("%d/%m/%Y")
                );
                payday = rolled;
            }

            paydays.push(payday);
        }

        Ok(paydays)
    }
}

pub(crate) fn validate_payment_day(payment_day: u32) -> Result<()> {
    if !(1..=31).contains(&payment_day) {
        return Err(LoanError::domain(format!(
            "payment day must be between 1 and 31, got {}",
            payment_day
        )));
    }
    Ok(())
}

/// same day of the following month, snapped to `payment_day`
///
/// Short months clamp to their last day (31 becomes 30, or 28/29 in February).
pub fn next_payday(reference: NaiveDate, payment_day: u32) -> Result<NaiveDate> {
    let (year, month) = if reference.month() == 12 {
        (reference.year() + 1, 1)
    } else {
        (reference.year(), reference.month() + 1)
    };
    month_length(year, month)
        .and_then(|length| NaiveDate::from_ymd_opt(year, month, payment_day.min(length)))
        .ok_or_else(|| {
            LoanError::domain(format!("no payday after {} on day {}", reference, payment_day))
        })
}

/// number of days in `month` of `year`
fn month_length(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_payday_clamps_month_end() {
        assert_eq!(next_payday(date(2024, 1, 31), 31).unwrap(), date(2024, 2, 29));
        assert_eq!(next_payday(date(2023, 1, 31), 31).unwrap(), date(2023, 2, 28));
        assert_eq!(next_payday(date(2024, 2, 29), 31).unwrap(), date(2024, 3, 31));
        assert_eq!(next_payday(date(2024, 3, 31), 31).unwrap(), date(2024, 4, 30));
        assert_eq!(next_payday(date(2024, 12, 3), 15).unwrap(), date(2025, 1, 15));
    }

    #[test]
    fn test_month_length() {
        assert_eq!(month_length(2024, 2), Some(29));
        assert_eq!(month_length(2023, 2), Some(28));
        assert_eq!(month_length(1900, 2), Some(28));
        assert_eq!(month_length(2000, 2), Some(29));
        assert_eq!(month_length(2024, 4), Some(30));
        assert_eq!(month_length(2024, 12), Some(31));
        assert_eq!(month_length(2024, 13), None);
    }

    #[test]
    fn test_payday_past_last_representable_month() {
        assert!(next_payday(NaiveDate::MAX, 15).is_err());
    }

    #[test]
    fn test_first_payment_two_months_after_purchase() {
        let generator = PaymentDateGenerator::new(BusinessDayCalendar::weekend_only());
        let dates = generator.generate(date(2024, 1, 1), 15, 1).unwrap();
        assert_eq!(dates, vec![date(2024, 3, 15)]);
    }

    #[test]
    fn test_generate_year_of_fifteenths() {
        let generator = PaymentDateGenerator::default();
        let dates = generator.generate(date(2024, 1, 1), 15, 12).unwrap();

        assert_eq!(
            dates,
            vec![
                date(2024, 3, 15),
                date(2024, 4, 15),
                date(2024, 5, 15),
                date(2024, 6, 17),
                date(2024, 7, 15),
                date(2024, 8, 15),
                date(2024, 9, 16),
                date(2024, 10, 15),
                date(2024, 11, 15),
                date(2024, 12, 16),
                date(2025, 1, 15),
                date(2025, 2, 17),
            ]
        );
    }

    #[test]
    fn test_christmas_payday_rolls_forward() {
        let generator = PaymentDateGenerator::default();
        let dates = generator.generate(date(2023, 10, 25), 25, 1).unwrap();
        assert_eq!(dates, vec![date(2023, 12, 26)]);
    }

    #[test]
    fn test_dates_are_increasing_business_days() {
        let generator = PaymentDateGenerator::default();
        let purchase = date(2023, 11, 20);
        for payment_day in [1, 8, 28, 29, 30, 31] {
            let dates = generator.generate(purchase, payment_day, 36).unwrap();
            assert_eq!(dates.len(), 36);
            assert!(dates[0] > purchase);
            assert!(dates.windows(2).all(|w| w[0] < w[1]), "day {}: {:?}", payment_day, dates);
            assert!(dates.iter().all(|d| generator.calendar().is_business_day(*d)));
        }
    }

    #[test]
    fn test_rolled_date_becomes_reference() {
        let generator = PaymentDateGenerator::new(BusinessDayCalendar::weekend_only());
        // 2024-08-31 is a Saturday, rolled to monday 2024-09-02, next is 2024-10-31
        let dates = generator.generate(date(2024, 6, 10), 31, 2).unwrap();
        assert_eq!(dates, vec![date(2024, 9, 2), date(2024, 10, 31)]);
    }

    #[test]
    fn test_invalid_inputs() {
        let generator = PaymentDateGenerator::default();
        assert!(generator.generate(date(2024, 1, 1), 0, 12).is_err());
        assert!(generator.generate(date(2024, 1, 1), 32, 12).is_err());
        assert!(generator.generate(date(2024, 1, 1), 15, 0).is_err());
    }
}
