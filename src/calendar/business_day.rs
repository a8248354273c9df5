use chrono::{Datelike, NaiveDate, Weekday};

use super::holiday::HolidayCalendar;
use super::peru::PERU;

/// weekend rule combined with a holiday calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDayCalendar {
    holidays: HolidayCalendar,
}

impl BusinessDayCalendar {
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self { holidays }
    }

    /// Saturday/Sunday weekends plus the national holidays of Peru
    pub fn peru() -> Self {
        Self::new(PERU)
    }

    /// Saturday/Sunday weekends only
    pub fn weekend_only() -> Self {
        Self::new(HolidayCalendar::empty())
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.holidays.is_holiday(date)
    }

    /// first business day on or after `date`
    pub fn roll_forward(&self, date: NaiveDate) -> NaiveDate {
        let mut result = date;
        while !self.is_business_day(result) {
            result = match result.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        result
    }
}

impl Default for BusinessDayCalendar {
    fn default() -> Self {
        Self::peru()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekends_are_not_business_days() {
        let cal = BusinessDayCalendar::peru();
        // 2024-06-15 is a Saturday
        assert!(!cal.is_business_day(date(2024, 6, 15)));
        assert!(!cal.is_business_day(date(2024, 6, 16)));
        assert!(cal.is_business_day(date(2024, 6, 17)));
    }

    #[test]
    fn test_every_holiday_is_not_a_business_day() {
        let cal = BusinessDayCalendar::peru();
        for year in 2020..=2030 {
            for (name, day) in cal.holidays().holidays(year) {
                assert!(!cal.is_business_day(day), "{} on {} counted as business day", name, day);
            }
        }
    }

    #[test]
    fn test_roll_forward_unchanged_on_business_day() {
        let cal = BusinessDayCalendar::peru();
        assert_eq!(cal.roll_forward(date(2024, 3, 15)), date(2024, 3, 15));
    }

    #[test]
    fn test_roll_forward_christmas() {
        let cal = BusinessDayCalendar::peru();
        // 2023-12-25 is a Monday
        assert_eq!(cal.roll_forward(date(2023, 12, 25)), date(2023, 12, 26));
    }

    #[test]
    fn test_roll_forward_skips_weekend_and_holidays() {
        let cal = BusinessDayCalendar::peru();
        // Sat 27, Sun 28 (independence day), Mon 29 (independence day)
        assert_eq!(cal.roll_forward(date(2024, 7, 27)), date(2024, 7, 30));
        // Thu 28 and Fri 29 march 2024 are holy week
        assert_eq!(cal.roll_forward(date(2024, 3, 28)), date(2024, 4, 1));
    }

    #[test]
    fn test_roll_forward_weekend_only() {
        let cal = BusinessDayCalendar::weekend_only();
        assert_eq!(cal.roll_forward(date(2023, 12, 25)), date(2023, 12, 25));
        assert_eq!(cal.roll_forward(date(2024, 6, 15)), date(2024, 6, 17));
    }

    #[test]
    fn test_roll_forward_is_idempotent() {
        let cal = BusinessDayCalendar::peru();
        let mut day = date(2024, 1, 1);
        while day < date(2025, 1, 1) {
            let rolled = cal.roll_forward(day);
            assert!(rolled >= day);
            assert!(cal.is_business_day(rolled));
            assert_eq!(cal.roll_forward(rolled), rolled);
            day = day.succ_opt().unwrap();
        }
    }
}
