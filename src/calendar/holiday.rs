use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// how a holiday resolves to a date in a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HolidayDate {
    /// same month and day every year
    Fixed { month: u32, day: u32 },
    /// fixed date observed on the nearest weekday: Saturday moves back to
    /// Friday, Sunday forward to Monday
    NearestWeekday { month: u32, day: u32 },
    /// offset in days from Easter Sunday
    EasterOffset { days: i64 },
}

/// named holiday rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidayRule {
    pub name: &'static str,
    pub date: HolidayDate,
}

impl HolidayRule {
    pub const fn fixed(name: &'static str, month: u32, day: u32) -> Self {
        Self {
            name,
            date: HolidayDate::Fixed { month, day },
        }
    }

    pub const fn nearest_weekday(name: &'static str, month: u32, day: u32) -> Self {
        Self {
            name,
            date: HolidayDate::NearestWeekday { month, day },
        }
    }

    pub const fn easter_offset(name: &'static str, days: i64) -> Self {
        Self {
            name,
            date: HolidayDate::EasterOffset { days },
        }
    }

    /// observed date of this holiday for `year`
    ///
    /// A weekend shift can move the observed date into the neighbouring year
    /// (January 1st on a Saturday is observed on December 31st).
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        match self.date {
            HolidayDate::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            HolidayDate::NearestWeekday { month, day } => {
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                match date.weekday() {
                    Weekday::Sat => date.pred_opt(),
                    Weekday::Sun => date.succ_opt(),
                    _ => Some(date),
                }
            }
            HolidayDate::EasterOffset { days } => {
                easter_sunday(year)?.checked_add_signed(Duration::days(days))
            }
        }
    }

    /// true if the rule is observed on `date`
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        neighbouring_years(date.year()).any(|y| self.observed_in(y) == Some(date))
    }
}

/// ordered, immutable set of holiday rules for one jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: &'static str,
    rules: &'static [HolidayRule],
}

impl HolidayCalendar {
    pub const fn new(name: &'static str, rules: &'static [HolidayRule]) -> Self {
        Self { name, rules }
    }

    /// calendar without holidays
    pub const fn empty() -> Self {
        Self::new("None", &[])
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// name of the first rule observed on `date`
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.falls_on(date))
            .map(|rule| rule.name)
    }

    /// observed holidays falling in `year`, in date order
    pub fn holidays(&self, year: i32) -> Vec<(&'static str, NaiveDate)> {
        let mut observed: Vec<(&'static str, NaiveDate)> = self
            .rules
            .iter()
            .flat_map(|rule| {
                neighbouring_years(year).filter_map(move |y| rule.observed_in(y).map(|d| (rule.name, d)))
            })
            .filter(|(_, date)| date.year() == year)
            .collect();
        observed.sort_by_key(|(_, date)| *date);
        observed
    }
}

fn neighbouring_years(year: i32) -> RangeInclusive<i32> {
    year.saturating_sub(1)..=year.saturating_add(1)
}

/// Easter Sunday by the anonymous Gregorian algorithm
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
