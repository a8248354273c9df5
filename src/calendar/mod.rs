//! Business day calendars.
//!
//! - [`HolidayCalendar`]: static table of named holiday rules
//! - [`BusinessDayCalendar`]: weekends plus holidays, with date rolling
//! - [`PERU`]: the national holiday table used for payment dates

mod business_day;
mod holiday;
mod peru;

pub use business_day::BusinessDayCalendar;
pub use holiday::{easter_sunday, HolidayCalendar, HolidayDate, HolidayRule};
pub use peru::{PERU, PERU_HOLIDAYS};
