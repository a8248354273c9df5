//! Business-day aware loan payment schedules.
//!
//! A loan is quoted from its capital, effective annual rate, payment day of
//! the month and number of periods. Payment dates follow the payment day
//! month by month and are rolled forward past weekends and Peruvian public
//! holidays; the constant payment is then solved so that the daily-discounted
//! payments equal the capital.

pub mod calculator;
pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;
pub mod solver;

// re-export key types
pub use calculator::{LoanCalculator, LoanQuote};
pub use calendar::{BusinessDayCalendar, HolidayCalendar, HolidayRule, PERU};
pub use config::{parse_date, LoanConfig, LoanTerms, LoanTermsBuilder};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use payments::{
    AmortizationSchedule, PaymentDateGenerator, PaymentPlan, PaymentSolver, ScheduledPayment,
};
pub use solver::SolverConfig;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
