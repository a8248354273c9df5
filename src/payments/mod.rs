pub mod amortization;
pub mod dates;
pub mod plan;

pub use amortization::{AmortizationSchedule, ScheduledPayment};
pub use dates::{next_payday, PaymentDateGenerator};
pub use plan::{days_between, PaymentPlan, PaymentSolver};
