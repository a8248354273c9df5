//! Newton-Raphson root finding over `Decimal`.
//!
//! Only scalar equations with an analytic derivative are needed here: the
//! payment equation (linear in the unknown payment) and the `y^k = x` roots
//! used by the rate-basis conversions.

use log::trace;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{LoanError, Result};

/// default convergence tolerance on both residual and step size
pub const DEFAULT_TOLERANCE: Decimal = dec!(0.0000000001);

/// default iteration bound
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub tolerance: Decimal,
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn new(tolerance: Decimal, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// root and iteration statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    pub root: Decimal,
    pub iterations: u32,
    pub residual: Decimal,
}

/// Newton-Raphson iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
///
/// Converges when either `|f(x)|` or the step falls below the tolerance.
/// A vanishing derivative or exhausting `max_iterations` yields
/// [`LoanError::Convergence`].
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: Decimal,
    config: &SolverConfig,
) -> Result<SolverResult>
where
    F: Fn(Decimal) -> Result<Decimal>,
    DF: Fn(Decimal) -> Result<Decimal>,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x)?;
        trace!("newton iteration {}: x = {}, f(x) = {}", iteration, x, fx);

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x)?;
        if dfx.is_zero() {
            return Err(LoanError::Convergence {
                iterations: iteration,
                residual: fx.abs(),
            });
        }

        let step = fx
            .checked_div(dfx)
            .ok_or_else(|| LoanError::domain("newton step overflowed"))?;
        x = x
            .checked_sub(step)
            .ok_or_else(|| LoanError::domain("newton iterate overflowed"))?;

        if step.abs() < config.tolerance {
            let final_fx = f(x)?;
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(LoanError::Convergence {
        iterations: config.max_iterations,
        residual: f(x)?.abs(),
    })
}
