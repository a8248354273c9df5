use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("domain error: {message}")]
    Domain {
        message: String,
    },

    #[error("invalid interest rate: {rate} (must be greater than -100%)")]
    InvalidRate {
        rate: Rate,
    },

    #[error("invalid date format: {input:?}, expected {expected}")]
    DateFormat {
        input: String,
        expected: &'static str,
    },

    #[error("solver did not converge after {iterations} iterations (residual {residual})")]
    Convergence {
        iterations: u32,
        residual: rust_decimal::Decimal,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("could not read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config: {source}")]
    ConfigParse {
        #[from]
        source: serde_json::Error,
    },
}

impl LoanError {
    pub(crate) fn domain(message: impl Into<String>) -> Self {
        LoanError::Domain {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
