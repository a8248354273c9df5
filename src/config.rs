use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::payments::dates::validate_payment_day;

/// purchase date format accepted in configuration (`DD/MM/YYYY`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_FORMAT_HINT: &str = "DD/MM/YYYY";

/// parse a `DD/MM/YYYY` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| LoanError::DateFormat {
        input: input.to_string(),
        expected: DATE_FORMAT_HINT,
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// loan parameters as written in a JSON config file
///
/// Every field is optional so a file can be partial and completed from the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanConfig {
    pub capital: Option<Money>,
    pub annual_effective_rate: Option<Rate>,
    pub payment_day: Option<u32>,
    pub periods: Option<u32>,
    /// `DD/MM/YYYY`
    pub purchase_date: Option<String>,
    pub initial_guess: Option<Decimal>,
}

impl LoanConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoanError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// validated loan terms, immutable for one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanTerms {
    capital: Money,
    annual_effective_rate: Rate,
    payment_day: u32,
    periods: u32,
    purchase_date: NaiveDate,
    initial_guess: Decimal,
}

impl LoanTerms {
    pub fn builder() -> LoanTermsBuilder {
        LoanTermsBuilder::new()
    }

    pub fn capital(&self) -> Money {
        self.capital
    }

    pub fn annual_effective_rate(&self) -> Rate {
        self.annual_effective_rate
    }

    pub fn payment_day(&self) -> u32 {
        self.payment_day
    }

    pub fn periods(&self) -> u32 {
        self.periods
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// starting point for the payment solver
    pub fn initial_guess(&self) -> Decimal {
        self.initial_guess
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoanTermsBuilder {
    capital: Option<Money>,
    annual_effective_rate: Option<Rate>,
    payment_day: Option<u32>,
    periods: Option<u32>,
    purchase_date: Option<NaiveDate>,
    initial_guess: Option<Decimal>,
}

impl LoanTermsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// builder pre-filled from a config file's values
    pub fn from_config(config: &LoanConfig) -> Result<Self> {
        Self::new().apply(config)
    }

    /// overlay every value present in `config`
    pub fn apply(mut self, config: &LoanConfig) -> Result<Self> {
        if let Some(capital) = config.capital {
            self.capital = Some(capital);
        }
        if let Some(rate) = config.annual_effective_rate {
            self.annual_effective_rate = Some(rate);
        }
        if let Some(day) = config.payment_day {
            self.payment_day = Some(day);
        }
        if let Some(periods) = config.periods {
            self.periods = Some(periods);
        }
        if let Some(date) = &config.purchase_date {
            self.purchase_date = Some(parse_date(date)?);
        }
        if let Some(guess) = config.initial_guess {
            self.initial_guess = Some(guess);
        }
        Ok(self)
    }

    pub fn capital(mut self, capital: Money) -> Self {
        self.capital = Some(capital);
        self
    }

    pub fn annual_effective_rate(mut self, rate: Rate) -> Self {
        self.annual_effective_rate = Some(rate);
        self
    }

    pub fn payment_day(mut self, day: u32) -> Self {
        self.payment_day = Some(day);
        self
    }

    pub fn periods(mut self, periods: u32) -> Self {
        self.periods = Some(periods);
        self
    }

    pub fn purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    pub fn initial_guess(mut self, guess: Decimal) -> Self {
        self.initial_guess = Some(guess);
        self
    }

    /// build with system time for a missing purchase date
    pub fn build(self) -> Result<LoanTerms> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.build_with_time(&time)
    }

    /// build using `time_provider` for a missing purchase date
    pub fn build_with_time(self, time_provider: &SafeTimeProvider) -> Result<LoanTerms> {
        let capital = self.capital.ok_or_else(|| missing("capital"))?;
        if !capital.is_positive() {
            return Err(LoanError::domain(format!("capital must be positive, got {}", capital)));
        }

        let annual_effective_rate = self
            .annual_effective_rate
            .ok_or_else(|| missing("annual_effective_rate"))?;
        annual_effective_rate.growth_factor()?;

        let payment_day = self.payment_day.ok_or_else(|| missing("payment_day"))?;
        validate_payment_day(payment_day)?;

        let periods = self.periods.ok_or_else(|| missing("periods"))?;
        if periods == 0 {
            return Err(LoanError::domain("period count must be at least 1"));
        }

        let purchase_date = match self.purchase_date {
            Some(date) => date,
            None => {
                let today = time_provider.now().date_naive();
                info!("no purchase date given, using {}", format_date(today));
                today
            }
        };

        Ok(LoanTerms {
            capital,
            annual_effective_rate,
            payment_day,
            periods,
            purchase_date,
            initial_guess: self.initial_guess.unwrap_or(Decimal::ONE),
        })
    }
}

fn missing(field: &str) -> LoanError {
    LoanError::InvalidConfiguration {
        message: format!("{} is required", field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("01/01/2024").unwrap(), date(2024, 1, 1));
        assert_eq!(parse_date(" 29/02/2024 ").unwrap(), date(2024, 2, 29));
        assert_eq!(format_date(date(2024, 3, 5)), "05/03/2024");
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        for input in ["2024-01-01", "01-01-2024", "31/02/2024", "13/13/2024", ""] {
            assert!(
                matches!(parse_date(input), Err(LoanError::DateFormat { .. })),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_config_from_json() {
        let config = LoanConfig::from_json(
            r#"{
                "capital": "10000",
                "annual_effective_rate": "0.18",
                "payment_day": 15,
                "periods": 12,
                "purchase_date": "01/01/2024"
            }"#,
        )
        .unwrap();

        assert_eq!(config.capital, Some(Money::from_major(10_000)));
        assert_eq!(config.annual_effective_rate, Some(Rate::from_percentage(18)));
        assert_eq!(config.initial_guess, None);

        let terms = LoanTermsBuilder::from_config(&config).unwrap().build().unwrap();
        assert_eq!(terms.purchase_date(), date(2024, 1, 1));
        assert_eq!(terms.initial_guess(), Decimal::ONE);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result = LoanConfig::from_json(r#"{"capitol": "10000"}"#);
        assert!(matches!(result, Err(LoanError::ConfigParse { .. })));
    }

    #[test]
    fn test_config_bad_date_is_format_error() {
        let config = LoanConfig {
            purchase_date: Some("2024-01-01".to_string()),
            ..LoanConfig::default()
        };
        assert!(matches!(LoanTermsBuilder::from_config(&config), Err(LoanError::DateFormat { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = LoanConfig::from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(LoanError::ConfigRead { .. })));
    }

    #[test]
    fn test_apply_overrides() {
        let base = LoanConfig {
            capital: Some(Money::from_major(5_000)),
            periods: Some(6),
            ..LoanConfig::default()
        };
        let overrides = LoanConfig {
            periods: Some(24),
            ..LoanConfig::default()
        };

        let terms = LoanTermsBuilder::from_config(&base)
            .unwrap()
            .apply(&overrides)
            .unwrap()
            .annual_effective_rate(Rate::from_percentage(10))
            .payment_day(5)
            .purchase_date(date(2024, 1, 1))
            .build()
            .unwrap();

        assert_eq!(terms.capital(), Money::from_major(5_000));
        assert_eq!(terms.periods(), 24);
    }

    #[test]
    fn test_missing_purchase_date_uses_clock() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 10, 30, 0).unwrap();
        let time = SafeTimeProvider::new(TimeSource::Test(now));

        let terms = LoanTerms::builder()
            .capital(Money::from_major(1_000))
            .annual_effective_rate(Rate::from_percentage(12))
            .payment_day(10)
            .periods(3)
            .build_with_time(&time)
            .unwrap();

        assert_eq!(terms.purchase_date(), date(2024, 5, 20));
    }

    #[test]
    fn test_validation() {
        let base = LoanTerms::builder()
            .capital(Money::from_major(1_000))
            .annual_effective_rate(Rate::from_percentage(12))
            .payment_day(10)
            .periods(3)
            .purchase_date(date(2024, 1, 1));

        assert!(base.clone().build().is_ok());
        assert!(matches!(
            base.clone().capital(Money::ZERO).build(),
            Err(LoanError::Domain { .. })
        ));
        assert!(matches!(
            base.clone().annual_effective_rate(Rate::from_decimal(dec!(-1))).build(),
            Err(LoanError::InvalidRate { .. })
        ));
        assert!(base.clone().payment_day(0).build().is_err());
        assert!(base.clone().payment_day(32).build().is_err());
        assert!(base.clone().periods(0).build().is_err());
        assert!(matches!(
            LoanTerms::builder().periods(3).build(),
            Err(LoanError::InvalidConfiguration { .. })
        ));
    }
}
