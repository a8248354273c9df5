//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use rust_decimal::Decimal;

use loan_schedule_rs::{LoanConfig, Money, Rate};

/// Loan payment schedules on Peruvian business days
#[derive(Parser)]
#[command(name = "loan-schedule")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the payment dates and amounts of a loan
    Plan(PlanArgs),

    /// List the observed Peruvian public holidays of a year
    Holidays(HolidaysArgs),
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// JSON file with the loan terms; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Amount financed
    #[arg(long)]
    pub capital: Option<Decimal>,

    /// Effective annual rate as a fraction (0.18 for 18%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Day of the month payments fall on (1-31)
    #[arg(long)]
    pub payment_day: Option<u32>,

    /// Number of payments
    #[arg(long)]
    pub periods: Option<u32>,

    /// Purchase date (DD/MM/YYYY). Defaults to today.
    #[arg(long)]
    pub purchase_date: Option<String>,

    /// Starting point for the payment solver
    #[arg(long)]
    pub initial_guess: Option<Decimal>,

    /// Also print every payment date with its interest and principal split
    #[arg(long)]
    pub schedule: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl PlanArgs {
    /// command-line values as a partial config
    pub fn overrides(&self) -> LoanConfig {
        LoanConfig {
            capital: self.capital.map(Money::from_decimal),
            annual_effective_rate: self.rate.map(Rate::from_decimal),
            payment_day: self.payment_day,
            periods: self.periods,
            purchase_date: self.purchase_date.clone(),
            initial_guess: self.initial_guess,
        }
    }
}

#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Calendar year (1583-9999)
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1583..=9999))]
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines
    #[default]
    Text,
    /// JSON document
    Json,
}
