//! loan-schedule - payment plans for loans paid on Peruvian business days.
//!
//! # Usage
//!
//! ```bash
//! # Plan from a config file
//! loan-schedule plan --config loan.json
//!
//! # Plan from flags, with the full schedule
//! loan-schedule plan --capital 10000 --rate 0.18 --payment-day 15 \
//!     --periods 12 --purchase-date 01/01/2024 --schedule
//!
//! # Holidays of a year
//! loan-schedule holidays --year 2024
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;

use loan_schedule_rs::{LoanCalculator, LoanConfig, LoanTermsBuilder, PERU};

mod cli;
mod output;

use cli::{Cli, Commands, HolidaysArgs, OutputFormat, PlanArgs};
use output::PlanReport;

fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(cli.log_level())
        .init()
        .context("failed to initialize logging")?;

    match cli.command {
        Commands::Plan(args) => plan(args)?,
        Commands::Holidays(args) => holidays(args),
    }

    Ok(())
}

fn plan(args: PlanArgs) -> Result<()> {
    let mut builder = LoanTermsBuilder::new();
    if let Some(path) = &args.config {
        info!("reading loan terms from {}", path.display());
        builder = builder.apply(&LoanConfig::from_file(path)?)?;
    }
    let terms = builder.apply(&args.overrides())?.build()?;

    let quote = LoanCalculator::default().quote(&terms)?;
    let schedule = if args.schedule {
        Some(quote.schedule()?)
    } else {
        None
    };

    match args.format {
        OutputFormat::Text => {
            output::print_quote(&quote);
            if let Some(schedule) = &schedule {
                output::print_schedule(schedule);
            }
        }
        OutputFormat::Json => output::print_json(&PlanReport {
            quote: &quote,
            schedule,
        })?,
    }

    Ok(())
}

fn holidays(args: HolidaysArgs) {
    output::print_holidays(args.year, &PERU.holidays(args.year));
}
