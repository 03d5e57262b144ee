use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pit_core::{BusinessCategory, Region, compare_business, compare_salary};
use rust_decimal::Decimal;
use tracing::{debug, info};

use pit_cli::csv_loader;
use pit_cli::logging::init_tracing;
use pit_cli::report::{self, ComparisonRecord};
use pit_cli::utils::{parse_amount, parse_category, parse_region, salary_profile};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Vietnamese personal income tax calculator.
///
/// Compares salary and business household tax under the current law and the
/// revised law.
#[derive(Debug, Parser)]
#[command(name = "pit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare monthly salary tax under both laws
    Salary {
        /// Monthly gross income in VND (commas allowed)
        #[arg(short, long, value_parser = parse_amount)]
        gross: Decimal,

        /// Salary declared for insurance; defaults to the gross income
        #[arg(short, long, value_parser = parse_amount)]
        insurance_base: Option<Decimal>,

        /// Minimum-wage region (1-4 or I-IV)
        #[arg(short, long, default_value = "1", value_parser = parse_region)]
        region: Region,

        /// Number of registered dependents
        #[arg(short, long, default_value_t = 0)]
        dependents: u32,

        /// Print the full comparison as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Compare annual business household tax under both laws
    Business {
        /// Annual revenue in VND (commas allowed)
        #[arg(short, long, value_parser = parse_amount)]
        revenue: Decimal,

        /// Business category: distribution, production, services or leasing
        #[arg(short, long, default_value = "distribution", value_parser = parse_category)]
        category: BusinessCategory,

        /// Print the comparison as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Compare many salary scenarios from a CSV file, writing CSV to stdout
    Batch {
        /// CSV with columns gross_income, insurance_base_salary, region, dependents
        #[arg(short, long)]
        file: PathBuf,
    },
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_salary(
    gross: Decimal,
    insurance_base: Option<Decimal>,
    region: Region,
    dependents: u32,
    json: bool,
) -> Result<()> {
    let profile = salary_profile(gross, insurance_base, region, dependents)
        .context("Invalid salary arguments")?;
    debug!(?profile, "comparing salary tax");

    let comparison = compare_salary(&profile);

    if json {
        report::print_json(&comparison)
    } else {
        report::print_salary(&comparison, region, dependents);
        Ok(())
    }
}

fn run_business(
    revenue: Decimal,
    category: BusinessCategory,
    json: bool,
) -> Result<()> {
    debug!(revenue = %revenue, category = category.as_str(), "comparing business tax");

    let comparison = compare_business(revenue, category.flat_rate_percent());

    if json {
        report::print_json(&comparison)
    } else {
        report::print_business(&comparison, category);
        Ok(())
    }
}

fn run_batch(file: &Path) -> Result<()> {
    let scenarios = csv_loader::load_from_file(file)
        .with_context(|| format!("Failed to load scenarios from: {}", file.display()))?;

    info!("Loaded {} scenarios from {}", scenarios.len(), file.display());

    let records: Vec<ComparisonRecord> = scenarios
        .iter()
        .map(|s| ComparisonRecord::new(s.region, &s.profile, &compare_salary(&s.profile)))
        .collect();

    report::write_csv(&records, io::stdout().lock()).context("Failed to write comparison CSV")
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Salary {
            gross,
            insurance_base,
            region,
            dependents,
            json,
        } => run_salary(gross, insurance_base, region, dependents, json),
        Command::Business {
            revenue,
            category,
            json,
        } => run_business(revenue, category, json),
        Command::Batch { file } => run_batch(&file),
    }
}
