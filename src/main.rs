use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use who_growth::format::{UnitSystem, format_measurement};
use who_growth::validation::{GrowthRequest, parse_age_months};
use who_growth::{
    GrowthCalculator, GrowthConfig, MeasurementType, Sex, load_table, percentile_description,
};

#[derive(Parser, Debug)]
#[command(
    name = "who-growth",
    about = "WHO Child Growth Standards percentile calculator (0 to 24 months)"
)]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Show measurements in pounds/ounces and inches
    #[arg(long, global = true)]
    imperial: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Measurement at a given percentile
    Measurement {
        /// weight, length or head
        kind: MeasurementType,
        /// male/boy or female/girl
        sex: Sex,
        /// Age in whole months
        age: String,
        /// Percentile between 1 and 99
        #[arg(allow_negative_numbers = true)]
        percentile: f64,
    },

    /// Percentile of a given measurement
    Percentile {
        kind: MeasurementType,
        sex: Sex,
        age: String,
        /// Measurement in kg or cm
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

impl Cli {
    const fn units(&self) -> UnitSystem {
        if self.imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        }
    }
}

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = GrowthConfig::from_env();
    info!("{config}");
    let table = load_table(&config).context("Failed to load growth parameter tables")?;
    render(cli, &GrowthCalculator::new(&table))
}

/// Validate the parsed command, calculate, and format the output
fn render(cli: &Cli, calc: &GrowthCalculator<'_>) -> anyhow::Result<String> {
    let units = cli.units();

    match &cli.command {
        Commands::Measurement {
            kind,
            sex,
            age,
            percentile,
        } => {
            let request = GrowthRequest {
                kind: *kind,
                sex: *sex,
                age_months: parse_age_months(age, *kind, *sex)?,
                value: *percentile,
            };
            request.validate_as_percentile()?;
            let measurement = calc.calculate_measurement(
                request.age_months,
                request.sex,
                request.value,
                request.kind,
            )?;

            if cli.json {
                let out = serde_json::json!({
                    "kind": request.kind,
                    "sex": request.sex,
                    "age_months": request.age_months,
                    "percentile": request.value,
                    "measurement": measurement,
                    "unit": request.kind.unit(),
                });
                Ok(serde_json::to_string_pretty(&out)?)
            } else {
                Ok(format!(
                    "{} at the {}: {}",
                    request.kind.label(),
                    percentile_description(request.value),
                    format_measurement(request.kind, measurement, units)
                ))
            }
        }
        Commands::Percentile {
            kind,
            sex,
            age,
            value,
        } => {
            let request = GrowthRequest {
                kind: *kind,
                sex: *sex,
                age_months: parse_age_months(age, *kind, *sex)?,
                value: *value,
            };
            request.validate_as_measurement()?;
            let assessment =
                calc.assess(request.age_months, request.sex, request.value, request.kind)?;

            if cli.json {
                Ok(serde_json::to_string_pretty(&assessment)?)
            } else {
                Ok(format!(
                    "{} is at the {} (z = {:.2})",
                    format_measurement(request.kind, request.value, units),
                    assessment.description,
                    assessment.z_score
                ))
            }
        }
    }
}
