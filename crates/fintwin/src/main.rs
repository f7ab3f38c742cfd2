use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use fintwin::report::{events_report, monte_carlo_report, projection_report, retirement_report};
use fintwin::{init_logging, load_scenario};
use fintwin_core::{ReturnNoise, TrajectoryComparison};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Rows in long tables are printed every this many years
const TABLE_STEP: u32 = 5;

#[derive(Parser, Debug)]
#[command(name = "fintwin")]
#[command(about = "Project net worth and measure how life events change it")]
struct Args {
    /// Path to the scenario YAML file
    scenario: PathBuf,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Baseline vs with-events trajectory up to the target age
    Project {
        #[arg(long)]
        target_age: Option<u32>,
    },
    /// Earliest age each trajectory reaches the target net worth
    Retirement {
        #[arg(long)]
        target: Option<f64>,
    },
    /// Percentile bands and success probability over perturbed returns
    MonteCarlo {
        #[arg(long)]
        target_age: Option<u32>,
        #[arg(long)]
        target: Option<f64>,
        #[arg(long)]
        runs: Option<usize>,
        /// Standard deviation of normal return noise; overrides the file
        #[arg(long)]
        volatility: Option<f64>,
        /// Seed for reproducible runs; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn rounded(comparison: TrajectoryComparison) -> TrajectoryComparison {
    TrajectoryComparison {
        baseline: comparison.baseline.rounded(),
        simulated: comparison.simulated.rounded(),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref(), &args.log_level)?;

    let data = load_scenario(&args.scenario)
        .wrap_err_with(|| format!("failed to load {}", args.scenario.display()))?;
    let scenario = data.to_scenario()?;
    let title = data.name.clone().unwrap_or_else(|| "Scenario".to_string());
    tracing::info!(
        scenario = %title,
        events = scenario.ledger().len(),
        "scenario loaded"
    );

    match args.command {
        Command::Project { target_age } => {
            let target_age = target_age.unwrap_or(data.targets.target_age);
            let comparison = rounded(scenario.compare(target_age)?);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print!("{}", projection_report(&title, &comparison, TABLE_STEP));
                if !scenario.ledger().is_empty() {
                    println!("Events:");
                    print!(
                        "{}",
                        events_report(scenario.events(), scenario.profile().current_age)
                    );
                }
            }
        }
        Command::Retirement { target } => {
            let target = target.unwrap_or(data.targets.target_net_worth);
            let impact = scenario.calculate_retirement_impact(target)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&impact)?);
            } else {
                print!("{}", retirement_report(&impact, target));
            }
        }
        Command::MonteCarlo {
            target_age,
            target,
            runs,
            volatility,
            seed,
        } => {
            let target_age = target_age.unwrap_or(data.targets.target_age);
            let target = target.unwrap_or(data.targets.target_net_worth);
            let mut config = data.monte_carlo.clone();
            if let Some(runs) = runs {
                config = config.with_runs(runs);
            }
            if let Some(std_dev) = volatility {
                config = config.with_noise(ReturnNoise::Normal { std_dev });
            }
            if config.noise.is_degenerate() {
                tracing::warn!("return noise is zero; runs match the deterministic projection");
            }
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            tracing::info!(runs = config.runs, seed, "starting monte carlo");

            let mut rng = SmallRng::seed_from_u64(seed);
            let result = scenario.monte_carlo(target_age, target, &config, &mut rng)?;
            if args.json {
                let output = serde_json::json!({ "seed": seed, "result": result });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", monte_carlo_report(&result, target_age, seed, TABLE_STEP));
            }
        }
    }

    Ok(())
}
