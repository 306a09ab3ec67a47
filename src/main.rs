//! Segregation Sim - Entry Point
//!
//! Runs the Monte Carlo experiment and writes the result table with its
//! summary statistics to a JSON file. Flags override the config file; with
//! no flags the reference experiment runs (10,000 people, centered
//! counties, 1,000 iterations).

use std::path::PathBuf;

use clap::Parser;
use segregation_sim::aggregate::simulate;
use segregation_sim::core::{Policy, Result, SimulationConfig};

/// Monte Carlo simulation of county unevenness and Logan-Parman index bias
#[derive(Parser, Debug)]
#[command(name = "segregation_sim", version, about)]
struct Args {
    /// TOML config file (e.g. data/simulation.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total population of each simulated state
    #[arg(long)]
    population: Option<u32>,

    /// County generation policy
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Number of Monte Carlo iterations
    #[arg(long)]
    iterations: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the JSON output
    #[arg(long, short, default_value = "simulation_output.json")]
    output: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "segregation_sim=info",
        1 => "segregation_sim=debug",
        _ => "segregation_sim=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(population) = args.population {
        config.population = population;
    }
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let output = simulate(config)?;

    std::fs::write(&args.output, output.to_json()?)?;
    println!("{}", output.summary());
    println!("\nFull output written to {}", args.output.display());

    Ok(())
}
