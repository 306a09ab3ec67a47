//! Random partition utility
//!
//! Splits a total into positive integer parts and prints them.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use segregation_sim::core::Result;
use segregation_sim::partition::randomly_distribute;

/// Randomly distribute a total into positive parts
#[derive(Parser, Debug)]
#[command(name = "distribute")]
struct Args {
    /// Total value to be distributed
    #[arg(default_value_t = 100)]
    total: u64,

    /// Number of parts
    #[arg(default_value_t = 5)]
    parts: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::debug!(seed, "distributing {} into {} parts", args.total, args.parts);

    let distribution = randomly_distribute(args.total, args.parts, &mut rng)?;
    println!("{:?}", distribution);
    Ok(())
}
