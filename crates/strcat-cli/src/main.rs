//! `strcat`: time four string concatenation strategies and print a ratio
//! table.
//!
//! Run with:
//!   cargo run --release -p strcat-cli -- --iterations 100000
//!
//! Set `RUST_LOG=debug` to see per-strategy timings on stderr.

use anyhow::Context;
use clap::Parser;
use strcat_core::{run, BenchConfig, StrategyKind, DEFAULT_ITERATIONS, DEFAULT_TOKEN};

#[derive(Parser, Debug)]
#[command(name = "strcat")]
#[command(about = "Compare string concatenation strategies")]
struct Args {
    /// Number of tokens to concatenate.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS, allow_negative_numbers = true)]
    iterations: i64,

    /// Token repeated in the dataset.
    #[arg(long, default_value = DEFAULT_TOKEN)]
    token: String,

    /// Strategy every ratio is relative to (operator, builder, buffer, template).
    #[arg(long, value_parser = parse_reference, default_value = "builder")]
    reference: StrategyKind,

    /// Independent timed runs per strategy; the table shows the mean.
    #[arg(long, default_value = "1")]
    repeat: u32,
}

fn parse_reference(s: &str) -> Result<StrategyKind, String> {
    s.parse().map_err(|err: strcat_core::ConfigError| err.to_string())
}

impl Args {
    fn into_config(self) -> BenchConfig {
        BenchConfig {
            iterations: self.iterations,
            token: self.token,
            reference: self.reference.name().to_owned(),
            repeat: self.repeat,
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::init();

    let config = args.into_config();
    log::debug!("config: {config:?}");

    let report = run(&config).context("concatenation benchmark failed")?;
    print!("{report}");
    Ok(())
}
