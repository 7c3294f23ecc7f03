//! Benchmark profiles for the strcat concatenation benchmark.
//!
//! Provides pre-built [`BenchConfig`] profiles for benches and the CLI:
//!
//! - [`reference_profile`]: 100000 x `"example"`, all four strategies
//! - [`smoke_profile`]: 1000 tokens, all four strategies
//! - [`stress_profile`]: 1M tokens, pre-sized strategies only
//!
//! [`BENCH_COUNTS`] are the dataset sizes the per-strategy benches sweep.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strcat_core::{BenchConfig, StrategyKind, DEFAULT_TOKEN};

/// Dataset sizes for the per-strategy criterion sweep.
///
/// Capped at 10K: the copying strategies are quadratic.
pub const BENCH_COUNTS: [i64; 3] = [100, 1_000, 10_000];

/// Build the reference profile: 100000 tokens of `"example"`, all four
/// strategies, ratios against the builder.
pub fn reference_profile() -> BenchConfig {
    BenchConfig::default()
}

/// Build a smoke profile: 1000 tokens, all four strategies.
///
/// Small enough for the full comparison to run inside a criterion sample.
pub fn smoke_profile() -> BenchConfig {
    BenchConfig {
        iterations: 1_000,
        ..Default::default()
    }
}

/// Build a stress profile: 1M tokens through the pre-sized strategies.
///
/// The operator and template strategies are left out; at this size
/// they copy terabytes.
pub fn stress_profile() -> BenchConfig {
    BenchConfig {
        iterations: 1_000_000,
        token: DEFAULT_TOKEN.to_owned(),
        reference: StrategyKind::Builder.name().to_owned(),
        repeat: 1,
        strategies: vec![
            StrategyKind::Builder.strategy(),
            StrategyKind::Buffer.strategy(),
        ],
    }
}
