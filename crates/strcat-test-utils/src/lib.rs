//! Test utilities and mock strategies for strcat development.
//!
//! Provides mock implementations of [`ConcatStrategy`](strcat_core::ConcatStrategy)
//! in [`fixtures`] and small config builders for pipeline tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CallCounter, CountingStrategy, FailingStrategy, TruncatingStrategy};

use strcat_core::{BenchConfig, ConcatStrategy};

/// The string every strategy must produce for `n` copies of `token`.
pub fn expected_output(token: &str, n: usize) -> String {
    token.repeat(n)
}

/// A config over `iterations` copies of `token` with the standard strategies.
pub fn small_config(token: &str, iterations: i64) -> BenchConfig {
    BenchConfig {
        iterations,
        token: token.to_owned(),
        ..Default::default()
    }
}

/// A config with the given strategies, referenced against `reference`.
pub fn config_with(
    iterations: i64,
    reference: &str,
    strategies: Vec<Box<dyn ConcatStrategy>>,
) -> BenchConfig {
    BenchConfig {
        iterations,
        token: "ab".to_owned(),
        reference: reference.to_owned(),
        repeat: 1,
        strategies,
    }
}
