//! Reusable strategy test fixtures.
//!
//! - [`CountingStrategy`]: joins tokens correctly and counts its calls.
//! - [`FailingStrategy`]: fails deterministically after N calls.
//! - [`TruncatingStrategy`]: drops the last token, producing short output.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use strcat_core::{ConcatStrategy, Dataset, StrategyError};

/// Shared handle on a strategy's call count.
///
/// Strategies are moved into a [`BenchConfig`](strcat_core::BenchConfig);
/// keep a clone of the counter to inspect calls afterwards.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// How many times `concat()` has been called.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    fn bump(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

fn join(dataset: &Dataset) -> String {
    dataset.tokens().collect()
}

/// Joins tokens correctly; records every call.
pub struct CountingStrategy {
    pub name: String,
    calls: CallCounter,
}

impl CountingStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: CallCounter::default(),
        }
    }

    /// Handle on the call counter.
    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl ConcatStrategy for CountingStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
        self.calls.bump();
        Ok(join(dataset))
    }
}

/// Fails deterministically after a configurable number of successful calls.
pub struct FailingStrategy {
    pub name: String,
    pub succeed_count: usize,
    calls: CallCounter,
}

impl FailingStrategy {
    /// Create a strategy that succeeds `succeed_count` times then fails.
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            calls: CallCounter::default(),
        }
    }

    /// Handle on the call counter.
    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl ConcatStrategy for FailingStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
        let n = self.calls.bump();
        if n >= self.succeed_count {
            return Err(StrategyError::ExecutionFailed {
                reason: format!(
                    "deliberate failure after {} successful calls",
                    self.succeed_count
                ),
            });
        }
        Ok(join(dataset))
    }
}

/// Returns every token but the last.
pub struct TruncatingStrategy {
    pub name: String,
}

impl TruncatingStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ConcatStrategy for TruncatingStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
        let keep = dataset.len().saturating_sub(1);
        Ok(dataset.tokens().take(keep).collect())
    }
}
