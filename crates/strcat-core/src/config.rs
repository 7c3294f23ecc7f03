//! Benchmark configuration and validation.
//!
//! [`BenchConfig`] is the input to [`run`](crate::run).
//! [`validate()`](BenchConfig::validate) checks every structural invariant
//! before the dataset is built or any timer starts.

use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroU32;

use crate::dataset::{checked_capacity, DEFAULT_ITERATIONS, DEFAULT_TOKEN};
use crate::error::ConfigError;
use crate::strategy::{standard_strategies, ConcatStrategy, StrategyKind};

/// Everything one pipeline run needs.
pub struct BenchConfig {
    /// Number of tokens to concatenate. Signed so that a negative value
    /// from the command line reaches validation. Default: 100000.
    pub iterations: i64,
    /// The token repeated in the dataset. Default: `"example"`.
    pub token: String,
    /// Name of the strategy every ratio is computed against.
    /// Default: `"builder"`.
    pub reference: String,
    /// Independent timed runs per strategy. Default: 1.
    pub repeat: u32,
    /// Strategies in report order. Default: [`standard_strategies()`].
    pub strategies: Vec<Box<dyn ConcatStrategy>>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            token: DEFAULT_TOKEN.to_owned(),
            reference: StrategyKind::Builder.name().to_owned(),
            repeat: 1,
            strategies: standard_strategies(),
        }
    }
}

impl fmt::Debug for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("BenchConfig")
            .field("iterations", &self.iterations)
            .field("token", &self.token)
            .field("reference", &self.reference)
            .field("repeat", &self.repeat)
            .field("strategies", &names)
            .finish()
    }
}

impl BenchConfig {
    /// Check every invariant that must hold before timing begins.
    ///
    /// Checks, in order: iteration count is non-negative, the output
    /// capacity fits in `usize`, repeat is at least 1, at least one
    /// strategy is registered, strategy names are unique, and the
    /// reference names a registered strategy.
    ///
    /// Returns the validated repeat count.
    pub fn validate(&self) -> Result<NonZeroU32, ConfigError> {
        checked_capacity(&self.token, self.iterations)?;
        let repeat = self.repeat_count()?;

        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }

        let mut seen = HashSet::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            if !seen.insert(strategy.name()) {
                return Err(ConfigError::DuplicateStrategy {
                    name: strategy.name().to_owned(),
                });
            }
        }

        if !seen.contains(self.reference.as_str()) {
            return Err(ConfigError::UnknownReference {
                name: self.reference.clone(),
            });
        }

        Ok(repeat)
    }

    /// The repeat count as a [`NonZeroU32`].
    pub fn repeat_count(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.repeat).ok_or(ConfigError::ZeroRepeat)
    }
}
