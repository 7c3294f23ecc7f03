//! Error types for the strcat benchmark.
//!
//! Two kinds reach the caller: configuration problems detected before any
//! timing begins, and failures raised inside a concatenation loop. Both are
//! wrapped in [`BenchError`] by [`run`](crate::run).

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BenchConfig::validate()`](crate::BenchConfig::validate)
/// and dataset generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The iteration count is negative.
    NegativeIterations {
        /// The configured count.
        value: i64,
    },
    /// The repeat count is zero; every strategy must run at least once.
    ZeroRepeat,
    /// `token.len() * iterations` does not fit in `usize`.
    CapacityOverflow {
        /// Length of the token in bytes.
        token_len: usize,
        /// The configured iteration count.
        iterations: i64,
    },
    /// The dataset's token vector could not be allocated.
    DatasetAllocationFailed {
        /// The configured iteration count.
        iterations: i64,
    },
    /// No strategies registered.
    NoStrategies,
    /// Two strategies share a name.
    DuplicateStrategy {
        /// The repeated name.
        name: String,
    },
    /// The reference strategy is not among the registered strategies.
    UnknownReference {
        /// The requested reference name.
        name: String,
    },
    /// A strategy name could not be parsed.
    UnknownStrategy {
        /// The unrecognised name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIterations { value } => {
                write!(f, "iteration count must be non-negative, got {value}")
            }
            Self::ZeroRepeat => write!(f, "repeat count must be at least 1"),
            Self::CapacityOverflow {
                token_len,
                iterations,
            } => write!(
                f,
                "{iterations} tokens of {token_len} bytes overflow the buffer capacity"
            ),
            Self::DatasetAllocationFailed { iterations } => {
                write!(f, "cannot allocate a dataset of {iterations} tokens")
            }
            Self::NoStrategies => write!(f, "no strategies registered"),
            Self::DuplicateStrategy { name } => {
                write!(f, "strategy '{name}' is registered more than once")
            }
            Self::UnknownReference { name } => {
                write!(f, "reference strategy '{name}' is not registered")
            }
            Self::UnknownStrategy { name } => write!(
                f,
                "unknown strategy '{name}' (expected operator, builder, buffer or template)"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── StrategyError ──────────────────────────────────────────────────

/// Errors raised by a single [`ConcatStrategy`](crate::ConcatStrategy) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrategyError {
    /// Reserving the accumulator capacity failed.
    AllocationFailed {
        /// Bytes requested.
        requested: usize,
    },
    /// The finished byte buffer was not valid UTF-8.
    InvalidUtf8 {
        /// Decoder message.
        reason: String,
    },
    /// The concatenated output does not have the expected length.
    OutputMismatch {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// Any other failure inside the concatenation loop.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "failed to reserve {requested} bytes")
            }
            Self::InvalidUtf8 { reason } => write!(f, "buffer is not valid UTF-8: {reason}"),
            Self::OutputMismatch { expected, actual } => {
                write!(f, "output is {actual} bytes, expected {expected}")
            }
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for StrategyError {}

// ── BenchError ─────────────────────────────────────────────────────

/// Errors returned by [`run`](crate::run).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// The configuration was rejected before any strategy ran.
    InvalidConfiguration(ConfigError),
    /// A strategy failed; the remaining strategies were not run.
    StrategyFailure {
        /// Name of the failing strategy.
        name: String,
        /// The underlying strategy error.
        reason: StrategyError,
    },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            Self::StrategyFailure { name, reason } => {
                write!(f, "strategy '{name}' failed: {reason}")
            }
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            Self::StrategyFailure { reason, .. } => Some(reason),
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_failure_chains_source() {
        let err = BenchError::StrategyFailure {
            name: "builder".into(),
            reason: StrategyError::AllocationFailed { requested: 64 },
        };
        assert_eq!(
            err.to_string(),
            "strategy 'builder' failed: failed to reserve 64 bytes"
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "failed to reserve 64 bytes");
    }

    #[test]
    fn config_error_converts_into_bench_error() {
        let err: BenchError = ConfigError::NegativeIterations { value: -3 }.into();
        assert!(matches!(
            err,
            BenchError::InvalidConfiguration(ConfigError::NegativeIterations { value: -3 })
        ));
        assert_eq!(
            err.to_string(),
            "invalid configuration: iteration count must be non-negative, got -3"
        );
    }
}
