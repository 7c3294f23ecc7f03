//! The input dataset: `count` copies of one short token.

use crate::error::ConfigError;

/// Token used when none is configured.
pub const DEFAULT_TOKEN: &str = "example";

/// Number of tokens used when no count is configured.
pub const DEFAULT_ITERATIONS: i64 = 100_000;

/// An ordered, immutable sequence of identical text tokens.
///
/// Built once by [`Dataset::generate`] before any timer starts; strategies
/// only ever borrow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    token: String,
    tokens: Vec<String>,
}

impl Dataset {
    /// Produce `count` copies of `token`.
    ///
    /// Fails with [`ConfigError::NegativeIterations`] for a negative count,
    /// [`ConfigError::CapacityOverflow`] when the concatenated length
    /// would not fit in `usize`, and [`ConfigError::DatasetAllocationFailed`]
    /// when the token vector itself cannot be allocated.
    pub fn generate(token: &str, count: i64) -> Result<Self, ConfigError> {
        checked_capacity(token, count)?;
        let n = checked_count(count)?;

        let mut tokens = Vec::new();
        tokens
            .try_reserve_exact(n)
            .map_err(|_| ConfigError::DatasetAllocationFailed { iterations: count })?;
        tokens.extend(std::iter::repeat_n(token, n).map(str::to_owned));

        Ok(Self {
            token: token.to_owned(),
            tokens,
        })
    }

    /// The repeated token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the dataset holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Length in bytes of the fully concatenated output.
    ///
    /// This is the capacity the pre-sizing strategies reserve. Cannot
    /// overflow: [`generate`](Self::generate) already checked it.
    pub fn total_bytes(&self) -> usize {
        self.token.len() * self.tokens.len()
    }
}

/// Convert a signed count to `usize`, rejecting negatives.
pub(crate) fn checked_count(count: i64) -> Result<usize, ConfigError> {
    if count < 0 {
        return Err(ConfigError::NegativeIterations { value: count });
    }
    usize::try_from(count).map_err(|_| ConfigError::CapacityOverflow {
        token_len: 0,
        iterations: count,
    })
}

/// Check that `token.len() * count` fits in `usize`.
pub(crate) fn checked_capacity(token: &str, count: i64) -> Result<usize, ConfigError> {
    let overflow = || ConfigError::CapacityOverflow {
        token_len: token.len(),
        iterations: count,
    };
    let n = checked_count(count).map_err(|e| match e {
        ConfigError::CapacityOverflow { .. } => overflow(),
        other => other,
    })?;
    token.len().checked_mul(n).ok_or_else(overflow)
}
