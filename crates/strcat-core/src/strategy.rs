//! The [`ConcatStrategy`] trait and the four standard strategies.
//!
//! Each strategy borrows the [`Dataset`] and returns a freshly owned
//! `String`. Strategies hold no state, so one instance can be run any
//! number of times.

use std::fmt;
use std::str::FromStr;

use bytes::BytesMut;

use crate::dataset::Dataset;
use crate::error::{ConfigError, StrategyError};

/// One way of joining every token of a [`Dataset`] into a single string.
///
/// # Contract
///
/// - `concat()` MUST return the tokens joined in order, with no separator.
/// - `&self`: strategies do not keep state between runs.
/// - `name()` is used as the row label and must be unique within a run.
///
/// # Object safety
///
/// This trait is object-safe; [`BenchConfig`](crate::BenchConfig) stores
/// strategies as `Vec<Box<dyn ConcatStrategy>>`.
///
/// # Examples
///
/// ```
/// use strcat_core::{ConcatStrategy, Dataset, StrategyError};
///
/// struct Join;
///
/// impl ConcatStrategy for Join {
///     fn name(&self) -> &str { "join" }
///
///     fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
///         Ok(dataset.tokens().collect::<Vec<_>>().join(""))
///     }
/// }
///
/// let ds = Dataset::generate("ab", 3).unwrap();
/// assert_eq!(Join.concat(&ds).unwrap(), "ababab");
/// ```
pub trait ConcatStrategy {
    /// Row label in the report.
    fn name(&self) -> &str;

    /// Concatenate every token of `dataset`.
    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError>;
}

// ── StrategyKind ───────────────────────────────────────────────────

/// The four standard strategies, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Repeated `+` on a copied accumulator.
    Operator,
    /// Pre-sized `String` with `push_str`.
    Builder,
    /// Pre-sized `BytesMut` finalized into a `String`.
    Buffer,
    /// Repeated `format!("{}{}")`.
    Template,
}

impl StrategyKind {
    /// Every kind in declaration order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Operator,
        StrategyKind::Builder,
        StrategyKind::Buffer,
        StrategyKind::Template,
    ];

    /// Short name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Builder => "builder",
            Self::Buffer => "buffer",
            Self::Template => "template",
        }
    }

    /// Build the strategy for this kind.
    pub fn strategy(self) -> Box<dyn ConcatStrategy> {
        match self {
            Self::Operator => Box::new(OperatorConcat),
            Self::Builder => Box::new(BuilderConcat),
            Self::Buffer => Box::new(BufferConcat),
            Self::Template => Box::new(TemplateConcat),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStrategy { name: s.to_owned() })
    }
}

/// The four standard strategies in declaration order.
pub fn standard_strategies() -> Vec<Box<dyn ConcatStrategy>> {
    StrategyKind::ALL.into_iter().map(StrategyKind::strategy).collect()
}

// ── Strategies ─────────────────────────────────────────────────────

/// Start empty; each step builds a new string from the previous result
/// plus the token. O(n²) bytes copied.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperatorConcat;

impl ConcatStrategy for OperatorConcat {
    fn name(&self) -> &str {
        StrategyKind::Operator.name()
    }

    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
        let mut acc = String::new();
        for token in dataset.tokens() {
            // New string every step; the old accumulator is copied, not grown.
            acc = acc.clone() + token;
        }
        Ok(acc)
    }
}

/// Reserve the final length up front, then append.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuilderConcat;

impl ConcatStrategy for BuilderConcat {
    fn name(&self) -> &str {
        StrategyKind::Builder.name()
    }

    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
        let requested = dataset.total_bytes();
        let mut out = String::new();
        out.try_reserve_exact(requested)
            .map_err(|_| StrategyError::AllocationFailed { requested })?;
        for token in dataset.tokens() {
            out.push_str(token);
        }
        Ok(out)
    }
}

/// Same as [`BuilderConcat`] but accumulates raw bytes in a [`BytesMut`].
///
/// `BytesMut` has no fallible reserve. Requests above `isize::MAX` are
/// rejected up front; an out-of-memory below that limit aborts.
#[derive(Clone, Copy, Debug, Default)]
pub struct BufferConcat;

/// Reject capacities `BytesMut::with_capacity` would panic on.
fn buffer_capacity(requested: usize) -> Result<usize, StrategyError> {
    if requested > isize::MAX as usize {
        return Err(StrategyError::AllocationFailed { requested });
    }
    Ok(requested)
}

impl ConcatStrategy for BufferConcat {
    fn name(&self) -> &str {
        StrategyKind::Buffer.name()
    }

    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
        let mut buf = BytesMut::with_capacity(buffer_capacity(dataset.total_bytes())?);
        for token in dataset.tokens() {
            buf.extend_from_slice(token.as_bytes());
        }
        String::from_utf8(Vec::from(buf)).map_err(|e| StrategyError::InvalidUtf8 {
            reason: e.to_string(),
        })
    }
}

/// Start empty; each step formats the previous result and the token into
/// a two-slot template.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateConcat;

impl ConcatStrategy for TemplateConcat {
    fn name(&self) -> &str {
        StrategyKind::Template.name()
    }

    fn concat(&self, dataset: &Dataset) -> Result<String, StrategyError> {
        let mut acc = String::new();
        for token in dataset.tokens() {
            acc = format!("{acc}{token}");
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_all(ds: &Dataset) -> Vec<(String, String)> {
        standard_strategies()
            .iter()
            .map(|s| (s.name().to_owned(), s.concat(ds).unwrap()))
            .collect()
    }

    #[test]
    fn all_strategies_agree_on_small_input() {
        let ds = Dataset::generate("ab", 3).unwrap();
        for (name, out) in run_all(&ds) {
            assert_eq!(out, "ababab", "strategy {name}");
        }
    }

    #[test]
    fn empty_dataset_yields_empty_string() {
        let ds = Dataset::generate("ab", 0).unwrap();
        for (name, out) in run_all(&ds) {
            assert!(out.is_empty(), "strategy {name} returned {out:?}");
        }
    }

    #[test]
    fn presized_strategies_handle_default_profile() {
        let ds = Dataset::generate("example", 100_000).unwrap();
        for result in [BuilderConcat.concat(&ds), BufferConcat.concat(&ds)] {
            let out = result.unwrap();
            assert_eq!(out.len(), 700_000);
            assert!(out.starts_with("exampleexample"));
        }
    }

    #[test]
    fn multibyte_tokens_survive_the_byte_buffer() {
        let ds = Dataset::generate("héllo→", 4).unwrap();
        assert_eq!(BufferConcat.concat(&ds).unwrap(), "héllo→".repeat(4));
    }

    #[test]
    fn buffer_rejects_capacity_it_cannot_reserve() {
        let too_big = isize::MAX as usize + 1;
        assert_eq!(
            buffer_capacity(too_big),
            Err(StrategyError::AllocationFailed { requested: too_big })
        );
        assert_eq!(
            buffer_capacity(usize::MAX),
            Err(StrategyError::AllocationFailed {
                requested: usize::MAX
            })
        );
        assert_eq!(buffer_capacity(700_000), Ok(700_000));
    }

    #[test]
    fn dataset_is_not_mutated() {
        let ds = Dataset::generate("xy", 5).unwrap();
        let before = ds.clone();
        run_all(&ds);
        assert_eq!(ds, before);
    }

    #[test]
    fn kinds_in_declaration_order() {
        let names: Vec<String> = standard_strategies()
            .iter()
            .map(|s| s.name().to_owned())
            .collect();
        assert_eq!(names, ["operator", "builder", "buffer", "template"]);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Builder".parse::<StrategyKind>(), Ok(StrategyKind::Builder));
        assert_eq!(" buffer ".parse::<StrategyKind>(), Ok(StrategyKind::Buffer));
        assert_eq!(
            "sprintf".parse::<StrategyKind>(),
            Err(ConfigError::UnknownStrategy {
                name: "sprintf".into()
            })
        );
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
            assert_eq!(kind.strategy().name(), kind.name());
        }
    }

    proptest! {
        #[test]
        fn every_strategy_repeats_the_token(token in "\\PC{0,6}", n in 0i64..200) {
            let ds = Dataset::generate(&token, n).unwrap();
            let expected = token.repeat(n as usize);
            for (name, out) in run_all(&ds) {
                prop_assert_eq!(&out, &expected, "strategy {}", name);
            }
        }
    }
}
