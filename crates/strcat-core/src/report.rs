//! Ratio computation and the comparison table.
//!
//! A [`Report`] is built from the ordered per-strategy results once every
//! strategy has finished. Rows keep the order in which strategies ran, so
//! the rendered table is reproducible.

use std::fmt;
use std::time::Duration;

use indexmap::IndexMap;

use crate::error::ConfigError;
use crate::timing::{format_elapsed, Timing};

/// Width of the `=` and `-` separator lines.
pub const SEPARATOR_WIDTH: usize = 60;

/// How a strategy compares with the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Ratio below 1.00 at two decimals.
    Faster,
    /// Ratio is 1.00 at two decimals.
    Equal,
    /// Ratio above 1.00 at two decimals.
    Slower,
}

impl Comparison {
    /// Classify a ratio at the precision it is printed with.
    pub fn from_ratio(ratio: f64) -> Self {
        let hundredths = (ratio * 100.0).round();
        if hundredths < 100.0 {
            Self::Faster
        } else if hundredths > 100.0 {
            Self::Slower
        } else {
            Self::Equal
        }
    }
}

/// `duration / reference`.
///
/// Identical durations give exactly 1.0. A zero reference gives 1.0
/// against another zero and `+inf` otherwise.
pub fn ratio(duration: Duration, reference: Duration) -> f64 {
    if duration == reference {
        return 1.0;
    }
    if reference.is_zero() {
        return f64::INFINITY;
    }
    duration.as_secs_f64() / reference.as_secs_f64()
}

/// Render a ratio as `"2.50x slower"`, `"1.25x faster"` or `"1.00x equal"`.
///
/// Faster strategies are shown by the inverse ratio so the number is
/// always at least 1. A ratio with no finite, non-zero value (one side
/// measured zero) renders as `"n/a"`.
pub fn relative_label(ratio: f64) -> String {
    if !ratio.is_finite() || ratio <= 0.0 {
        return "n/a".to_owned();
    }
    match Comparison::from_ratio(ratio) {
        Comparison::Slower => format!("{ratio:.2}x slower"),
        Comparison::Faster => format!("{:.2}x faster", ratio.recip()),
        Comparison::Equal => "1.00x equal".to_owned(),
    }
}

/// One line of the comparison table.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    /// Strategy name.
    pub name: String,
    /// Measured timing.
    pub timing: Timing,
    /// Mean duration relative to the reference mean.
    pub ratio: f64,
}

impl ReportRow {
    /// Classification of [`ratio`](Self::ratio).
    pub fn comparison(&self) -> Comparison {
        Comparison::from_ratio(self.ratio)
    }
}

/// The comparison table for one pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    iterations: usize,
    reference: String,
    rows: Vec<ReportRow>,
}

impl Report {
    /// Build a report from results in run order.
    ///
    /// Fails with [`ConfigError::UnknownReference`] if `reference` has no
    /// entry in `results`.
    pub fn new(
        iterations: usize,
        reference: &str,
        results: &IndexMap<String, Timing>,
    ) -> Result<Self, ConfigError> {
        let reference_mean = results
            .get(reference)
            .ok_or_else(|| ConfigError::UnknownReference {
                name: reference.to_owned(),
            })?
            .mean;

        let rows = results
            .iter()
            .map(|(name, timing)| ReportRow {
                name: name.clone(),
                timing: *timing,
                ratio: ratio(timing.mean, reference_mean),
            })
            .collect();

        Ok(Self {
            iterations,
            reference: reference.to_owned(),
            rows,
        })
    }

    /// Number of tokens each strategy concatenated.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Name of the reference strategy.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Rows in run order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Look up a row by strategy name.
    pub fn row(&self, name: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.name == name)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(SEPARATOR_WIDTH);
        let light = "-".repeat(SEPARATOR_WIDTH);

        writeln!(
            f,
            "String concatenation results ({} iterations):",
            self.iterations
        )?;
        writeln!(f, "{heavy}")?;
        writeln!(
            f,
            "{:<20} | {:<20} | {:<15}",
            "Method", "Elapsed Time", "Relative to Reference"
        )?;
        writeln!(f, "{light}")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20} | {:<20} | {}",
                row.name,
                format_elapsed(row.timing.mean),
                relative_label(row.ratio)
            )?;
        }
        writeln!(f, "{heavy}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(entries: &[(&str, u64)]) -> IndexMap<String, Timing> {
        entries
            .iter()
            .map(|&(name, us)| (name.to_owned(), Timing::single(Duration::from_micros(us))))
            .collect()
    }

    #[test]
    fn reference_ratio_is_exactly_one() {
        let d = Duration::from_nanos(123_457);
        assert_eq!(ratio(d, d), 1.0);
        assert_eq!(ratio(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn ratio_against_zero_reference() {
        assert_eq!(ratio(Duration::from_micros(1), Duration::ZERO), f64::INFINITY);
    }

    #[test]
    fn ratio_is_plain_division() {
        let r = ratio(Duration::from_micros(250), Duration::from_micros(100));
        assert!((r - 2.5).abs() < 1e-12);
    }

    #[test]
    fn labels_follow_the_ratio() {
        assert_eq!(relative_label(2.5), "2.50x slower");
        assert_eq!(relative_label(1.0), "1.00x equal");
        assert_eq!(relative_label(1.004), "1.00x equal");
        assert_eq!(relative_label(0.8), "1.25x faster");
        assert_eq!(Comparison::from_ratio(0.5), Comparison::Faster);
        assert_eq!(Comparison::from_ratio(1.01), Comparison::Slower);
    }

    #[test]
    fn zero_duration_edges_are_not_applicable() {
        let against_zero = ratio(Duration::from_micros(3), Duration::ZERO);
        let zero_against = ratio(Duration::ZERO, Duration::from_micros(3));
        assert_eq!(relative_label(against_zero), "n/a");
        assert_eq!(relative_label(zero_against), "n/a");
        assert_eq!(relative_label(f64::NAN), "n/a");
    }

    #[test]
    fn zero_duration_row_renders_without_inf() {
        let r = results(&[("operator", 0), ("builder", 5)]);
        let text = Report::new(0, "builder", &r).unwrap().to_string();
        assert!(!text.contains("inf"), "{text}");
        assert!(text.lines().nth(4).unwrap().ends_with("| n/a"));
    }

    #[test]
    fn rows_keep_insertion_order() {
        let r = results(&[("operator", 900), ("builder", 100), ("buffer", 80), ("template", 1200)]);
        let report = Report::new(10, "builder", &r).unwrap();
        let names: Vec<&str> = report.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["operator", "builder", "buffer", "template"]);
        assert_eq!(report.row("builder").unwrap().ratio, 1.0);
        assert_eq!(report.row("buffer").unwrap().comparison(), Comparison::Faster);
        assert_eq!(report.row("operator").unwrap().comparison(), Comparison::Slower);
    }

    #[test]
    fn unknown_reference_rejected() {
        let r = results(&[("builder", 100)]);
        assert_eq!(
            Report::new(1, "missing", &r),
            Err(ConfigError::UnknownReference {
                name: "missing".into()
            })
        );
    }

    #[test]
    fn table_layout() {
        let r = results(&[("operator", 900), ("builder", 100), ("buffer", 80), ("template", 1200)]);
        let text = Report::new(100_000, "builder", &r).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "String concatenation results (100000 iterations):");
        assert_eq!(lines[1], "=".repeat(60));
        assert!(lines[2].starts_with("Method               | Elapsed Time         | Relative to Reference"));
        assert_eq!(lines[3], "-".repeat(60));
        assert_eq!(lines[4], "operator             | 900µs                | 9.00x slower");
        assert_eq!(lines[5], "builder              | 100µs                | 1.00x equal");
        assert_eq!(lines[6], "buffer               | 80µs                 | 1.25x faster");
        assert_eq!(lines[7], "template             | 1.2ms                | 12.00x slower");
        assert_eq!(lines[8], "=".repeat(60));
    }
}
