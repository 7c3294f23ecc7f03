//! The linear benchmark pipeline: validate, generate, run, tabulate.

use indexmap::IndexMap;
use log::{debug, info};

use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::error::{BenchError, StrategyError};
use crate::report::Report;
use crate::timing::{measure, Timing};

/// Per-strategy timings keyed by name, in run order.
pub type StrategyResults = IndexMap<String, Timing>;

/// Run every configured strategy once per repeat and build the report.
///
/// Configuration errors, including a dataset too large to allocate, are
/// returned before any timer starts. The first failing strategy aborts the
/// run; no report is produced from partial results.
pub fn run(config: &BenchConfig) -> Result<Report, BenchError> {
    let repeat = config.validate()?;
    let dataset = Dataset::generate(&config.token, config.iterations)?;
    let expected = dataset.total_bytes();

    info!(
        "running {} strategies over {} tokens of {:?} ({} run(s) each)",
        config.strategies.len(),
        dataset.len(),
        dataset.token(),
        repeat
    );

    let mut results = StrategyResults::with_capacity(config.strategies.len());
    for strategy in &config.strategies {
        let name = strategy.name();
        let failure = |reason: StrategyError| BenchError::StrategyFailure {
            name: name.to_owned(),
            reason,
        };

        let (output, timing) = measure(repeat, || strategy.concat(&dataset)).map_err(failure)?;
        if output.len() != expected {
            return Err(failure(StrategyError::OutputMismatch {
                expected,
                actual: output.len(),
            }));
        }

        debug!(
            "{name}: mean {:?}, min {:?} over {} run(s)",
            timing.mean, timing.min, timing.runs
        );
        results.insert(name.to_owned(), timing);
    }

    let report = Report::new(dataset.len(), &config.reference, &results)?;
    info!("finished; reference is {:?}", report.reference());
    Ok(report)
}
