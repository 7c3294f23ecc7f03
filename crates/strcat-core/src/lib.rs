//! Core of the strcat string-concatenation benchmark.
//!
//! Four ways of joining `n` copies of a short token are timed against each
//! other and reported as ratios to a reference strategy:
//!
//! - [`OperatorConcat`]: repeated `+`, copying the accumulator each step
//! - [`BuilderConcat`]: pre-sized `String`
//! - [`BufferConcat`]: pre-sized `bytes::BytesMut`
//! - [`TemplateConcat`]: repeated `format!`
//!
//! # Quick start
//!
//! ```
//! use strcat_core::{run, BenchConfig};
//!
//! let config = BenchConfig {
//!     iterations: 3,
//!     token: "ab".into(),
//!     ..Default::default()
//! };
//! let report = run(&config).unwrap();
//! assert_eq!(report.rows().len(), 4);
//! assert_eq!(report.row("builder").unwrap().ratio, 1.0);
//! println!("{report}");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod strategy;
pub mod timing;

pub use config::BenchConfig;
pub use dataset::{Dataset, DEFAULT_ITERATIONS, DEFAULT_TOKEN};
pub use error::{BenchError, ConfigError, StrategyError};
pub use pipeline::{run, StrategyResults};
pub use report::{ratio, relative_label, Comparison, Report, ReportRow};
pub use strategy::{
    standard_strategies, BufferConcat, BuilderConcat, ConcatStrategy, OperatorConcat,
    StrategyKind, TemplateConcat,
};
pub use timing::{measure, Timing};
