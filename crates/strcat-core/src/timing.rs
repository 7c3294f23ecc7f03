//! Wall-clock measurement around a single closure.
//!
//! [`measure`] runs a closure a fixed number of times and brackets only
//! the closure call with the timer, so any setup the caller does before
//! calling `measure` never lands in the result.

use std::hint::black_box;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Per-strategy timing over one or more independent runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Mean duration of one run.
    pub mean: Duration,
    /// Fastest run.
    pub min: Duration,
    /// Number of runs measured.
    pub runs: u32,
}

impl Timing {
    /// Timing for exactly one run.
    pub fn single(elapsed: Duration) -> Self {
        Self {
            mean: elapsed,
            min: elapsed,
            runs: 1,
        }
    }
}

/// Run `f` `repeat` times, timing each call on its own.
///
/// Returns the output of the last run together with the aggregated
/// [`Timing`]. The first error aborts the remaining runs.
pub fn measure<T, E, F>(repeat: NonZeroU32, mut f: F) -> Result<(T, Timing), E>
where
    F: FnMut() -> Result<T, E>,
{
    let (mut last, first) = timed(&mut f)?;
    let mut total = first;
    let mut min = first;

    for _ in 1..repeat.get() {
        let (out, elapsed) = timed(&mut f)?;
        last = out;
        total += elapsed;
        min = min.min(elapsed);
    }

    let timing = Timing {
        mean: total / repeat.get(),
        min,
        runs: repeat.get(),
    };
    Ok((last, timing))
}

fn timed<T, E, F>(f: &mut F) -> Result<(T, Duration), E>
where
    F: FnMut() -> Result<T, E>,
{
    let start = Instant::now();
    let out = black_box(f());
    let elapsed = start.elapsed();
    out.map(|v| (v, elapsed))
}

/// Round to the nearest microsecond, halves away from zero.
pub fn round_to_micros(d: Duration) -> Duration {
    let micros = (d.as_nanos() + 500) / 1_000;
    Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX))
}

/// Render a duration rounded to microseconds, e.g. `1.234ms`.
pub fn format_elapsed(d: Duration) -> String {
    format!("{:?}", round_to_micros(d))
}
