//! Benchmark driver.
//!
//! Sweeps a list of indices, timing every evaluator on each one. The naive
//! strategy is skipped above the plan's threshold. Failures are caught per
//! call and recorded, so one bad pair never stops the sweep.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{DEFAULT_SIZES, NAIVE_THRESHOLD};
use crate::error::SequenceError;
use crate::evaluator::{Evaluator, Strategy};

/// Whether the memoized cache survives between measured calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    /// Reset before every call: each timing includes the full O(n) fill.
    #[default]
    Cold,
    /// Reuse across the sweep: later indices only pay for the new terms.
    Warm,
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheMode::Cold => f.write_str("cold"),
            CacheMode::Warm => f.write_str("warm"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchPlan {
    pub sizes: Vec<u64>,
    pub naive_threshold: u64,
    pub cache_mode: CacheMode,
}

impl Default for BenchPlan {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            naive_threshold: NAIVE_THRESHOLD,
            cache_mode: CacheMode::default(),
        }
    }
}

impl BenchPlan {
    pub fn should_run(&self, strategy: Strategy, index: u64) -> bool {
        strategy != Strategy::Naive || index <= self.naive_threshold
    }
}

/// One timed (evaluator, index) pair. `outcome` carries the bit length of
/// the computed term, or the error the evaluator returned.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub evaluator: String,
    pub index: u64,
    pub elapsed: Duration,
    pub outcome: Result<u64, SequenceError>,
}

impl Measurement {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// `<name> - <index> - <ms> milliseconds`
    pub fn timing_line(&self) -> String {
        format!(
            "{} - {} - {:.4} milliseconds",
            self.evaluator,
            self.index,
            self.elapsed_ms()
        )
    }

    /// `<name> <message>` when the call failed.
    pub fn error_line(&self) -> Option<String> {
        self.outcome
            .as_ref()
            .err()
            .map(|e| format!("{} {e}", self.evaluator))
    }

    pub fn to_record(&self) -> MeasurementRecord {
        MeasurementRecord {
            evaluator: self.evaluator.clone(),
            index: self.index,
            elapsed_ms: self.elapsed_ms(),
            bits: self.outcome.as_ref().ok().copied(),
            error: self.outcome.as_ref().err().map(ToString::to_string),
        }
    }
}

/// Failed calls print the error line first, then the timing line.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.error_line() {
            writeln!(f, "{line}")?;
        }
        f.write_str(&self.timing_line())
    }
}

/// Flat, serializable view of a [`Measurement`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub evaluator: String,
    pub index: u64,
    pub elapsed_ms: f64,
    pub bits: Option<u64>,
    pub error: Option<String>,
}

/// Run every evaluator over every size in `plan`, in order.
///
/// `sink` sees each measurement as soon as it is taken; the full list is
/// also returned.
pub fn run_benchmark(
    plan: &BenchPlan,
    evaluators: &mut [Box<dyn Evaluator>],
    mut sink: impl FnMut(&Measurement),
) -> Vec<Measurement> {
    let mut measurements = Vec::new();

    for &index in &plan.sizes {
        for evaluator in evaluators.iter_mut() {
            if !plan.should_run(evaluator.strategy(), index) {
                debug!(evaluator = evaluator.name(), index, "skipped above naive threshold");
                continue;
            }
            if plan.cache_mode == CacheMode::Cold {
                evaluator.reset();
            }

            let start = Instant::now();
            let result = evaluator.evaluate(index);
            let elapsed = start.elapsed();

            let outcome = result.map(|term| term.bits());
            if let Err(e) = &outcome {
                warn!(evaluator = evaluator.name(), index, "evaluation failed: {e}");
            }

            let measurement = Measurement {
                evaluator: evaluator.name().to_string(),
                index,
                elapsed,
                outcome,
            };
            sink(&measurement);
            measurements.push(measurement);
        }
    }

    measurements
}
