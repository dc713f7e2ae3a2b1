//! Layup sequence engine.
//!
//! Evaluates S(n), where S(1) = 1, S(2) = 2, even terms add the two
//! previous terms and odd terms take twice the previous term minus the one
//! before it. Three interchangeable strategies (naive recursion, memoized
//! recursion, bottom-up iteration) compute identical values with different
//! time/space costs, and a small harness times them against each other.
//!
//! Zero I/O: callers decide where results and timings go.

pub mod cache;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod harness;
pub mod iterative;
pub mod memoized;
pub mod naive;
pub mod recurrence;
pub mod verify;

pub use cache::{Limits, SequenceCache, new_cache};
pub use constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_SIZES, FIRST_INDEX, MAX_DEPTH_CEILING, NAIVE_THRESHOLD,
};
pub use error::{ParseStrategyError, Resource, Result, SequenceError};
pub use evaluator::{
    Evaluator, IterativeEvaluator, MemoizedEvaluator, NaiveEvaluator, Strategy,
    standard_evaluators,
};
pub use harness::{BenchPlan, CacheMode, Measurement, MeasurementRecord, run_benchmark};
pub use iterative::evaluate_iterative;
pub use memoized::evaluate_memoized;
pub use naive::{evaluate_naive, evaluate_naive_with};
pub use num_bigint::BigInt;
pub use verify::{Mismatch, cross_check};
