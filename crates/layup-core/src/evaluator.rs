use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::cache::{Limits, SequenceCache};
use crate::error::{ParseStrategyError, Result};
use crate::iterative::evaluate_iterative;
use crate::memoized::evaluate_memoized;
use crate::naive::evaluate_naive_with;

/// Evaluation strategy. Display names are stable: they appear in every
/// harness report line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Naive,
    Memoization,
    Iteration,
}

impl Strategy {
    /// All strategies in harness order.
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Memoization, Strategy::Iteration];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "S-naive",
            Strategy::Memoization => "S-memoization",
            Strategy::Iteration => "S-iteration",
        }
    }

    pub fn evaluator(self, limits: Limits) -> Box<dyn Evaluator> {
        match self {
            Strategy::Naive => Box::new(NaiveEvaluator::new(limits.max_depth)),
            Strategy::Memoization => Box::new(MemoizedEvaluator::with_limits(limits)),
            Strategy::Iteration => Box::new(IterativeEvaluator),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let key = lower.strip_prefix("s-").unwrap_or(&lower);
        match key {
            "naive" => Ok(Strategy::Naive),
            "memoization" | "memoized" | "memo" => Ok(Strategy::Memoization),
            "iteration" | "iterative" => Ok(Strategy::Iteration),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// One way of computing S(n).
///
/// `evaluate` takes `&mut self` because the memoized strategy keeps its
/// cache between calls. Stateless strategies ignore `reset`.
pub trait Evaluator {
    fn strategy(&self) -> Strategy;

    fn name(&self) -> &'static str {
        self.strategy().name()
    }

    fn evaluate(&mut self, n: u64) -> Result<BigInt>;

    fn reset(&mut self) {}
}

#[derive(Clone, Copy, Debug)]
pub struct NaiveEvaluator {
    max_depth: usize,
}

impl NaiveEvaluator {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for NaiveEvaluator {
    fn default() -> Self {
        Self::new(Limits::default().max_depth)
    }
}

impl Evaluator for NaiveEvaluator {
    fn strategy(&self) -> Strategy {
        Strategy::Naive
    }

    fn evaluate(&mut self, n: u64) -> Result<BigInt> {
        evaluate_naive_with(n, self.max_depth)
    }
}

/// Owns a [`SequenceCache`] that persists across calls until `reset`.
#[derive(Clone, Debug, Default)]
pub struct MemoizedEvaluator {
    cache: SequenceCache,
}

impl MemoizedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            cache: SequenceCache::with_limits(limits),
        }
    }

    pub fn cache(&self) -> &SequenceCache {
        &self.cache
    }
}

impl Evaluator for MemoizedEvaluator {
    fn strategy(&self) -> Strategy {
        Strategy::Memoization
    }

    fn evaluate(&mut self, n: u64) -> Result<BigInt> {
        evaluate_memoized(n, &mut self.cache)
    }

    fn reset(&mut self) {
        self.cache.reset();
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeEvaluator;

impl Evaluator for IterativeEvaluator {
    fn strategy(&self) -> Strategy {
        Strategy::Iteration
    }

    fn evaluate(&mut self, n: u64) -> Result<BigInt> {
        evaluate_iterative(n)
    }
}

/// One evaluator per strategy, in harness order.
pub fn standard_evaluators(limits: Limits) -> Vec<Box<dyn Evaluator>> {
    Strategy::ALL
        .iter()
        .map(|strategy| strategy.evaluator(limits))
        .collect()
}
