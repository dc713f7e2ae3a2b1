//! Cross-strategy agreement check.

use num_bigint::BigInt;
use tracing::debug;

use crate::cache::{Limits, SequenceCache};
use crate::error::Result;
use crate::evaluator::Strategy;
use crate::iterative::evaluate_iterative;
use crate::memoized::evaluate_memoized;
use crate::naive::evaluate_naive_with;

/// A strategy that disagreed with the iterative reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub index: u64,
    pub strategy: Strategy,
    pub expected: BigInt,
    pub actual: BigInt,
}

/// Compare every strategy against iteration for `1..=max`.
///
/// Naive is only checked up to `naive_max`. The memoized strategy shares
/// one cache across the whole range. Evaluation errors propagate.
pub fn cross_check(max: u64, naive_max: u64, limits: Limits) -> Result<Vec<Mismatch>> {
    let mut cache = SequenceCache::with_limits(limits);
    let mut mismatches = Vec::new();

    for index in 1..=max {
        let expected = evaluate_iterative(index)?;

        let memoized = evaluate_memoized(index, &mut cache)?;
        if memoized != expected {
            mismatches.push(Mismatch {
                index,
                strategy: Strategy::Memoization,
                expected: expected.clone(),
                actual: memoized,
            });
        }

        if index <= naive_max {
            let naive = evaluate_naive_with(index, limits.max_depth)?;
            if naive != expected {
                mismatches.push(Mismatch {
                    index,
                    strategy: Strategy::Naive,
                    expected,
                    actual: naive,
                });
            }
        }
    }

    debug!(max, naive_max, mismatches = mismatches.len(), "cross-check done");
    Ok(mismatches)
}
