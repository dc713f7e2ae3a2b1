//! Direct recursion with no caching.
//!
//! Every n > 2 spawns two sub-evaluations all the way down to the base
//! cases, so cost grows exponentially. Practical only up to roughly n = 50.

use num_bigint::BigInt;

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::error::{Resource, Result, SequenceError};
use crate::recurrence::{base_value, check_index, step};

/// S(n) by naive recursion, bounded by [`DEFAULT_MAX_DEPTH`].
pub fn evaluate_naive(n: u64) -> Result<BigInt> {
    evaluate_naive_with(n, DEFAULT_MAX_DEPTH)
}

/// S(n) by naive recursion with an explicit depth ceiling.
pub fn evaluate_naive_with(n: u64, max_depth: usize) -> Result<BigInt> {
    check_index(n)?;
    descend(n, 0, max_depth)
}

fn descend(n: u64, depth: usize, max_depth: usize) -> Result<BigInt> {
    if let Some(base) = base_value(n) {
        return Ok(base);
    }
    if depth >= max_depth {
        return Err(SequenceError::ResourceExhausted {
            resource: Resource::RecursionDepth,
            limit: max_depth,
            index: n,
        });
    }
    let prev = descend(n - 1, depth + 1, max_depth)?;
    let prev2 = descend(n - 2, depth + 1, max_depth)?;
    Ok(step(n, &prev, &prev2))
}
