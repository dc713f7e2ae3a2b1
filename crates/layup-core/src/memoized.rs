//! Recursion backed by a caller-owned [`SequenceCache`].
//!
//! Each index is computed at most once per cache lifetime, so a single
//! cold call costs O(n) term operations. Recursion depth is the distance
//! from the highest cached index to n. When that distance exceeds the
//! depth ceiling and prefill is enabled, the gap is closed bottom-up first
//! so large n never depends on the host stack.

use num_bigint::BigInt;
use tracing::debug;

use crate::cache::SequenceCache;
use crate::error::{Resource, Result, SequenceError};
use crate::recurrence::check_index;

/// S(n), consulting and populating `cache`.
pub fn evaluate_memoized(n: u64, cache: &mut SequenceCache) -> Result<BigInt> {
    check_index(n)?;
    if let Some(hit) = cache.get(n) {
        return Ok(hit.clone());
    }

    let limits = cache.limits();
    let max_depth = limits.max_depth as u64;
    if limits.prefill && n - cache.highest() > max_depth {
        let target = n - max_depth;
        debug!(
            from = cache.highest(),
            to = target,
            "prefilling cache bottom-up"
        );
        cache.fill_to(target)?;
        // With max_depth == 0 the prefill reaches n itself.
        if let Some(hit) = cache.get(n) {
            return Ok(hit.clone());
        }
    }

    // S(n) recurses on S(n-1); S(n-2) is then always a cache hit.
    ensure(cache, n - 1, 1, limits.max_depth)?;
    cache.advance().cloned()
}

fn ensure(cache: &mut SequenceCache, n: u64, depth: usize, max_depth: usize) -> Result<()> {
    if cache.contains(n) {
        return Ok(());
    }
    if depth >= max_depth {
        return Err(SequenceError::ResourceExhausted {
            resource: Resource::RecursionDepth,
            limit: max_depth,
            index: n,
        });
    }
    ensure(cache, n - 1, depth + 1, max_depth)?;
    cache.advance()?;
    Ok(())
}
