//! Term cache for the memoized strategy.
//!
//! Memoized evaluation always fills indices in ascending order, so the
//! cache is a contiguous vector: `terms[i]` holds S(i + 1). It starts with
//! the two base terms, only ever grows, and every stored value is the true
//! term at its index. A failed evaluation leaves previously stored terms
//! untouched.
//!
//! A cache is owned by one caller and mutated through `&mut`. Sharing it
//! between threads needs external synchronization.

use num_bigint::BigInt;

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::error::{Resource, Result, SequenceError};
use crate::recurrence::step;

/// Resource ceilings for the recursive strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum recursion depth before failing with `ResourceExhausted`.
    pub max_depth: usize,
    /// Fill the cache bottom-up when a request is deeper than `max_depth`
    /// past the highest cached index, instead of failing.
    pub prefill: bool,
    /// Maximum number of cached terms. `None` means unbounded.
    pub max_cache_entries: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            prefill: true,
            max_cache_entries: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SequenceCache {
    terms: Vec<BigInt>,
    computed: u64,
    limits: Limits,
}

/// A fresh cache seeded with {1: 1, 2: 2} and default limits.
pub fn new_cache() -> SequenceCache {
    SequenceCache::new()
}

impl SequenceCache {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            terms: vec![BigInt::from(1), BigInt::from(2)],
            computed: 0,
            limits,
        }
    }

    /// Drop everything but the two base terms and zero the counter.
    pub fn reset(&mut self) {
        self.terms.truncate(2);
        self.terms.shrink_to_fit();
        self.computed = 0;
    }

    pub fn get(&self, n: u64) -> Option<&BigInt> {
        let slot = usize::try_from(n).ok()?.checked_sub(1)?;
        self.terms.get(slot)
    }

    pub fn contains(&self, n: u64) -> bool {
        self.get(n).is_some()
    }

    /// Number of cached terms (always at least 2).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest cached index. Every index in `1..=highest()` is cached.
    pub fn highest(&self) -> u64 {
        self.terms.len() as u64
    }

    /// Terms computed (not looked up) since creation or the last reset.
    pub fn computed(&self) -> u64 {
        self.computed
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Cached `(index, term)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &BigInt)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(slot, term)| (slot as u64 + 1, term))
    }

    /// Compute and store the term right after `highest()`.
    pub(crate) fn advance(&mut self) -> Result<&BigInt> {
        let next = self.highest() + 1;
        if let Some(max) = self.limits.max_cache_entries
            && self.terms.len() >= max
        {
            return Err(SequenceError::ResourceExhausted {
                resource: Resource::CacheEntries,
                limit: max,
                index: next,
            });
        }

        let len = self.terms.len();
        let term = step(next, &self.terms[len - 1], &self.terms[len - 2]);
        self.terms.push(term);
        self.computed += 1;
        Ok(&self.terms[len])
    }

    /// Advance iteratively until `target` is cached.
    pub(crate) fn fill_to(&mut self, target: u64) -> Result<()> {
        while self.highest() < target {
            self.advance()?;
        }
        Ok(())
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new()
    }
}
