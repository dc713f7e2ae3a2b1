//! The recurrence itself, shared by every strategy.

use num_bigint::BigInt;

use crate::constants::FIRST_INDEX;
use crate::error::{Result, SequenceError};

/// Reject indices outside the sequence domain.
pub fn check_index(n: u64) -> Result<()> {
    if n < FIRST_INDEX {
        return Err(SequenceError::InvalidArgument(n));
    }
    Ok(())
}

/// S(1) = 1, S(2) = 2. `None` for every other index.
pub fn base_value(n: u64) -> Option<BigInt> {
    matches!(n, 1 | 2).then(|| BigInt::from(n))
}

/// Combine S(n-1) and S(n-2) into S(n).
///
/// Even n: S(n-1) + S(n-2). Odd n: 2·S(n-1) - S(n-2).
pub fn step(n: u64, prev: &BigInt, prev2: &BigInt) -> BigInt {
    if n % 2 == 0 {
        prev + prev2
    } else {
        prev * 2u32 - prev2
    }
}
