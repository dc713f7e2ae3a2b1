use num_bigint::BigInt;

use crate::error::Result;
use crate::recurrence::{check_index, step};

/// S(n) bottom-up, carrying only the last two terms.
///
/// Memory use does not depend on n: two rolling slots plus the term being
/// produced.
pub fn evaluate_iterative(n: u64) -> Result<BigInt> {
    check_index(n)?;
    if n < 3 {
        return Ok(BigInt::from(n));
    }

    let mut two_back = BigInt::from(1);
    let mut one_back = BigInt::from(2);
    for i in 3..=n {
        let current = step(i, &one_back, &two_back);
        two_back = std::mem::replace(&mut one_back, current);
    }
    Ok(one_back)
}
