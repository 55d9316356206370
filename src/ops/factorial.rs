// ============================================================================
// Factorial
// Iterative arbitrary-precision factorial
// ============================================================================

use crate::numeric::{MathError, MathResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};

/// Compute `n!` exactly.
///
/// The product is accumulated iteratively (no recursion, so large `n` cannot
/// exhaust the call stack) and grows without a fixed-width ceiling:
/// `factorial(21)` already exceeds `i64::MAX`.
///
/// # Errors
/// Returns `InvalidArgument` if `n` is negative, or too large to drive the
/// iteration (does not fit in a `u64` — a product of that many terms could
/// never be materialized anyway).
///
/// # Example
/// ```rust
/// use large_math::ops::factorial;
/// use num_bigint::BigInt;
///
/// let f = factorial(&BigInt::from(5)).unwrap();
/// assert_eq!(f, BigInt::from(120));
/// ```
pub fn factorial(n: &BigInt) -> MathResult<BigInt> {
    if n.is_negative() {
        tracing::debug!(%n, "factorial rejected: negative operand");
        return Err(MathError::InvalidArgument);
    }
    let count = n.to_u64().ok_or_else(|| {
        tracing::debug!(%n, "factorial rejected: operand exceeds iterable range");
        MathError::InvalidArgument
    })?;

    let mut result = BigInt::one();
    for factor in 2..=count {
        result *= factor;
    }
    Ok(result)
}
