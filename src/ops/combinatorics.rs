// ============================================================================
// Binomial Coefficient
// "n choose k" via the multiplicative recurrence
// ============================================================================

use crate::numeric::{MathError, MathResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Compute the binomial coefficient `C(n, k)` exactly.
///
/// Accumulates the multiplicative recurrence
/// `result <- result * (n - i) / (i + 1)` for `i` in `0..k` instead of
/// dividing two full factorials, which keeps intermediate values no larger
/// than the result times `n`. Each partial product is divisible by `i + 1`
/// (consecutive binomial ratios are integers), so the integer division is
/// exact at every step.
///
/// `C(n, k) == C(n, n - k)`, so `k` is first mirrored into the short side to
/// halve the number of multiplications in the worst case.
///
/// # Errors
/// Returns `InvalidArgument` unless `n >= 0`, `k >= 0` and `k <= n`, or if
/// the reduced `k` does not fit in a `u64`.
///
/// # Example
/// ```rust
/// use large_math::ops::combinations;
/// use num_bigint::BigInt;
///
/// let c = combinations(&BigInt::from(5), &BigInt::from(2)).unwrap();
/// assert_eq!(c, BigInt::from(10));
/// ```
pub fn combinations(n: &BigInt, k: &BigInt) -> MathResult<BigInt> {
    if n.is_negative() || k.is_negative() || k > n {
        tracing::debug!(%n, %k, "combinations rejected: constraint violation");
        return Err(MathError::InvalidArgument);
    }

    // Mirror into the short side; this also folds the k == n base case into
    // the k == 0 one below
    let k = if k * 2u32 > *n { n - k } else { k.clone() };
    if k.is_zero() {
        return Ok(BigInt::one());
    }
    let rounds = k.to_u64().ok_or(MathError::InvalidArgument)?;

    let mut result = BigInt::one();
    for i in 0..rounds {
        // Exact at each step; division must come after the multiplication
        result = result * (n - i) / (i + 1);
    }
    Ok(result)
}
