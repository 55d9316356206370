// ============================================================================
// Integer Power
// Exact exponentiation by squaring
// ============================================================================

use crate::numeric::{MathError, MathResult};
use num_bigint::BigInt;
use num_traits::{Pow, Signed, ToPrimitive};

/// Raise `base` to `exponent` exactly.
///
/// Uses exponentiation by squaring, so the cost is O(log exponent) big-int
/// multiplications. The zero exponent returns 1 for every base, including
/// `power(0, 0) == 1`.
///
/// # Errors
/// - `TypeMismatch` if `exponent` is negative: the exact result is no longer
///   an integer, and this crate computes in the integer domain only.
/// - `InvalidArgument` if `exponent` does not fit in a `u64`.
///
/// # Example
/// ```rust
/// use large_math::ops::power;
/// use num_bigint::BigInt;
///
/// let p = power(&BigInt::from(2), &BigInt::from(10)).unwrap();
/// assert_eq!(p, BigInt::from(1024));
/// ```
pub fn power(base: &BigInt, exponent: &BigInt) -> MathResult<BigInt> {
    if exponent.is_negative() {
        tracing::debug!(%base, %exponent, "power rejected: negative exponent");
        return Err(MathError::TypeMismatch);
    }
    let exp = exponent.to_u64().ok_or_else(|| {
        tracing::debug!(%exponent, "power rejected: exponent exceeds iterable range");
        MathError::InvalidArgument
    })?;

    Ok(Pow::pow(base, exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    #[test]
    fn test_small_powers() {
        assert_eq!(power(&BigInt::from(2), &BigInt::from(10)).unwrap(), BigInt::from(1024));
        assert_eq!(power(&BigInt::from(3), &BigInt::from(4)).unwrap(), BigInt::from(81));
    }

    #[test]
    fn test_sample_value() {
        let expected = BigInt::parse_bytes(b"1267650600228229401496703205376", 10).unwrap();
        assert_eq!(power(&BigInt::from(2), &BigInt::from(100)).unwrap(), expected);
    }

    #[test]
    fn test_zero_exponent() {
        assert_eq!(power(&BigInt::from(7), &BigInt::zero()).unwrap(), BigInt::one());
        // 0^0 is 1 by convention
        assert_eq!(power(&BigInt::zero(), &BigInt::zero()).unwrap(), BigInt::one());
    }

    #[test]
    fn test_negative_base() {
        assert_eq!(power(&BigInt::from(-2), &BigInt::from(3)).unwrap(), BigInt::from(-8));
        assert_eq!(power(&BigInt::from(-2), &BigInt::from(2)).unwrap(), BigInt::from(4));
    }

    #[test]
    fn test_negative_exponent() {
        assert_eq!(
            power(&BigInt::from(2), &BigInt::from(-1)),
            Err(MathError::TypeMismatch)
        );
        // Uniform for every base, even where an exact integer would exist
        assert_eq!(
            power(&BigInt::one(), &BigInt::from(-5)),
            Err(MathError::TypeMismatch)
        );
    }

    #[test]
    fn test_exponent_beyond_iterable_range() {
        let huge = BigInt::from(u64::MAX) + 1;
        assert_eq!(power(&BigInt::from(2), &huge), Err(MathError::InvalidArgument));
    }

    proptest! {
        #[test]
        fn prop_exponent_addition(base in -20i64..20, e1 in 0u64..12, e2 in 0u64..12) {
            let b = BigInt::from(base);
            let lhs = power(&b, &BigInt::from(e1 + e2)).unwrap();
            let rhs = power(&b, &BigInt::from(e1)).unwrap() * power(&b, &BigInt::from(e2)).unwrap();
            prop_assert_eq!(lhs, rhs);
        }
    }
}
