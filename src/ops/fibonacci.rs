// ============================================================================
// Fibonacci
// Iterative pair-advance Fibonacci numbers
// ============================================================================

use crate::numeric::{MathError, MathResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Compute the `n`th Fibonacci number exactly.
///
/// `fibonacci(0) == 0`, `fibonacci(1) == 1`; beyond that the previous two
/// values are advanced `n - 1` times. O(n) time, two live values of
/// auxiliary state, and no floating-point approximation at any size.
///
/// # Errors
/// Returns `InvalidArgument` if `n` is negative or does not fit in a `u64`.
///
/// # Example
/// ```rust
/// use large_math::ops::fibonacci;
/// use num_bigint::BigInt;
///
/// assert_eq!(fibonacci(&BigInt::from(10)).unwrap(), BigInt::from(55));
/// ```
pub fn fibonacci(n: &BigInt) -> MathResult<BigInt> {
    if n.is_negative() {
        tracing::debug!(%n, "fibonacci rejected: negative operand");
        return Err(MathError::InvalidArgument);
    }
    let steps = n.to_u64().ok_or_else(|| {
        tracing::debug!(%n, "fibonacci rejected: operand exceeds iterable range");
        MathError::InvalidArgument
    })?;
    if steps <= 1 {
        return Ok(BigInt::from(steps));
    }

    let mut a = BigInt::zero();
    let mut b = BigInt::one();
    for _ in 1..steps {
        let next = &a + &b;
        a = b;
        b = next;
    }
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fibonacci(&BigInt::zero()).unwrap(), BigInt::zero());
        assert_eq!(fibonacci(&BigInt::one()).unwrap(), BigInt::one());
    }

    #[test]
    fn test_small_values() {
        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, fib) in expected.iter().enumerate() {
            assert_eq!(fibonacci(&BigInt::from(n)).unwrap(), BigInt::from(*fib));
        }
    }

    #[test]
    fn test_sample_value() {
        assert_eq!(
            fibonacci(&BigInt::from(50)).unwrap(),
            BigInt::from(12_586_269_025u64)
        );
    }

    #[test]
    fn test_exceeds_fixed_width() {
        // fib(100) is well past the u64 ceiling
        let expected = BigInt::parse_bytes(b"354224848179261915075", 10).unwrap();
        assert_eq!(fibonacci(&BigInt::from(100)).unwrap(), expected);
    }

    #[test]
    fn test_negative_operand() {
        assert_eq!(fibonacci(&BigInt::from(-1)), Err(MathError::InvalidArgument));
    }

    proptest! {
        #[test]
        fn prop_addition_recurrence(n in 0u64..300) {
            let f0 = fibonacci(&BigInt::from(n)).unwrap();
            let f1 = fibonacci(&BigInt::from(n + 1)).unwrap();
            let f2 = fibonacci(&BigInt::from(n + 2)).unwrap();
            prop_assert_eq!(f2, f0 + f1);
        }
    }
}
