// ============================================================================
// Primality Test
// Trial division with a 6k±1 candidate wheel
// ============================================================================

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Test whether `n` is prime by trial division.
///
/// Total function: there is no error path. Anything at or below 1 (including
/// every negative number) is simply not prime.
///
/// After ruling out multiples of 2 and 3, only candidates of the form
/// `6k ± 1` are tried, up to the square root of `n`. That is O(sqrt n)
/// big-int divisions — exact for any operand magnitude, but only practical
/// for moderately large `n`. This is deliberately not a probabilistic test.
///
/// # Example
/// ```rust
/// use large_math::ops::is_prime;
/// use num_bigint::BigInt;
///
/// assert!(is_prime(&BigInt::from(1_000_000_007)));
/// assert!(!is_prime(&BigInt::from(1)));
/// ```
pub fn is_prime(n: &BigInt) -> bool {
    if *n <= BigInt::one() {
        return false;
    }
    if *n <= BigInt::from(3) {
        return true;
    }
    if (n % 2u32).is_zero() || (n % 3u32).is_zero() {
        return false;
    }

    // Candidates 5, 11, 17, ... with their +2 partners cover all 6k±1 values
    let mut i = BigInt::from(5);
    while &i * &i <= *n {
        if (n % &i).is_zero() || (n % (&i + 2u32)).is_zero() {
            return false;
        }
        i += 6u32;
    }
    true
}
