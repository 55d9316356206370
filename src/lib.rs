// ============================================================================
// Large Math Library
// Exact arbitrary-precision numeric utilities
// ============================================================================

//! # Large Math
//!
//! Exact, arbitrary-precision numeric utilities: factorials, integer powers,
//! trial-division primality testing, Fibonacci numbers and binomial
//! coefficients.
//!
//! ## Features
//!
//! - **Arbitrary-precision results** backed by [`num_bigint::BigInt`] -
//!   `factorial(20)` and `2^100` come back exact, not truncated or rounded
//! - **Pure, stateless operations** - every function is reentrant and safe
//!   to call concurrently without locking
//! - **Explicit validation** - precondition violations surface as typed
//!   errors before any computation starts; library code never panics
//! - **Exact arithmetic only** - no floating-point approximation anywhere
//!
//! ## Example
//!
//! ```rust
//! use large_math::prelude::*;
//! use num_bigint::BigInt;
//!
//! let f = factorial(&BigInt::from(20)).unwrap();
//! assert_eq!(f.to_string(), "2432902008176640000");
//!
//! assert!(is_prime(&BigInt::from(1_000_000_007)));
//!
//! let c = combinations(&BigInt::from(30), &BigInt::from(15)).unwrap();
//! assert_eq!(c, BigInt::from(155_117_520));
//! ```

pub mod numeric;
pub mod ops;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{MathError, MathResult};
    pub use crate::ops::{combinations, factorial, fibonacci, is_prime, power};
}
