// ============================================================================
// Math Errors
// Error types for arbitrary-precision numeric operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported when an operand fails validation.
///
/// Every error is raised before any computation proceeds; no operation has
/// partial effects to roll back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathError {
    /// A numeric precondition was violated (negative operand, `k > n`,
    /// or an operand too large to drive an iteration)
    InvalidArgument,
    /// The result would leave the integer domain (negative exponent)
    TypeMismatch,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidArgument => {
                write!(f, "invalid argument: operand violates a numeric precondition")
            },
            MathError::TypeMismatch => {
                write!(f, "type mismatch: result is not representable as an integer")
            },
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for numeric operations
pub type MathResult<T> = Result<T, MathError>;
