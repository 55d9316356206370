// ============================================================================
// Numeric Module
// Arbitrary-precision integer support and operation error types
// ============================================================================
//
// This module provides:
// - MathError: error kinds for operand validation
// - MathResult: Result alias used by every fallible operation
// - BigInt: the arbitrary-precision integer type all operations work in
//
// Design principles:
// - No fixed-width ceiling: results grow without overflow
// - All fallible operations return Result (no panics)
// - Validation happens before any computation starts

mod errors;

pub use errors::{MathError, MathResult};

// Re-exported so downstream code can name the operand type without taking a
// direct dependency on num-bigint.
pub use num_bigint::BigInt;
