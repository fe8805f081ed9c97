// ============================================================================
// Numeric Module
// Checked integer sequences over a u128 output width
// ============================================================================
//
// This module provides:
// - factorial: n! with a documented overflow boundary
// - fibonacci_at / fibonacci_sequence: iterative Fibonacci terms
// - NumericError: Error types shared by every operation in the crate
//
// Design principles:
// - Signed input so negative arguments are rejected, not unrepresentable
// - All arithmetic is checked and returns Result (no panics)
// - No shared state: every accumulator is local to its call

mod errors;
mod factorial;
mod fibonacci;

pub use errors::{NumericError, NumericResult};
pub use factorial::{factorial, MAX_FACTORIAL_INPUT};
pub use fibonacci::{fibonacci_at, fibonacci_sequence, MAX_FIBONACCI_INPUT};
