// ============================================================================
// Factorial
// Checked n! over a u128 accumulator
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Largest `n` whose factorial fits in a `u128` (34! ≈ 2.95 × 10^38).
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Compute `n!`.
///
/// `0!` is 1. The accumulator lives on the stack of this call only.
///
/// # Errors
/// - `InvalidArgument` if `n` is negative
/// - `Overflow` if `n > MAX_FACTORIAL_INPUT`
///
/// # Example
/// ```
/// use numeric_formatting::numeric::factorial;
///
/// assert_eq!(factorial(5), Ok(120));
/// ```
pub fn factorial(n: i64) -> NumericResult<u128> {
    if n < 0 {
        tracing::debug!(n, "factorial rejected negative input");
        return Err(NumericError::InvalidArgument);
    }

    let mut acc: u128 = 1;
    for k in 2..=n as u128 {
        acc = acc.checked_mul(k).ok_or_else(|| {
            tracing::debug!(n, "factorial overflowed u128");
            NumericError::Overflow
        })?;
    }

    Ok(acc)
}
