// ============================================================================
// Fibonacci
// Iterative F(n) with F(0) = 0, F(1) = 1
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Largest `n` whose Fibonacci number fits in a `u128`.
pub const MAX_FIBONACCI_INPUT: i64 = 186;

/// Compute the `n`-th Fibonacci number.
///
/// Runs in O(n) time, tracking only the last two terms.
///
/// # Errors
/// - `InvalidArgument` if `n` is negative
/// - `Overflow` if `n > MAX_FIBONACCI_INPUT`
///
/// # Example
/// ```
/// use numeric_formatting::numeric::fibonacci_at;
///
/// assert_eq!(fibonacci_at(7), Ok(13));
/// ```
pub fn fibonacci_at(n: i64) -> NumericResult<u128> {
    if n < 0 {
        tracing::debug!(n, "fibonacci rejected negative input");
        return Err(NumericError::InvalidArgument);
    }
    if n == 0 {
        return Ok(0);
    }

    let (mut prev, mut current): (u128, u128) = (0, 1);
    for _ in 1..n {
        let next = prev.checked_add(current).ok_or_else(|| {
            tracing::debug!(n, "fibonacci overflowed u128");
            NumericError::Overflow
        })?;
        prev = current;
        current = next;
    }

    Ok(current)
}

/// Build the sequence `F(0), F(1), ..., F(n)`.
///
/// The result always holds `n + 1` terms.
///
/// # Errors
/// Same conditions as [`fibonacci_at`]. Oversized requests are rejected
/// before anything is allocated.
pub fn fibonacci_sequence(n: i64) -> NumericResult<Vec<u128>> {
    if n < 0 {
        tracing::debug!(n, "fibonacci sequence rejected negative input");
        return Err(NumericError::InvalidArgument);
    }
    if n > MAX_FIBONACCI_INPUT {
        tracing::debug!(n, "fibonacci sequence would overflow u128");
        return Err(NumericError::Overflow);
    }

    let len = n as usize + 1;
    let mut sequence: Vec<u128> = Vec::with_capacity(len);
    sequence.push(0);
    if len > 1 {
        sequence.push(1);
    }
    for i in 2..len {
        let next = sequence[i - 1]
            .checked_add(sequence[i - 2])
            .ok_or(NumericError::Overflow)?;
        sequence.push(next);
    }

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci_at(0), Ok(0));
        assert_eq!(fibonacci_at(1), Ok(1));
        assert_eq!(fibonacci_at(2), Ok(1));
    }

    #[test]
    fn test_fibonacci_seventh_term() {
        assert_eq!(fibonacci_at(7), Ok(13));
    }

    #[test]
    fn test_fibonacci_negative_input() {
        assert_eq!(fibonacci_at(-1), Err(NumericError::InvalidArgument));
        assert_eq!(fibonacci_sequence(-3), Err(NumericError::InvalidArgument));
    }

    #[test]
    fn test_fibonacci_upper_boundary() {
        assert_eq!(
            fibonacci_at(MAX_FIBONACCI_INPUT),
            Ok(332_825_110_087_067_562_321_196_029_789_634_457_848)
        );
        assert_eq!(
            fibonacci_at(MAX_FIBONACCI_INPUT + 1),
            Err(NumericError::Overflow)
        );
        assert_eq!(fibonacci_at(i64::MAX), Err(NumericError::Overflow));
    }

    #[test]
    fn test_fibonacci_sequence_prefix() {
        assert_eq!(fibonacci_sequence(0), Ok(vec![0]));
        assert_eq!(fibonacci_sequence(1), Ok(vec![0, 1]));
        assert_eq!(fibonacci_sequence(6), Ok(vec![0, 1, 1, 2, 3, 5, 8]));
    }

    #[test]
    fn test_fibonacci_sequence_rejects_oversized_request() {
        assert_eq!(
            fibonacci_sequence(MAX_FIBONACCI_INPUT + 1),
            Err(NumericError::Overflow)
        );
        let full = fibonacci_sequence(MAX_FIBONACCI_INPUT).unwrap();
        assert_eq!(full.len(), MAX_FIBONACCI_INPUT as usize + 1);
    }

    proptest! {
        #[test]
        fn prop_fibonacci_recurrence(n in 2i64..=MAX_FIBONACCI_INPUT) {
            let f = fibonacci_at(n).unwrap();
            let f1 = fibonacci_at(n - 1).unwrap();
            let f2 = fibonacci_at(n - 2).unwrap();
            prop_assert_eq!(f, f1 + f2);
        }

        #[test]
        fn prop_sequence_agrees_with_single_term(n in 0i64..=MAX_FIBONACCI_INPUT) {
            let sequence = fibonacci_sequence(n).unwrap();
            prop_assert_eq!(sequence.len(), n as usize + 1);
            prop_assert_eq!(sequence[n as usize], fibonacci_at(n).unwrap());
        }
    }
}
