// ============================================================================
// Numeric Errors
// Error types for the integer utilities
// ============================================================================

use std::fmt;

/// Errors that can occur in the numeric and numeral operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A numeric precondition was violated (negative input, out of range)
    InvalidArgument,
    /// Result does not fit in the output width
    Overflow,
    /// Roman numeral text is malformed or not in canonical form
    InvalidNumeral,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidArgument => {
                write!(f, "invalid argument: numeric precondition violated")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::InvalidNumeral => {
                write!(f, "invalid numeral: not a canonical roman numeral")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
