// ============================================================================
// Numeric Formatting Library
// Pure integer utilities: factorial, Fibonacci, Roman numerals, linear search
// ============================================================================

//! # Numeric Formatting
//!
//! Small, stateless transformations over integers and slices.
//!
//! ## Features
//!
//! - **Checked arithmetic** for factorial and Fibonacci with documented
//!   `u128` overflow boundaries
//! - **Roman numerals** via an ordered subtractive symbol table, with a
//!   canonical-only decoder and a configurable accepted range
//! - **Linear search** returning every matching index in scan order
//! - **No shared state**: every function is safe to call from any thread
//!
//! ## Example
//!
//! ```rust
//! use numeric_formatting::prelude::*;
//!
//! assert_eq!(factorial(5).unwrap(), 120);
//! assert_eq!(fibonacci_at(7).unwrap(), 13);
//! assert_eq!(roman_numeral_encode(944).unwrap(), "CMXLIV");
//!
//! // Values above 3999 need the extended range
//! let encoder = RomanEncoder::new(RomanConfig::extended());
//! assert_eq!(encoder.encode(5694).unwrap(), "MMMMMDCXCIV");
//!
//! let letters = ['a', 'b', 'c', 'b', 'b', 'd'];
//! assert_eq!(linear_search_all_indices(&'b', &letters), vec![1, 3, 4]);
//! ```

pub mod numeric;
pub mod roman;
pub mod search;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        factorial, fibonacci_at, fibonacci_sequence, NumericError, NumericResult,
    };
    pub use crate::roman::{
        roman_numeral_decode, roman_numeral_encode, RomanConfig, RomanDecoder, RomanEncoder,
        RomanRange,
    };
    pub use crate::search::{linear_search_all_indices, linear_search_first};
}
