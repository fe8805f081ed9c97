// ============================================================================
// Roman Numeral Encoder
// Greedy descending walk over the subtractive symbol table
// ============================================================================

use super::config::RomanConfig;
use super::table::{ROMAN_TABLE, STANDARD_MAX_LEN};
use crate::numeric::{NumericError, NumericResult};

/// Encodes integers as Roman numerals within a configured range.
///
/// # Example
/// ```text
/// 944  -> 900 CM, 40 XL, 4 IV   -> "CMXLIV"
/// 5694 -> 5 x M, 500 D, 100 C, 90 XC, 4 IV -> "MMMMMDCXCIV" (extended only)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanEncoder {
    config: RomanConfig,
}

impl RomanEncoder {
    pub fn new(config: RomanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RomanConfig {
        &self.config
    }

    /// Encode `n` as a Roman numeral.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `n` is outside the configured range.
    pub fn encode(&self, n: i64) -> NumericResult<String> {
        if !self.config.range.contains(n) {
            tracing::debug!(
                n,
                max = self.config.range.max_value(),
                "roman encode rejected out-of-range input"
            );
            return Err(NumericError::InvalidArgument);
        }

        let numeral = encode_greedy(n as u32);
        tracing::trace!(n, %numeral, "roman encode");
        Ok(numeral)
    }
}

/// Greedy conversion without range checks. Values above 3999 repeat `M`.
pub(crate) fn encode_greedy(value: u32) -> String {
    let thousands = (value / 1000) as usize;
    let mut numeral = String::with_capacity(STANDARD_MAX_LEN + thousands);
    let mut remaining = value;

    for entry in ROMAN_TABLE.iter() {
        let count = remaining / entry.value;
        if count > 0 {
            numeral.push_str(&entry.symbol.repeat(count as usize));
            remaining -= entry.value * count;
        }
    }

    numeral
}

/// Encode `n` in the standard 1..=3999 range.
///
/// # Example
/// ```
/// use numeric_formatting::roman::roman_numeral_encode;
///
/// assert_eq!(roman_numeral_encode(944).unwrap(), "CMXLIV");
/// ```
pub fn roman_numeral_encode(n: i64) -> NumericResult<String> {
    RomanEncoder::default().encode(n)
}
