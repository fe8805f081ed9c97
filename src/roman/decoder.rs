// ============================================================================
// Roman Numeral Decoder
// Canonical-only parsing, the inverse of the encoder
// ============================================================================

use super::config::RomanConfig;
use super::encoder::encode_greedy;
use super::table::ROMAN_TABLE;
use crate::numeric::{NumericError, NumericResult};

/// Parses canonical Roman numerals within a configured range.
///
/// Accepts exactly the strings the encoder with the same configuration
/// produces. Spellings such as "IIII", "VX" or "IC" are rejected even
/// though a lenient reader could assign them a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanDecoder {
    config: RomanConfig,
}

impl RomanDecoder {
    pub fn new(config: RomanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RomanConfig {
        &self.config
    }

    /// Decode `text` to its integer value.
    ///
    /// # Errors
    /// Returns `InvalidNumeral` for empty, malformed, non-canonical or
    /// out-of-range input.
    pub fn decode(&self, text: &str) -> NumericResult<u32> {
        let max = self.config.range.max_value();
        let mut rest = text;
        let mut total: u32 = 0;

        for entry in ROMAN_TABLE.iter() {
            while let Some(tail) = rest.strip_prefix(entry.symbol) {
                total = total
                    .checked_add(entry.value)
                    .filter(|&t| t <= max)
                    .ok_or_else(|| reject(text, "value exceeds configured range"))?;
                rest = tail;
            }
        }

        if total == 0 || !rest.is_empty() {
            return Err(reject(text, "unrecognised symbols"));
        }
        if encode_greedy(total) != text {
            return Err(reject(text, "non-canonical spelling"));
        }

        tracing::trace!(numeral = text, value = total, "roman decode");
        Ok(total)
    }
}

fn reject(text: &str, reason: &'static str) -> NumericError {
    tracing::debug!(numeral = text, reason, "roman decode rejected input");
    NumericError::InvalidNumeral
}

/// Decode a numeral in the standard 1..=3999 range.
pub fn roman_numeral_decode(text: &str) -> NumericResult<u32> {
    RomanDecoder::default().decode(text)
}
