// ============================================================================
// Roman Numeral Configuration
// Accepted value range for encoding and decoding
// ============================================================================

use super::table::STANDARD_MAX;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default ceiling for `RomanRange::Extended` (one hundred `M`s).
pub const DEFAULT_EXTENDED_MAX: u32 = 100_000;

/// Which values the codec accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RomanRange {
    /// Classical range 1..=3999
    /// - Every value has exactly one canonical spelling
    /// - Anything else is rejected with `InvalidArgument`
    #[default]
    Standard,

    /// Greedy encoding beyond 3999 by repeating `M`
    /// - 5694 becomes "MMMMMDCXCIV"
    /// - Still rejects zero and negatives
    Extended {
        /// Largest value accepted (bounds the output length)
        max_value: u32,
    },
}

impl RomanRange {
    /// Largest value this range accepts.
    #[inline]
    pub const fn max_value(&self) -> u32 {
        match self {
            RomanRange::Standard => STANDARD_MAX,
            RomanRange::Extended { max_value } => *max_value,
        }
    }

    /// Whether `n` falls inside `1..=max_value()`.
    #[inline]
    pub fn contains(&self, n: i64) -> bool {
        n >= 1 && n <= i64::from(self.max_value())
    }
}

/// Configuration shared by `RomanEncoder` and `RomanDecoder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RomanConfig {
    pub range: RomanRange,
}

impl RomanConfig {
    pub fn new(range: RomanRange) -> Self {
        Self { range }
    }

    /// Classical 1..=3999 configuration.
    pub fn standard() -> Self {
        Self::new(RomanRange::Standard)
    }

    /// Extended range up to `DEFAULT_EXTENDED_MAX`.
    pub fn extended() -> Self {
        Self::new(RomanRange::Extended {
            max_value: DEFAULT_EXTENDED_MAX,
        })
    }

    /// Switch to the extended range with a custom ceiling.
    pub fn with_extended_max(mut self, max_value: u32) -> Self {
        self.range = RomanRange::Extended { max_value };
        self
    }
}
