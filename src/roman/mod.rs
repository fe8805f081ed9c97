// ============================================================================
// Roman Numeral Module
// Encoding and decoding over the standard symbol set {I, V, X, L, C, D, M}
// ============================================================================

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod table;

pub use config::{RomanConfig, RomanRange, DEFAULT_EXTENDED_MAX};
pub use decoder::{roman_numeral_decode, RomanDecoder};
pub use encoder::{roman_numeral_encode, RomanEncoder};
pub use table::{RomanSymbol, ROMAN_TABLE, STANDARD_MAX};
