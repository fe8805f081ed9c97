// ============================================================================
// Roman Symbol Table
// Ordered (value, symbol) pairs including subtractive forms
// ============================================================================

/// One entry of the Roman conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanSymbol {
    /// Integer value the symbol stands for
    pub value: u32,
    /// Symbol text (one or two characters)
    pub symbol: &'static str,
}

impl RomanSymbol {
    const fn new(value: u32, symbol: &'static str) -> Self {
        Self { value, symbol }
    }

    /// Whether this is a two-character subtractive form (CM, CD, XC, ...).
    #[inline]
    pub const fn is_subtractive(&self) -> bool {
        self.symbol.len() == 2
    }
}

/// Conversion table in strictly descending value order.
///
/// Both the encoder and the decoder walk this table front to back; every
/// subtractive pair must sit directly before the plain symbol it undercuts.
pub const ROMAN_TABLE: [RomanSymbol; 13] = [
    RomanSymbol::new(1000, "M"),
    RomanSymbol::new(900, "CM"),
    RomanSymbol::new(500, "D"),
    RomanSymbol::new(400, "CD"),
    RomanSymbol::new(100, "C"),
    RomanSymbol::new(90, "XC"),
    RomanSymbol::new(50, "L"),
    RomanSymbol::new(40, "XL"),
    RomanSymbol::new(10, "X"),
    RomanSymbol::new(9, "IX"),
    RomanSymbol::new(5, "V"),
    RomanSymbol::new(4, "IV"),
    RomanSymbol::new(1, "I"),
];

/// Largest value the standard symbol set spells canonically.
pub const STANDARD_MAX: u32 = 3999;

/// Longest canonical numeral in the standard range ("MMMDCCCLXXXVIII").
pub const STANDARD_MAX_LEN: usize = 15;

const fn is_strictly_descending(table: &[RomanSymbol]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i].value >= table[i - 1].value {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_strictly_descending(&ROMAN_TABLE));
