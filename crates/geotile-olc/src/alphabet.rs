//! The 20-symbol code alphabet and its lookup tables.

/// Code symbols in ascending digit order.
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Code symbols as bytes, indexed by digit value.
pub const SYMBOLS: [u8; ENCODING_BASE] = *b"23456789CFGHJMPQRVWX";

/// Number of symbols, i.e. the radix of every code digit.
pub const ENCODING_BASE: usize = 20;

/// Separates the first eight digits from the rest of a code.
pub const SEPARATOR: char = '+';

/// Index at which [`SEPARATOR`] sits in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Pads codes shorter than [`SEPARATOR_POSITION`] digits.
pub const PADDING: char = '0';

/// Number of digits encoded as latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Longest code the codec will produce or read.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Rows of the grid refinement beyond [`PAIR_CODE_LENGTH`].
pub const GRID_ROWS: usize = 5;

/// Columns of the grid refinement beyond [`PAIR_CODE_LENGTH`].
pub const GRID_COLUMNS: usize = 4;

/// Latitude bands used by the first digit (180° / 20°).
pub const LATITUDE_ROWS: usize = 9;

/// Longitude bands used by the second digit (360° / 20°).
///
/// This is also the modulus of the east/west wraparound at the
/// antimeridian.
pub const LONGITUDE_COLUMNS: usize = 18;

const NOT_A_SYMBOL: u8 = u8::MAX;

const SYMBOL_TO_INDEX: [u8; 128] = build_symbol_table();

const fn build_symbol_table() -> [u8; 128] {
    let mut table = [NOT_A_SYMBOL; 128];
    let mut i = 0;
    while i < ENCODING_BASE {
        let upper = SYMBOLS[i];
        table[upper as usize] = i as u8;
        table[upper.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Digit value of a code symbol, accepting either case.
///
/// Returns `None` for anything outside the alphabet, including the
/// separator and padding characters.
pub fn symbol_index(symbol: char) -> Option<usize> {
    let code = symbol as u32;
    if code >= 128 {
        return None;
    }
    match SYMBOL_TO_INDEX[code as usize] {
        NOT_A_SYMBOL => None,
        index => Some(index as usize),
    }
}

/// Upper-case code symbol for a digit value.
pub fn index_symbol(index: usize) -> Option<char> {
    SYMBOLS.get(index).map(|&b| b as char)
}

/// Whether `symbol` belongs to the code alphabet (either case).
pub fn is_symbol(symbol: char) -> bool {
    symbol_index(symbol).is_some()
}
