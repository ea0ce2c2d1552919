//! Error types for codec operations.

use std::error::Error;
use std::fmt;

/// Errors arising from encoding or decoding Plus Codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A code length the codec cannot produce (odd below 10, or outside
    /// `2..=15`).
    InvalidCodeLength {
        /// The rejected length.
        length: usize,
    },
    /// The code is not a valid, full (non-shortened) Plus Code.
    NotFull {
        /// The offending code.
        code: String,
    },
    /// A character outside the code alphabet was met while reading a digit.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodeLength { length } => write!(f, "invalid code length {length}"),
            Self::NotFull { code } => write!(f, "'{code}' is not a full plus code"),
            Self::UnknownSymbol { symbol } => write!(f, "'{symbol}' is not a code symbol"),
        }
    }
}

impl Error for CodecError {}
