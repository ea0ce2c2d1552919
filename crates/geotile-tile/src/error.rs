//! Error types for tile and region operations.

use crate::size::TileSize;
use geotile_olc::CodecError;
use std::fmt;

/// Errors arising from tile construction, tile geometry or region updates.
///
/// All of these are input or programming errors; none is transient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileError {
    /// Invalid or ambiguous arguments, or an empty region.
    Configuration {
        /// What went wrong.
        reason: String,
    },
    /// A malformed code, or an address whose length matches no tile size.
    AddressFormat {
        /// The rejected input.
        input: String,
        /// What went wrong.
        reason: String,
    },
    /// A character outside the code alphabet was met while reading a digit.
    Alphabet {
        /// The offending character.
        symbol: char,
    },
    /// The operation needs more (or less) precision than the input carries.
    Precision {
        /// What went wrong.
        reason: String,
    },
    /// A binary operation was given tiles of different sizes.
    SizeMismatch {
        /// Size of the receiver.
        left: TileSize,
        /// Size of the argument.
        right: TileSize,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::AddressFormat { input, reason } => {
                write!(f, "malformed address '{input}': {reason}")
            }
            Self::Alphabet { symbol } => {
                write!(f, "'{symbol}' is not in the code alphabet")
            }
            Self::Precision { reason } => write!(f, "precision error: {reason}"),
            Self::SizeMismatch { left, right } => {
                write!(f, "tile size mismatch: {left} vs {right}")
            }
        }
    }
}

impl std::error::Error for TileError {}

impl From<CodecError> for TileError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::UnknownSymbol { symbol } => Self::Alphabet { symbol },
            CodecError::NotFull { code } => Self::AddressFormat {
                input: code,
                reason: "not a full plus code".into(),
            },
            CodecError::InvalidCodeLength { length } => Self::AddressFormat {
                input: length.to_string(),
                reason: "no code has this many digits".into(),
            },
        }
    }
}
