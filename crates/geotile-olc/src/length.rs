//! Validated code lengths.

use crate::alphabet::{MAX_DIGIT_COUNT, PAIR_CODE_LENGTH};
use crate::error::CodecError;
use std::fmt;

/// Number of significant digits in a code.
///
/// Valid lengths are 2, 4, 6 and 8 (pair codes that get padded) and
/// every length from 10 to 15 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeLength(u8);

impl CodeLength {
    /// The five pair-only lengths: 2, 4, 6, 8, 10.
    pub const PAIRS: [CodeLength; 5] = [
        CodeLength(2),
        CodeLength(4),
        CodeLength(6),
        CodeLength(8),
        CodeLength(10),
    ];

    /// Validate a digit count.
    pub fn new(length: usize) -> Result<Self, CodecError> {
        let padded_pair = (2..PAIR_CODE_LENGTH).contains(&length) && length % 2 == 0;
        let unpadded = (PAIR_CODE_LENGTH..=MAX_DIGIT_COUNT).contains(&length);
        if padded_pair || unpadded {
            Ok(Self(length as u8))
        } else {
            Err(CodecError::InvalidCodeLength { length })
        }
    }

    /// The digit count.
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for CodeLength {
    type Error = CodecError;

    fn try_from(length: usize) -> Result<Self, Self::Error> {
        Self::new(length)
    }
}

impl fmt::Display for CodeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
