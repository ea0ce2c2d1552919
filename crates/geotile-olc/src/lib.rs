//! Open Location Code (Plus Code) codec for the geotile workspace.
//!
//! This is the leaf crate with zero internal dependencies. It owns the
//! 20-symbol code alphabet and the three codec operations every other
//! crate relies on:
//!
//! - [`encode`]: latitude/longitude to a code of a given [`CodeLength`]
//! - [`decode`]: a full code to its [`CodeArea`]
//! - [`is_full`] (with [`is_valid`] and [`is_short`]): code validation
//!
//! # Examples
//!
//! ```
//! use geotile_olc::{decode, encode, is_full, CodeLength};
//!
//! let code = encode(47.625, -122.325, CodeLength::new(4).unwrap());
//! assert_eq!(code, "84VV0000+");
//! assert!(is_full(&code));
//!
//! let area = decode(&code).unwrap();
//! assert!((area.center_latitude() - 47.5).abs() < 1e-9);
//! assert!((area.center_longitude() + 122.5).abs() < 1e-9);
//! ```
//!
//! The first pair only spans 9 latitude rows and 18 longitude columns:
//!
//! ```
//! use geotile_olc::{index_symbol, is_full, LATITUDE_ROWS, LONGITUDE_COLUMNS};
//!
//! let last_row = index_symbol(LATITUDE_ROWS - 1).unwrap();
//! let last_column = index_symbol(LONGITUDE_COLUMNS - 1).unwrap();
//! assert!(is_full(&format!("{last_row}{last_column}000000+")));
//!
//! let past_column = index_symbol(LONGITUDE_COLUMNS).unwrap();
//! assert!(!is_full(&format!("{last_row}{past_column}000000+")));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod area;
pub mod codec;
pub mod error;
pub mod length;

pub use alphabet::{
    index_symbol, is_symbol, symbol_index, CODE_ALPHABET, ENCODING_BASE, LATITUDE_ROWS,
    LONGITUDE_COLUMNS, PADDING, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
pub use area::CodeArea;
pub use codec::{decode, encode, is_full, is_short, is_valid};
pub use error::CodecError;
pub use length::CodeLength;
