//! The [`Tile`] value type: construction and address queries.
//!
//! Geometry lives in sibling modules (`geometry`, `subtile`, `border`);
//! this module owns the representation and its invariants:
//!
//! - `address.len() == size.code_length()`
//! - every address character is an upper-case alphabet symbol
//! - the padded address is a full Plus Code

use crate::error::TileError;
use crate::size::TileSize;
use geotile_olc::{
    decode, encode, is_full, is_symbol, CodeArea, PADDING, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION,
};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A grid cell at one of the five [`TileSize`]s.
///
/// Equality, hashing and ordering use the address alone; the address
/// length already determines the size. `Tile` borrows as `str` so that
/// sets of tiles can be probed with bare address slices.
#[derive(Clone, Debug)]
pub struct Tile {
    address: String,
    size: TileSize,
}

impl Tile {
    /// Build from a validated address. Callers uphold the invariants.
    pub(crate) fn new_unchecked(address: String, size: TileSize) -> Self {
        debug_assert_eq!(address.len(), size.code_length());
        Self { address, size }
    }

    /// Tile for a full Plus Code such as `"849VQH00+"` or `"8FVC9G8F+6X"`.
    ///
    /// The size comes from where the padding starts, or from the digit
    /// count (capped at ten) when the code is unpadded.
    pub fn from_code(code: &str) -> Result<Self, TileError> {
        let digits = full_code_digits(code)?;
        let significant = match digits.find(PADDING) {
            Some(pad) => pad,
            None => digits.len().min(PAIR_CODE_LENGTH),
        };
        let size = TileSize::from_code_length(significant).ok_or_else(|| TileError::Precision {
            reason: format!("'{code}' carries {significant} digits, which is no tile size"),
        })?;
        Ok(Self::new_unchecked(digits[..significant].to_string(), size))
    }

    /// Tile of `size` containing the area a full Plus Code names.
    ///
    /// Fails with [`TileError::Precision`] when the code carries fewer
    /// digits than `size` needs.
    pub fn from_code_with_size(code: &str, size: TileSize) -> Result<Self, TileError> {
        let digits = full_code_digits(code)?;
        let available = digits.find(PADDING).unwrap_or(digits.len());
        if available < size.code_length() {
            return Err(TileError::Precision {
                reason: format!(
                    "'{code}' carries {available} digits but {size} needs {}",
                    size.code_length()
                ),
            });
        }
        Ok(Self::new_unchecked(
            digits[..size.code_length()].to_string(),
            size,
        ))
    }

    /// Tile of `size` containing a point.
    ///
    /// Latitude is clipped to the poles and longitude wrapped, so any
    /// finite coordinate succeeds.
    pub fn from_coordinate(
        latitude: f64,
        longitude: f64,
        size: TileSize,
    ) -> Result<Self, TileError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(TileError::Configuration {
                reason: format!("coordinate ({latitude}, {longitude}) is not finite"),
            });
        }
        let code = encode(latitude, longitude, size.olc_length());
        let address: String = code
            .chars()
            .filter(|&c| c != SEPARATOR && c != PADDING)
            .take(size.code_length())
            .collect();
        Ok(Self::new_unchecked(address, size))
    }

    /// Tile for a bare address such as `"849VQH"`.
    pub fn from_address(address: &str) -> Result<Self, TileError> {
        let address = address.trim().to_ascii_uppercase();
        let size = TileSize::from_code_length(address.len()).ok_or_else(|| {
            TileError::AddressFormat {
                input: address.clone(),
                reason: format!("length {} matches no tile size", address.len()),
            }
        })?;
        if let Some(symbol) = address.chars().find(|&c| !is_symbol(c)) {
            return Err(TileError::Alphabet { symbol });
        }
        let full = pad_address(&address);
        if !is_full(&full) {
            return Err(TileError::AddressFormat {
                input: address,
                reason: "does not name a place on Earth".into(),
            });
        }
        Ok(Self::new_unchecked(address, size))
    }

    /// The significant digits, without separator or padding.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Address of the enclosing tile one size up; empty at [`TileSize::Global`].
    pub fn parent_address(&self) -> &str {
        &self.address[..self.address.len() - 2]
    }

    /// The enclosing tile one size up.
    pub fn parent(&self) -> Option<Tile> {
        let size = self.size.coarser()?;
        Some(Self::new_unchecked(self.parent_address().to_string(), size))
    }

    /// The enclosing tile at a coarser (or equal) `size`.
    pub fn ancestor(&self, size: TileSize) -> Result<Tile, TileError> {
        if size > self.size {
            return Err(TileError::Precision {
                reason: format!("{size} is finer than {} tile {}", self.size, self.address),
            });
        }
        Ok(Self::new_unchecked(
            self.address[..size.code_length()].to_string(),
            size,
        ))
    }

    /// The tile's size.
    pub fn size(&self) -> TileSize {
        self.size
    }

    /// The padded Plus Code, e.g. `"849VQH00+"` or `"849VQHCX+2X"`.
    pub fn full_code(&self) -> String {
        pad_address(&self.address)
    }

    /// Decoded bounds of the tile.
    pub fn area(&self) -> Result<CodeArea, TileError> {
        Ok(decode(&self.full_code())?)
    }

    /// `(latitude, longitude)` of the tile centre.
    pub fn center(&self) -> Result<(f64, f64), TileError> {
        Ok(self.area()?.center())
    }

    /// Whether both tiles name the same cell.
    pub fn is_same_tile(&self, other: &Tile) -> bool {
        self == other
    }

    pub(crate) fn ensure_same_size(&self, other: &Tile) -> Result<(), TileError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(TileError::SizeMismatch {
                left: self.size,
                right: other.size,
            })
        }
    }
}

/// Upper-case `code`, check it is full, and return its digits.
fn full_code_digits(code: &str) -> Result<String, TileError> {
    let code = code.trim().to_ascii_uppercase();
    if !is_full(&code) {
        return Err(TileError::AddressFormat {
            input: code,
            reason: "not a full plus code".into(),
        });
    }
    Ok(code.chars().filter(|&c| c != SEPARATOR).collect())
}

fn pad_address(address: &str) -> String {
    let mut code = String::with_capacity(PAIR_CODE_LENGTH + 1);
    code.push_str(&address[..address.len().min(SEPARATOR_POSITION)]);
    while code.len() < SEPARATOR_POSITION {
        code.push(PADDING);
    }
    code.push(SEPARATOR);
    if address.len() > SEPARATOR_POSITION {
        code.push_str(&address[SEPARATOR_POSITION..]);
    }
    code
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.address.cmp(&other.address)
    }
}

impl Borrow<str> for Tile {
    fn borrow(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for Tile {
    type Err = TileError;

    /// Codes containing the separator parse as full codes, anything else
    /// as a bare address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(SEPARATOR) {
            Self::from_code(s)
        } else {
            Self::from_address(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn size_from_padding_boundary() {
        let cases = [
            ("84000000+", TileSize::Global, "84"),
            ("84VV0000+", TileSize::Region, "84VV"),
            ("849VQH00+", TileSize::District, "849VQH"),
            ("849VVPCX+", TileSize::Neighborhood, "849VVPCX"),
            ("849VVPCX+2X", TileSize::Pinpoint, "849VVPCX2X"),
        ];
        for (code, size, address) in cases {
            let tile = Tile::from_code(code).unwrap();
            assert_eq!(tile.size(), size, "{code}");
            assert_eq!(tile.address(), address);
        }
    }

    #[test]
    fn unpadded_codes_truncate_to_pinpoint() {
        let tile = Tile::from_code("8FVC9G8F+6XQQ").unwrap();
        assert_eq!(tile.size(), TileSize::Pinpoint);
        assert_eq!(tile.address(), "8FVC9G8F6X");
    }

    #[test]
    fn lower_case_input_is_normalised() {
        let tile = Tile::from_code("849vqh00+").unwrap();
        assert_eq!(tile.address(), "849VQH");
        assert_eq!(Tile::from_address("849vqh").unwrap(), tile);
    }

    #[test]
    fn from_code_rejects_short_and_malformed() {
        assert!(matches!(
            Tile::from_code("9G8F+6X"),
            Err(TileError::AddressFormat { .. })
        ));
        assert!(matches!(
            Tile::from_code("849VQH"),
            Err(TileError::AddressFormat { .. })
        ));
    }

    #[test]
    fn code_with_size_truncates() {
        let code = "CCXWXWXW+XW";
        for size in TileSize::ALL {
            let tile = Tile::from_code_with_size(code, size).unwrap();
            assert_eq!(tile.address(), &"CCXWXWXWXW"[..size.code_length()]);
            assert_eq!(tile.size(), size);
        }
    }

    #[test]
    fn code_with_size_rejects_missing_precision() {
        assert!(matches!(
            Tile::from_code_with_size("849VQH00+", TileSize::Neighborhood),
            Err(TileError::Precision { .. })
        ));
        assert!(matches!(
            Tile::from_code_with_size("849VVPCX+", TileSize::Pinpoint),
            Err(TileError::Precision { .. })
        ));
    }

    #[test]
    fn district_by_code_and_by_address_agree() {
        let by_code = Tile::from_code_with_size("CCXWXWXW+XW", TileSize::District).unwrap();
        let by_address = Tile::from_address("CCXWXW").unwrap();
        assert!(by_code.is_same_tile(&by_address));
    }

    #[test]
    fn from_coordinate_encodes() {
        let tile = Tile::from_coordinate(47.625, -122.325, TileSize::Region).unwrap();
        assert_eq!(tile.address(), "84VV");
        let zurich = Tile::from_coordinate(47.365590, 8.524997, TileSize::Pinpoint).unwrap();
        assert_eq!(zurich.full_code(), "8FVC9G8F+6X");
    }

    #[test]
    fn from_coordinate_rejects_nan() {
        assert!(matches!(
            Tile::from_coordinate(f64::NAN, 0.0, TileSize::Global),
            Err(TileError::Configuration { .. })
        ));
    }

    #[test]
    fn from_address_errors() {
        assert!(matches!(
            Tile::from_address("849"),
            Err(TileError::AddressFormat { .. })
        ));
        assert!(matches!(
            Tile::from_address("849VQA"),
            Err(TileError::Alphabet { symbol: 'A' })
        ));
        assert!(matches!(
            Tile::from_address("XX"),
            Err(TileError::AddressFormat { .. })
        ));
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn full_code_pads_and_places_separator() {
        assert_eq!(Tile::from_address("84").unwrap().full_code(), "84000000+");
        assert_eq!(Tile::from_address("849VVPCX").unwrap().full_code(), "849VVPCX+");
        assert_eq!(
            Tile::from_address("CCCCCCCCCC").unwrap().full_code(),
            "CCCCCCCC+CC"
        );
    }

    #[test]
    fn parent_and_ancestor() {
        let tile = Tile::from_address("849VQHCX").unwrap();
        assert_eq!(tile.parent_address(), "849VQH");
        assert_eq!(tile.parent().unwrap().address(), "849VQH");
        assert_eq!(tile.ancestor(TileSize::Global).unwrap().address(), "84");
        assert_eq!(tile.ancestor(TileSize::Neighborhood).unwrap(), tile);
        assert!(matches!(
            tile.ancestor(TileSize::Pinpoint),
            Err(TileError::Precision { .. })
        ));

        let global = Tile::from_address("84").unwrap();
        assert_eq!(global.parent_address(), "");
        assert!(global.parent().is_none());
    }

    #[test]
    fn area_of_region_tile() {
        let area = Tile::from_address("84VV").unwrap().area().unwrap();
        assert_eq!((area.south, area.west, area.north, area.east), (47.0, -123.0, 48.0, -122.0));
    }

    #[test]
    fn parse_chooses_form_by_separator() {
        let a: Tile = "849VQH00+".parse().unwrap();
        let b: Tile = "849VQH".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "849VQH");
    }

    #[test]
    fn full_code_round_trips_address() {
        for address in ["CF", "84VV", "849VQH", "849VVPCX", "849VVPCX2X"] {
            let tile = Tile::from_address(address).unwrap();
            assert_eq!(Tile::from_code(&tile.full_code()).unwrap().address(), address);
        }
    }
}
