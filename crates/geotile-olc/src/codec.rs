//! Encoding, decoding and validation of full Plus Codes.
//!
//! Decoding sums integer place values and divides once per bound at the
//! end, so every bound is the nearest `f64` to its exact value rather
//! than accumulating one rounding error per digit.

use crate::alphabet::{
    symbol_index, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, LATITUDE_ROWS, LONGITUDE_COLUMNS,
    MAX_DIGIT_COUNT, PADDING, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION, SYMBOLS,
};
use crate::area::{CodeArea, LATITUDE_MAX, LONGITUDE_MAX};
use crate::error::CodecError;
use crate::length::CodeLength;

const GRID_CODE_LENGTH: u32 = (MAX_DIGIT_COUNT - PAIR_CODE_LENGTH) as u32;

/// Integer units per degree after the five pairs.
const PAIR_PRECISION: i64 = 8000;

/// Place value of the first pair, in [`PAIR_PRECISION`] units.
const PAIR_FIRST_PLACE_VALUE: i64 = 160_000;

/// Integer units per degree of latitude after the full grid refinement.
const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * (GRID_ROWS as i64).pow(GRID_CODE_LENGTH);

/// Integer units per degree of longitude after the full grid refinement.
const FINAL_LNG_PRECISION: i64 = PAIR_PRECISION * (GRID_COLUMNS as i64).pow(GRID_CODE_LENGTH);

/// Grid units per pair unit, per axis.
const GRID_LAT_SCALE: i64 = FINAL_LAT_PRECISION / PAIR_PRECISION;
const GRID_LNG_SCALE: i64 = FINAL_LNG_PRECISION / PAIR_PRECISION;

const GRID_LAT_FIRST_PLACE_VALUE: i64 = (GRID_ROWS as i64).pow(GRID_CODE_LENGTH - 1);
const GRID_LNG_FIRST_PLACE_VALUE: i64 = (GRID_COLUMNS as i64).pow(GRID_CODE_LENGTH - 1);

fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

fn normalize_longitude(longitude: f64) -> f64 {
    let lng = (longitude + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;
    // rem_euclid can round up to the modulus itself for tiny negative inputs.
    if lng >= LONGITUDE_MAX {
        -LONGITUDE_MAX
    } else {
        lng
    }
}

/// Height in degrees of a code of `length` digits.
fn latitude_precision(length: usize) -> f64 {
    let base = ENCODING_BASE as f64;
    if length <= PAIR_CODE_LENGTH {
        base.powi(2 - (length / 2) as i32)
    } else {
        base.powi(-3) / (GRID_ROWS as f64).powi((length - PAIR_CODE_LENGTH) as i32)
    }
}

/// Scale to integer units, rounding away float noise below 1e-6 units.
fn to_units(degrees: f64, precision: i64) -> i64 {
    ((degrees * precision as f64 * 1e6).round() / 1e6).floor() as i64
}

/// Encode a location as a full Plus Code.
///
/// Latitude is clipped to `[-90, 90]` and longitude normalised into
/// `[-180, 180)`. Codes shorter than eight digits are padded with `0`
/// and end with the separator.
pub fn encode(latitude: f64, longitude: f64, length: CodeLength) -> String {
    let length = length.get();
    let mut lat = clip_latitude(latitude);
    let lng = normalize_longitude(longitude);
    if lat == LATITUDE_MAX {
        lat -= latitude_precision(length);
    }

    let mut lat_val = to_units(lat + LATITUDE_MAX, FINAL_LAT_PRECISION);
    let mut lng_val = to_units(lng + LONGITUDE_MAX, FINAL_LNG_PRECISION);

    let mut digits = [0u8; MAX_DIGIT_COUNT];
    if length > PAIR_CODE_LENGTH {
        for slot in digits[PAIR_CODE_LENGTH..].iter_mut().rev() {
            let row = lat_val % GRID_ROWS as i64;
            let col = lng_val % GRID_COLUMNS as i64;
            *slot = SYMBOLS[(row * GRID_COLUMNS as i64 + col) as usize];
            lat_val /= GRID_ROWS as i64;
            lng_val /= GRID_COLUMNS as i64;
        }
    } else {
        lat_val /= (GRID_ROWS as i64).pow(GRID_CODE_LENGTH);
        lng_val /= (GRID_COLUMNS as i64).pow(GRID_CODE_LENGTH);
    }

    let base = ENCODING_BASE as i64;
    for pair in digits[..PAIR_CODE_LENGTH].chunks_exact_mut(2).rev() {
        pair[0] = SYMBOLS[(lat_val % base) as usize];
        pair[1] = SYMBOLS[(lng_val % base) as usize];
        lat_val /= base;
        lng_val /= base;
    }

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    for (i, &digit) in digits.iter().enumerate() {
        if i == SEPARATOR_POSITION {
            code.push(SEPARATOR);
        }
        if i < length {
            code.push(digit as char);
        } else if i < SEPARATOR_POSITION {
            code.push(PADDING);
        } else {
            break;
        }
    }
    code
}

fn digit(symbol: char) -> Result<i64, CodecError> {
    symbol_index(symbol)
        .map(|i| i as i64)
        .ok_or(CodecError::UnknownSymbol { symbol })
}

/// Decode a full Plus Code into the area it covers.
///
/// Digits past the fifteenth are ignored.
pub fn decode(code: &str) -> Result<CodeArea, CodecError> {
    if !is_full(code) {
        return Err(CodecError::NotFull {
            code: code.to_string(),
        });
    }
    let digits: Vec<char> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING)
        .take(MAX_DIGIT_COUNT)
        .collect();

    let mut normal_lat = -(LATITUDE_MAX as i64) * PAIR_PRECISION;
    let mut normal_lng = -(LONGITUDE_MAX as i64) * PAIR_PRECISION;
    let mut place = PAIR_FIRST_PLACE_VALUE;
    let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
    for i in (0..pair_digits).step_by(2) {
        normal_lat += digit(digits[i])? * place;
        normal_lng += digit(digits[i + 1])? * place;
        if i + 2 < pair_digits {
            place /= ENCODING_BASE as i64;
        }
    }
    let mut lat_height = place * GRID_LAT_SCALE;
    let mut lng_width = place * GRID_LNG_SCALE;

    let mut grid_lat = 0i64;
    let mut grid_lng = 0i64;
    if digits.len() > PAIR_CODE_LENGTH {
        let mut row_place = GRID_LAT_FIRST_PLACE_VALUE;
        let mut col_place = GRID_LNG_FIRST_PLACE_VALUE;
        for i in PAIR_CODE_LENGTH..digits.len() {
            let value = digit(digits[i])?;
            grid_lat += value / GRID_COLUMNS as i64 * row_place;
            grid_lng += value % GRID_COLUMNS as i64 * col_place;
            if i + 1 < digits.len() {
                row_place /= GRID_ROWS as i64;
                col_place /= GRID_COLUMNS as i64;
            }
        }
        lat_height = row_place;
        lng_width = col_place;
    }

    let south = normal_lat * GRID_LAT_SCALE + grid_lat;
    let west = normal_lng * GRID_LNG_SCALE + grid_lng;
    let lat_units = FINAL_LAT_PRECISION as f64;
    let lng_units = FINAL_LNG_PRECISION as f64;
    Ok(CodeArea {
        south: south as f64 / lat_units,
        west: west as f64 / lng_units,
        north: (south + lat_height) as f64 / lat_units,
        east: (west + lng_width) as f64 / lng_units,
        code_length: digits.len(),
    })
}

/// Whether `code` is a syntactically valid Plus Code, full or short.
pub fn is_valid(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() <= 1 {
        return false;
    }
    let mut separators = chars.iter().enumerate().filter(|(_, &c)| c == SEPARATOR);
    let sep = match (separators.next(), separators.next()) {
        (Some((i, _)), None) => i,
        _ => return false,
    };
    if sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }

    if let Some(first_pad) = chars.iter().position(|&c| c == PADDING) {
        if sep < SEPARATOR_POSITION || first_pad == 0 {
            return false;
        }
        let last_pad = chars.iter().rposition(|&c| c == PADDING).unwrap_or(first_pad);
        let run = &chars[first_pad..=last_pad];
        if run.len() % 2 == 1 || run.iter().any(|&c| c != PADDING) {
            return false;
        }
        if chars.last() != Some(&SEPARATOR) {
            return false;
        }
    }

    if chars.len() - sep - 1 == 1 {
        return false;
    }
    chars
        .iter()
        .all(|&c| c == SEPARATOR || c == PADDING || symbol_index(c).is_some())
}

/// Whether `code` is a valid code with digits dropped from the front.
pub fn is_short(code: &str) -> bool {
    is_valid(code) && code.find(SEPARATOR).is_some_and(|sep| sep < SEPARATOR_POSITION)
}

/// Whether `code` is a valid code that identifies one area on Earth.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }
    let mut chars = code.chars();
    let lat_ok = chars
        .next()
        .and_then(symbol_index)
        .is_some_and(|i| i < LATITUDE_ROWS);
    let lng_ok = match chars.next() {
        Some(SEPARATOR) | None => true,
        Some(c) => symbol_index(c).is_some_and(|i| i < LONGITUDE_COLUMNS),
    };
    lat_ok && lng_ok
}
