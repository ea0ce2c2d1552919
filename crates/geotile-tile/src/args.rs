//! Optional-argument tile construction.

use crate::error::TileError;
use crate::size::TileSize;
use crate::tile::Tile;
use geotile_olc::SEPARATOR;

/// Loose constructor input, as collected from a form or command line.
///
/// Exactly one construction form must be selectable:
///
/// | supplied                          | form                          |
/// |-----------------------------------|-------------------------------|
/// | `latitude` + `longitude` (+`size`)| [`Tile::from_coordinate`]     |
/// | `code` + `size`                   | [`Tile::from_code_with_size`] |
/// | `code` containing `'+'`           | [`Tile::from_code`]           |
/// | `code` without `'+'`              | [`Tile::from_address`]        |
///
/// Anything else is a [`TileError::Configuration`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileArgs {
    /// A full Plus Code or a bare address.
    pub code: Option<String>,
    /// Tile size; defaults to [`TileArgs::DEFAULT_SIZE`] for coordinates.
    pub size: Option<TileSize>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
}

enum Form<'a> {
    Coordinate(f64, f64, TileSize),
    CodeWithSize(&'a str, TileSize),
    Code(&'a str),
    Address(&'a str),
}

impl TileArgs {
    /// Size used for coordinates when none is given.
    pub const DEFAULT_SIZE: TileSize = TileSize::Pinpoint;

    fn form(&self) -> Result<Form<'_>, TileError> {
        let code = self.code.as_deref();
        match (code, self.size, self.latitude, self.longitude) {
            (None, size, Some(lat), Some(lon)) => Ok(Form::Coordinate(
                lat,
                lon,
                size.unwrap_or(Self::DEFAULT_SIZE),
            )),
            (Some(code), Some(size), None, None) => Ok(Form::CodeWithSize(code, size)),
            (Some(code), None, None, None) if code.contains(SEPARATOR) => Ok(Form::Code(code)),
            (Some(code), None, None, None) => Ok(Form::Address(code)),
            (Some(_), _, _, _) => Err(TileError::Configuration {
                reason: "give either a code or a coordinate, not both".into(),
            }),
            (None, _, Some(_), None) | (None, _, None, Some(_)) => Err(TileError::Configuration {
                reason: "latitude and longitude must be given together".into(),
            }),
            (None, _, None, None) => Err(TileError::Configuration {
                reason: "no code or coordinate given".into(),
            }),
        }
    }

    /// Check that exactly one construction form applies.
    pub fn validate(&self) -> Result<(), TileError> {
        self.form().map(|_| ())
    }
}

impl Tile {
    /// Build a tile from whichever arguments are present.
    pub fn from_args(args: &TileArgs) -> Result<Tile, TileError> {
        match args.form()? {
            Form::Coordinate(lat, lon, size) => Tile::from_coordinate(lat, lon, size),
            Form::CodeWithSize(code, size) => Tile::from_code_with_size(code, size),
            Form::Code(code) => Tile::from_code(code),
            Form::Address(address) => Tile::from_address(address),
        }
    }
}
