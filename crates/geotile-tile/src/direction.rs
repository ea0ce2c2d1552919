//! Eight-point compass directions.

use crate::error::TileError;
use std::fmt;
use std::str::FromStr;

/// A compass direction on the tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Increasing latitude.
    North,
    /// North and east.
    NorthEast,
    /// Increasing longitude.
    East,
    /// South and east.
    SouthEast,
    /// Decreasing latitude.
    South,
    /// South and west.
    SouthWest,
    /// Decreasing longitude.
    West,
    /// North and west.
    NorthWest,
}

impl Direction {
    /// All eight directions in clockwise compass order starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four single-letter directions.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(latitude, longitude)` unit step, each component in `-1..=1`.
    pub const fn unit(self) -> (i8, i8) {
        match self {
            Self::North => (1, 0),
            Self::NorthEast => (1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (-1, 1),
            Self::South => (-1, 0),
            Self::SouthWest => (-1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (1, -1),
        }
    }

    /// Inverse of [`unit`](Self::unit). `None` for `(0, 0)` or out-of-range steps.
    pub fn from_unit(lat: i8, lon: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.unit() == (lat, lon))
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        // Variants are declared in `ALL` order.
        Self::ALL[(self as usize + 4) % 8]
    }

    /// Whether this is one of N, E, S, W.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// Short compass label such as `"NE"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == wanted)
            .ok_or_else(|| TileError::Configuration {
                reason: format!("unknown compass direction '{s}'"),
            })
    }
}
