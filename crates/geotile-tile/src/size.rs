//! The five fixed tile sizes.

use geotile_olc::CodeLength;
use std::fmt;

/// One level of the tile hierarchy.
///
/// Each level refines its parent by a factor of 20 along both axes, so a
/// tile has exactly 400 children at the next size down. Ordering runs
/// from coarse to fine: `Global < Region < ... < Pinpoint`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileSize {
    /// 20° cells, 2-digit addresses.
    Global,
    /// 1° cells, 4-digit addresses.
    Region,
    /// 0.05° cells, 6-digit addresses.
    District,
    /// 0.0025° cells, 8-digit addresses.
    Neighborhood,
    /// 0.000125° cells, 10-digit addresses.
    Pinpoint,
}

impl TileSize {
    /// Every size, coarsest first.
    pub const ALL: [TileSize; 5] = [
        TileSize::Global,
        TileSize::Region,
        TileSize::District,
        TileSize::Neighborhood,
        TileSize::Pinpoint,
    ];

    /// Number of tiles one level refines into.
    pub const CHILDREN_PER_TILE: usize = 400;

    /// Zero-based depth in the hierarchy (`Global` is 0).
    pub const fn level(self) -> usize {
        match self {
            Self::Global => 0,
            Self::Region => 1,
            Self::District => 2,
            Self::Neighborhood => 3,
            Self::Pinpoint => 4,
        }
    }

    /// Length of an address at this size.
    pub const fn code_length(self) -> usize {
        2 * (self.level() + 1)
    }

    /// Edge length of a tile in degrees of latitude and longitude.
    pub fn edge_degrees(self) -> f64 {
        20.0 / 20f64.powi(self.level() as i32)
    }

    /// The size whose addresses have `length` digits.
    pub fn from_code_length(length: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code_length() == length)
    }

    /// The codec length producing addresses of this size.
    pub fn olc_length(self) -> CodeLength {
        CodeLength::PAIRS[self.level()]
    }

    /// Next size down, if any.
    pub fn finer(self) -> Option<Self> {
        Self::ALL.get(self.level() + 1).copied()
    }

    /// Next size up, if any.
    pub fn coarser(self) -> Option<Self> {
        self.level().checked_sub(1).map(|l| Self::ALL[l])
    }

    /// Levels separating `self` from a finer (or equal) `target`.
    ///
    /// `None` when `target` is coarser than `self`.
    pub fn levels_between(self, target: TileSize) -> Option<usize> {
        target.level().checked_sub(self.level())
    }

    /// Upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::Region => "REGION",
            Self::District => "DISTRICT",
            Self::Neighborhood => "NEIGHBORHOOD",
            Self::Pinpoint => "PINPOINT",
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
