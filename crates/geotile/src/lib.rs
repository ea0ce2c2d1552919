//! Geotile: hierarchical Plus Code tiles and the regions built from them.
//!
//! This is the facade crate that re-exports the public API of the geotile
//! sub-crates. Depending on `geotile` alone is enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use geotile::prelude::*;
//!
//! // The district holding the Berkeley campus, and the one next to it.
//! let campus = Tile::from_code("849VVP00+")?;
//! let east = campus.neighbour(Direction::East)?.expect("not at a pole");
//! assert_eq!(east.address(), "849VVQ");
//! assert!(campus.is_neighbour(&east)?);
//!
//! // A region that grows one ring of pinpoint tiles around the campus.
//! let mut region = Region::new(campus.clone());
//! region.expand(TileSize::Pinpoint, 1)?;
//! assert!(region.contains(&campus));
//! assert!(region.contains_code("849VVQC2+C2")?);
//! assert!(!region.contains(&east));
//! # Ok::<(), TileError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`olc`] | `geotile-olc` | Plus Code alphabet, encoding and decoding |
//! | [`tile`] | `geotile-tile` | Tile sizes, neighbours, distance, border subtiles |
//! | [`region`] | `geotile-region` | Covering-set regions, edges and expansion |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Plus Code codec (`geotile-olc`).
///
/// [`olc::encode`] and [`olc::decode`] convert between coordinates and
/// codes; [`olc::CodeArea`] is the decoded bounding box.
pub use geotile_olc as olc;

/// Tiles and their geometry (`geotile-tile`).
///
/// The [`tile::Tile`] type with its [`tile::TileSize`] levels, compass
/// [`tile::Direction`]s and the shared [`tile::BorderPatterns`] cache.
pub use geotile_tile as tile;

/// Tile regions (`geotile-region`).
///
/// [`region::Region`] keeps a minimal covering set;
/// [`region::NaiveRegion`] is the uncompressed reference.
pub use geotile_region as region;

/// Common imports for typical geotile usage.
///
/// ```rust
/// use geotile::prelude::*;
/// ```
pub mod prelude {
    // Tiles
    pub use geotile_tile::{Direction, Tile, TileArgs, TileSize};

    // Regions
    pub use geotile_region::{ExpandConfig, NaiveRegion, Region, TileArea};

    // Errors
    pub use geotile_tile::TileError;
}
