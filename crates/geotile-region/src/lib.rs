//! Tile regions for the geotile workspace.
//!
//! A [`Region`] stores an area as a minimal covering set of tiles:
//! redundant members are dropped and complete sibling groups are merged
//! into their parent after every update. On top of that it finds its
//! edge tiles and grows ring by ring with [`Region::expand`].
//!
//! [`NaiveRegion`] stores tiles without any compression. Both implement
//! [`TileArea`], so tests can check that the compressed form covers the
//! same area.
//!
//! # Examples
//!
//! ```
//! use geotile_region::Region;
//! use geotile_tile::{Tile, TileSize};
//!
//! let codes = ["849VWP00+", "849VVM00+", "849VVP00+"];
//! let tiles = codes.iter().map(|c| Tile::from_code(c).unwrap());
//! let mut berkeley = Region::from_tiles(tiles).unwrap();
//!
//! berkeley.expand(TileSize::District, 1).unwrap();
//! assert_eq!(berkeley.len(), 15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod area;
mod cover;
pub mod edge;
pub mod expand;
pub mod naive;
pub mod region;

pub use area::TileArea;
pub use expand::ExpandConfig;
pub use naive::NaiveRegion;
pub use region::Region;
