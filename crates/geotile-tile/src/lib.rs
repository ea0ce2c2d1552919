//! Plus Code tiles for the geotile workspace.
//!
//! A [`Tile`] is one cell of a fixed five-level grid laid over the Open
//! Location Code. Each [`TileSize`] refines the previous by 20 along both
//! axes, and a tile's address is the matching prefix of its Plus Code.
//!
//! # Geometry
//!
//! - [`Tile::neighbours`]: up to eight adjacent tiles, with pole clipping
//!   and antimeridian wrapping
//! - [`Tile::is_neighbour`] and [`Tile::contains`], across sizes
//! - [`Tile::manhattan_distance`], [`Tile::chebyshev_distance`] and
//!   [`Tile::direction`] over the base-20 address digits
//! - [`Tile::subtiles`] and [`Tile::border_subtiles`], the latter backed by
//!   the memoised [`BorderPatterns`]
//!
//! # Examples
//!
//! ```
//! use geotile_tile::{Direction, Tile};
//!
//! let tile = Tile::from_code("84VV0000+").unwrap();
//! let nw = tile.neighbour(Direction::NorthWest).unwrap().unwrap();
//! assert_eq!(nw.full_code(), "84WR0000+");
//! assert_eq!(tile.eight_point_direction_of_neighbour(&nw).unwrap(), Direction::NorthWest);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod border;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod size;
pub mod subtile;
pub mod tile;

#[cfg(test)]
pub(crate) mod compliance;

pub use args::TileArgs;
pub use border::BorderPatterns;
pub use direction::Direction;
pub use error::TileError;
pub use geometry::Neighbours;
pub use size::TileSize;
pub use tile::Tile;
