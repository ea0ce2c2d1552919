//! The capability shared by every tile collection.

use geotile_tile::{Tile, TileError, TileSize};

/// A 2-D area made of tiles.
///
/// Implemented by the compressing [`Region`](crate::Region) and by the
/// append-only [`NaiveRegion`](crate::NaiveRegion), which exists to
/// cross-check it.
pub trait TileArea {
    /// Whether some member contains `tile`.
    fn contains(&self, tile: &Tile) -> bool;

    /// Add a tile to the area.
    fn add_tile(&mut self, tile: Tile);

    /// The stored tiles.
    fn tiles(&self) -> impl Iterator<Item = &Tile>;

    /// The finest size among the stored tiles.
    fn smallest_tile_size(&self) -> TileSize;

    /// Whether the tile named by a Plus Code or address is inside the area.
    fn contains_code(&self, code: &str) -> Result<bool, TileError> {
        let tile: Tile = code.parse()?;
        Ok(self.contains(&tile))
    }

    /// Whether a point is inside the area.
    ///
    /// The point is resolved to a tile of [`smallest_tile_size`](Self::smallest_tile_size).
    fn contains_coordinate(&self, latitude: f64, longitude: f64) -> Result<bool, TileError> {
        let tile = Tile::from_coordinate(latitude, longitude, self.smallest_tile_size())?;
        Ok(self.contains(&tile))
    }
}
