//! Uncompressed reference region.

use crate::area::TileArea;
use crate::region::Region;
use geotile_tile::{Tile, TileError, TileSize};

/// Append-only tile collection with no merging or subsumption.
///
/// Only useful as an oracle: every operation is linear in the number of
/// tiles ever added.
#[derive(Clone, Debug)]
pub struct NaiveRegion {
    tiles: Vec<Tile>,
    smallest: TileSize,
}

impl NaiveRegion {
    /// A collection of one tile.
    pub fn new(tile: Tile) -> Self {
        Self {
            smallest: tile.size(),
            tiles: vec![tile],
        }
    }

    /// A collection of every tile given, duplicates included.
    pub fn from_tiles<I>(tiles: I) -> Result<Self, TileError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut iter = tiles.into_iter();
        let first = iter.next().ok_or_else(|| TileError::Configuration {
            reason: "a region needs at least one tile".into(),
        })?;
        let mut naive = Self::new(first);
        for tile in iter {
            naive.add_tile(tile);
        }
        Ok(naive)
    }

    /// Whether some stored tile contains `tile`.
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.iter().any(|t| t.contains(tile))
    }

    /// Append a tile.
    pub fn add_tile(&mut self, tile: Tile) {
        self.smallest = self.smallest.max(tile.size());
        self.tiles.push(tile);
    }

    /// Every tile ever added, in insertion order.
    pub fn members(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of stored tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a naive region starts with one tile.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The finest size ever added.
    pub fn smallest_tile_size(&self) -> TileSize {
        self.smallest
    }

    /// Whether the union of stored tiles covers all of `tile`.
    pub fn covers(&self, tile: &Tile) -> bool {
        if self.contains(tile) {
            return true;
        }
        if !self.tiles.iter().any(|t| tile.contains(t)) {
            return false;
        }
        tile.children().iter().all(|child| self.covers(child))
    }

    /// Whether `region` covers exactly the same area as this collection.
    pub fn covers_same_area(&self, region: &Region) -> bool {
        self.tiles.iter().all(|t| region.contains(t))
            && region.members().iter().all(|m| self.covers(m))
    }
}

impl TileArea for NaiveRegion {
    fn contains(&self, tile: &Tile) -> bool {
        NaiveRegion::contains(self, tile)
    }

    fn add_tile(&mut self, tile: Tile) {
        NaiveRegion::add_tile(self, tile);
    }

    fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    fn smallest_tile_size(&self) -> TileSize {
        self.smallest
    }
}
