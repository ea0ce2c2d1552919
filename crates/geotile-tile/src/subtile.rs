//! Enumeration of the tiles inside a tile.

use crate::error::TileError;
use crate::size::TileSize;
use crate::tile::Tile;
use geotile_olc::alphabet::SYMBOLS;

impl Tile {
    /// Number of levels from `self` down to `size`.
    pub(crate) fn depth_to(&self, size: TileSize) -> Result<usize, TileError> {
        self.size()
            .levels_between(size)
            .ok_or_else(|| TileError::Precision {
                reason: format!(
                    "cannot refine {} tile {} to coarser size {size}",
                    self.size(),
                    self
                ),
            })
    }

    /// The 400 tiles one size down, or none at [`TileSize::Pinpoint`].
    pub fn children(&self) -> Vec<Tile> {
        let Some(size) = self.size().finer() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(TileSize::CHILDREN_PER_TILE);
        for &lat in &SYMBOLS {
            for &lon in &SYMBOLS {
                let mut address = String::with_capacity(size.code_length());
                address.push_str(self.address());
                address.push(lat as char);
                address.push(lon as char);
                out.push(Tile::new_unchecked(address, size));
            }
        }
        out
    }

    /// Every tile of `size` inside `self`: `400^levels` of them.
    ///
    /// Asking for the tile's own size returns just the tile.
    pub fn subtiles(&self, size: TileSize) -> Result<Vec<Tile>, TileError> {
        let depth = self.depth_to(size)?;
        let mut tiles = vec![self.clone()];
        for _ in 0..depth {
            tiles = tiles.iter().flat_map(Tile::children).collect();
        }
        Ok(tiles)
    }
}
