//! Ring-wise region expansion.

use crate::cover::covers;
use crate::region::Region;
use geotile_tile::{BorderPatterns, TileError, TileSize};
use indexmap::IndexSet;
use std::cmp::Ordering;
use tracing::debug;

/// Parameters for [`Region::expand_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Size of the tiles added around the region.
    pub target_size: TileSize,
    /// Number of rings to add. Must be at least 1.
    pub rings: u32,
}

impl ExpandConfig {
    /// Default target size.
    pub const DEFAULT_TARGET_SIZE: TileSize = TileSize::Pinpoint;
    /// Default ring count.
    pub const DEFAULT_RINGS: u32 = 1;

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), TileError> {
        if self.rings == 0 {
            return Err(TileError::Configuration {
                reason: "rings must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            target_size: Self::DEFAULT_TARGET_SIZE,
            rings: Self::DEFAULT_RINGS,
        }
    }
}

impl Region {
    /// Grow the region by `rings` rings of `target_size` tiles.
    pub fn expand(&mut self, target_size: TileSize, rings: u32) -> Result<(), TileError> {
        self.expand_with(&ExpandConfig { target_size, rings })
    }

    /// Grow the region as `config` describes.
    ///
    /// Each ring stages the uncovered neighbours of the current edge
    /// tiles and merges them in one step, so tiles found from different
    /// edges in the same ring never hide one another. A neighbour coarser
    /// than the target contributes only its border subtiles facing the
    /// edge; a finer one contributes its enclosing target-size tile.
    ///
    /// The region is left untouched when an error is returned.
    pub fn expand_with(&mut self, config: &ExpandConfig) -> Result<(), TileError> {
        config.validate()?;
        let target = config.target_size;
        let mut working = self.clone();
        let mut patterns = BorderPatterns::shared();

        for ring in 1..=config.rings {
            let edges = working.edge_tiles_with(&mut patterns)?;
            let mut staged = IndexSet::new();
            for edge in &edges {
                for nb in edge.neighbours()? {
                    if working.contains(&nb) || covers(&staged, &nb) {
                        continue;
                    }
                    match nb.size().cmp(&target) {
                        Ordering::Equal => {
                            staged.insert(nb);
                        }
                        Ordering::Less => {
                            let facing = nb.eight_point_direction_of_neighbour(edge)?;
                            let band = nb.border_subtiles_with(&mut patterns, target, Some(facing))?;
                            staged.extend(band.into_iter().filter(|t| !working.contains(t)));
                        }
                        Ordering::Greater => {
                            staged.insert(nb.ancestor(target)?);
                        }
                    }
                }
            }
            let staged_count = staged.len();
            working.extend_canonical(staged);
            debug!(
                ring,
                edges = edges.len(),
                staged = staged_count,
                members = working.len(),
                "expanded ring"
            );
        }

        *self = working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotile_tile::Tile;

    #[test]
    fn default_config() {
        let config = ExpandConfig::default();
        assert_eq!(config.target_size, TileSize::Pinpoint);
        assert_eq!(config.rings, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rings_rejected_without_mutation() {
        let tile = Tile::from_address("849VQH").unwrap();
        let mut region = Region::new(tile);
        let before = region.clone();
        let err = region.expand(TileSize::District, 0);
        assert!(matches!(err, Err(TileError::Configuration { .. })));
        assert_eq!(region, before);
    }

    #[test]
    fn lone_tile_gains_eight_neighbours() {
        let tile = Tile::from_address("849VQH").unwrap();
        let mut region = Region::new(tile.clone());
        region.expand(TileSize::District, 1).unwrap();
        assert_eq!(region.len(), 9);
        for nb in tile.neighbours().unwrap() {
            assert!(region.contains(&nb));
        }
    }

    #[test]
    fn coarse_edge_grows_by_facing_bands() {
        let tile = Tile::from_address("849VQH").unwrap();
        let mut region = Region::new(tile.clone());
        region.expand(TileSize::Neighborhood, 1).unwrap();
        // Four bands of 20 plus four corners.
        assert_eq!(region.len(), 1 + 4 * 20 + 4);
        let north = tile.neighbour(geotile_tile::Direction::North).unwrap().unwrap();
        assert!(region.contains(&Tile::from_address(&format!("{}2C", north.address())).unwrap()));
        assert!(!region.contains(&Tile::from_address(&format!("{}3C", north.address())).unwrap()));
    }

    #[test]
    fn finer_neighbours_lift_to_target_size() {
        let tile = Tile::from_address("849VQHCX2X").unwrap();
        let mut region = Region::new(tile.clone());
        region.expand(TileSize::Neighborhood, 1).unwrap();
        assert!(region.contains(&tile));
        assert!(region.smallest_tile_size() <= TileSize::Neighborhood);
        let east = tile.neighbour(geotile_tile::Direction::East).unwrap().unwrap();
        assert!(region.contains(&east.ancestor(TileSize::Neighborhood).unwrap()));
    }
}
