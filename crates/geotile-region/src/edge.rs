//! Edge-tile detection.

use crate::region::Region;
use geotile_tile::{BorderPatterns, Tile, TileError, TileSize};
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::trace;

/// Interior/exterior verdicts for neighbour addresses, kept for one scan.
#[derive(Default)]
struct Classifier {
    interior: HashSet<String>,
    exterior: HashSet<String>,
}

impl Classifier {
    fn is_outside(&mut self, region: &Region, tile: &Tile) -> bool {
        let address = tile.address();
        if self.interior.contains(address) {
            return false;
        }
        if self.exterior.contains(address) {
            return true;
        }
        if region.contains(tile) {
            self.interior.insert(address.to_string());
            false
        } else {
            self.exterior.insert(address.to_string());
            true
        }
    }
}

impl Region {
    /// Members with at least one uncovered neighbouring cell.
    ///
    /// Each member is probed through its pinpoint border subtiles (or
    /// itself, at pinpoint size). Cost grows with `400^levels` of the
    /// coarsest member, so regions with global or region-sized members
    /// are expensive to scan.
    pub fn edge_tiles(&self) -> Result<IndexSet<Tile>, TileError> {
        let mut patterns = BorderPatterns::shared();
        self.edge_tiles_with(&mut patterns)
    }

    /// As [`edge_tiles`](Self::edge_tiles), with a caller-owned pattern cache.
    pub fn edge_tiles_with(
        &self,
        patterns: &mut BorderPatterns,
    ) -> Result<IndexSet<Tile>, TileError> {
        let mut verdicts = Classifier::default();
        let mut edges = IndexSet::new();
        for member in &self.members {
            let border = member.border_subtiles_with(patterns, TileSize::Pinpoint, None)?;
            'probe: for sub in &border {
                for nb in sub.neighbours()? {
                    if verdicts.is_outside(self, &nb) {
                        edges.insert(member.clone());
                        break 'probe;
                    }
                }
            }
        }
        trace!(
            members = self.members.len(),
            edges = edges.len(),
            interior = verdicts.interior.len(),
            exterior = verdicts.exterior.len(),
            "classified edge tiles"
        );
        Ok(edges)
    }
}
