//! Benchmark inputs for the geotile workspace.
//!
//! - [`district_block`]: a rectangle of adjacent district tiles
//! - [`pinpoint_scatter`]: deterministic pinpoint tiles spread over a district

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use geotile_region::Region;
use geotile_tile::{Direction, Tile, TileError, TileSize};

/// Build a `rows` by `cols` block of district tiles whose north-west
/// corner is `corner`, walking south and east.
pub fn district_block(corner: &str, rows: usize, cols: usize) -> Result<Region, TileError> {
    let mut row_start = Tile::from_code_with_size(corner, TileSize::District)?;
    let mut region = Region::new(row_start.clone());
    for row in 0..rows {
        let mut tile = row_start.clone();
        for col in 0..cols {
            if row > 0 || col > 0 {
                region.add_tile(tile.clone());
            }
            tile = step(&tile, Direction::East)?;
        }
        row_start = step(&row_start, Direction::South)?;
    }
    Ok(region)
}

/// `n` pinpoint tiles under the district `parent`.
///
/// Positions come from a fixed multiplicative hash of the index, so the
/// same arguments always give the same tiles.
pub fn pinpoint_scatter(parent: &str, n: usize) -> Result<Vec<Tile>, TileError> {
    let parent = Tile::from_code_with_size(parent, TileSize::District)?;
    let all = parent.subtiles(TileSize::Pinpoint)?;
    let mut out = Vec::with_capacity(n);
    for i in 0..n as u64 {
        let slot = i.wrapping_mul(6364136223846793007) % all.len() as u64;
        out.push(all[slot as usize].clone());
    }
    Ok(out)
}

fn step(tile: &Tile, direction: Direction) -> Result<Tile, TileError> {
    tile.neighbour(direction)?.ok_or_else(|| TileError::Configuration {
        reason: format!("block walks off the pole from {tile}"),
    })
}
