//! Canonicalisation into a minimal covering set.
//!
//! Two passes, in order:
//!
//! 1. drop every tile that has a strict ancestor in the set;
//! 2. replace each complete group of 400 siblings by their parent,
//!    finest size first, since a merge can complete a group one level up.
//!
//! Pass 2 only runs when some parent address already counts 400 children.

use geotile_tile::{Tile, TileSize};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use tracing::debug;

/// Whether `tile`, or one of its ancestors, is in `tiles`.
pub(crate) fn covers(tiles: &IndexSet<Tile>, tile: &Tile) -> bool {
    let address = tile.address();
    (2..=address.len())
        .step_by(2)
        .any(|len| tiles.contains(&address[..len]))
}

fn has_strict_ancestor(tiles: &IndexSet<Tile>, tile: &Tile) -> bool {
    let address = tile.address();
    (2..address.len())
        .step_by(2)
        .any(|len| tiles.contains(&address[..len]))
}

fn drop_subsumed(tiles: &mut IndexSet<Tile>) -> usize {
    let subsumed: HashSet<String> = tiles
        .iter()
        .filter(|t| has_strict_ancestor(tiles, t))
        .map(|t| t.address().to_string())
        .collect();
    if !subsumed.is_empty() {
        tiles.retain(|t| !subsumed.contains(t.address()));
    }
    subsumed.len()
}

fn children_by_parent(tiles: &IndexSet<Tile>, size: Option<TileSize>) -> IndexMap<&str, usize> {
    let mut counts = IndexMap::new();
    for tile in tiles {
        if tile.size() == TileSize::Global || size.is_some_and(|s| s != tile.size()) {
            continue;
        }
        *counts.entry(tile.parent_address()).or_insert(0) += 1;
    }
    counts
}

fn any_full_group(tiles: &IndexSet<Tile>) -> bool {
    children_by_parent(tiles, None)
        .values()
        .any(|&n| n == TileSize::CHILDREN_PER_TILE)
}

fn merge_level(tiles: &mut IndexSet<Tile>, size: TileSize) -> usize {
    let parents: IndexSet<Tile> = {
        let counts = children_by_parent(tiles, Some(size));
        tiles
            .iter()
            .filter(|t| {
                t.size() == size
                    && counts.get(t.parent_address()) == Some(&TileSize::CHILDREN_PER_TILE)
            })
            .filter_map(Tile::parent)
            .collect()
    };
    if parents.is_empty() {
        return 0;
    }
    tiles.retain(|t| !(t.size() == size && parents.contains(t.parent_address())));
    let merged = parents.len();
    tiles.extend(parents);
    merged
}

/// Re-establish the covering-set invariant in place.
pub(crate) fn canonicalize(tiles: &mut IndexSet<Tile>) {
    let dropped = drop_subsumed(tiles);
    if !any_full_group(tiles) {
        return;
    }
    let mut size = TileSize::Pinpoint;
    while let Some(parent_size) = size.coarser() {
        let merged = merge_level(tiles, size);
        if merged > 0 {
            debug!(level = %size, merged, dropped, "merged sibling groups");
        }
        size = parent_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(addresses: &[&str]) -> IndexSet<Tile> {
        addresses
            .iter()
            .map(|a| Tile::from_address(a).unwrap())
            .collect()
    }

    fn addresses(tiles: &IndexSet<Tile>) -> Vec<&str> {
        let mut out: Vec<&str> = tiles.iter().map(Tile::address).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn subsumed_tiles_are_dropped() {
        let mut tiles = set(&["849VQH", "849VQHCX", "849VQHCX2X", "849VRG"]);
        canonicalize(&mut tiles);
        assert_eq!(addresses(&tiles), vec!["849VQH", "849VRG"]);
    }

    #[test]
    fn full_sibling_group_merges() {
        let parent = Tile::from_address("849VQGCJ").unwrap();
        let mut tiles: IndexSet<Tile> = parent.children().into_iter().collect();
        canonicalize(&mut tiles);
        assert_eq!(addresses(&tiles), vec!["849VQGCJ"]);
    }

    #[test]
    fn incomplete_group_is_left_alone() {
        let parent = Tile::from_address("849VQGCJ").unwrap();
        let mut tiles: IndexSet<Tile> = parent.children().into_iter().skip(1).collect();
        canonicalize(&mut tiles);
        assert_eq!(tiles.len(), 399);
    }

    #[test]
    fn merges_cascade_upward() {
        // 399 neighbourhoods plus the 400 pinpoints of the last one.
        let district = Tile::from_address("849VQG").unwrap();
        let mut kids = district.children();
        let last = kids.pop().unwrap();
        let mut tiles: IndexSet<Tile> = kids.into_iter().collect();
        tiles.extend(last.children());
        canonicalize(&mut tiles);
        assert_eq!(addresses(&tiles), vec!["849VQG"]);
    }

    #[test]
    fn covers_checks_ancestors() {
        let tiles = set(&["849V", "8FVC9G"]);
        assert!(covers(&tiles, &Tile::from_address("849VQH").unwrap()));
        assert!(covers(&tiles, &Tile::from_address("849V").unwrap()));
        assert!(!covers(&tiles, &Tile::from_address("84").unwrap()));
        assert!(!covers(&tiles, &Tile::from_address("8FVC").unwrap()));
    }
}
