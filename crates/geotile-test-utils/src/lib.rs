//! Shared fixtures for geotile tests and benchmarks.
//!
//! Place fixtures come from San Francisco and Berkeley, where the
//! expected covering sets and expansion rings were enumerated by hand.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use geotile_region::{NaiveRegion, Region};
use geotile_tile::Tile;

/// Parse Plus Codes or bare addresses, panicking on bad input.
pub fn tiles(codes: &[&str]) -> Vec<Tile> {
    codes
        .iter()
        .map(|c| {
            c.parse()
                .unwrap_or_else(|e| panic!("fixture '{c}' failed to parse: {e}"))
        })
        .collect()
}

/// A region built from fixture codes.
pub fn region(codes: &[&str]) -> Region {
    Region::from_tiles(tiles(codes)).expect("fixture region must be non-empty")
}

/// Sorted member addresses, for order-insensitive comparison.
pub fn addresses(region: &Region) -> Vec<String> {
    let mut out: Vec<String> = region.iter().map(|t| t.address().to_string()).collect();
    out.sort();
    out
}

/// Assert that the compressed region and the naive oracle cover the same area.
pub fn assert_equivalent(region: &Region, naive: &NaiveRegion) {
    for tile in naive.members() {
        assert!(region.contains(tile), "{tile} missing from compressed region");
    }
    for member in region.members() {
        assert!(naive.covers(member), "{member} not covered by the naive oracle");
    }
}

/// Assert the covering-set invariant: no member is inside another.
pub fn assert_minimal(region: &Region) {
    let members: Vec<&Tile> = region.iter().collect();
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            assert!(
                !a.contains(b) && !b.contains(a),
                "{a} and {b} overlap in a covering set"
            );
        }
    }
}
