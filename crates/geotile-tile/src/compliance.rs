//! Tile geometry compliance test helpers.
//!
//! These functions check the invariants every tile must satisfy,
//! whatever its size or position. Reused by the unit tests and the
//! property tests in this crate.

use crate::size::TileSize;
use crate::tile::Tile;

/// Assert that the full code parses back to the same address.
pub fn assert_address_round_trip(tile: &Tile) {
    let again = Tile::from_code(&tile.full_code())
        .unwrap_or_else(|e| panic!("{} did not reparse: {e}", tile.full_code()));
    assert_eq!(again.address(), tile.address());
    assert_eq!(again.size(), tile.size());
}

/// Assert `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(tile: &Tile) {
    for nb in tile.neighbours().unwrap() {
        let back = nb.neighbours().unwrap();
        assert!(
            back.contains(tile),
            "neighbour symmetry violated: {nb} in N({tile}) but {tile} not in N({nb})"
        );
    }
}

/// Assert neighbours are distinct, same-sized and never the tile itself.
pub fn assert_neighbours_well_formed(tile: &Tile) {
    let ns = tile.neighbours().unwrap();
    assert!(ns.len() <= 8);
    for (i, nb) in ns.iter().enumerate() {
        assert_eq!(nb.size(), tile.size());
        assert_ne!(nb, tile, "{tile} lists itself as a neighbour");
        assert!(!ns[..i].contains(nb), "{nb} listed twice for {tile}");
        assert!(tile.is_neighbour(nb).unwrap());
    }
}

/// Assert that tiles away from the poles have all eight neighbours.
pub fn assert_full_neighbourhood_off_pole(tile: &Tile) {
    let area = tile.area().unwrap();
    let edge = tile.size().edge_degrees();
    if area.north + edge < 90.0 && area.south - edge > -90.0 {
        assert_eq!(tile.neighbours().unwrap().len(), 8, "{tile}");
    }
}

/// Assert distances are symmetric and zero only for the same tile.
pub fn assert_distance_symmetric(a: &Tile, b: &Tile) {
    assert_eq!(a.manhattan_distance(b).unwrap(), b.manhattan_distance(a).unwrap());
    assert_eq!(a.chebyshev_distance(b).unwrap(), b.chebyshev_distance(a).unwrap());
    assert!(a.chebyshev_distance(b).unwrap() <= a.manhattan_distance(b).unwrap());
    assert_eq!(a.manhattan_distance(b).unwrap() == 0, a == b);
}

/// Assert containment is reflexive and flows down through the ancestors.
pub fn assert_containment_chain(tile: &Tile) {
    assert!(tile.contains(tile));
    let mut prev = tile.clone();
    for size in TileSize::ALL.iter().rev().filter(|&&s| s <= tile.size()) {
        let ancestor = tile.ancestor(*size).unwrap();
        assert!(ancestor.contains(&prev));
        assert!(ancestor.contains(tile));
        prev = ancestor;
    }
}

/// Run every single-tile check.
pub fn run_full_compliance(tile: &Tile) {
    assert_address_round_trip(tile);
    assert_neighbours_symmetric(tile);
    assert_neighbours_well_formed(tile);
    assert_full_neighbourhood_off_pole(tile);
    assert_containment_chain(tile);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_tiles_comply() {
        for address in ["CF", "22", "8V", "84VV", "8CRW2X", "849VVPCX", "849VVPCX2X", "C2XXXX"] {
            run_full_compliance(&Tile::from_address(address).unwrap());
        }
    }

    fn arb_tile() -> impl Strategy<Value = Tile> {
        (
            -89.99f64..89.99,
            -180.0f64..180.0,
            prop::sample::select(TileSize::ALL.to_vec()),
        )
            .prop_map(|(lat, lon, size)| Tile::from_coordinate(lat, lon, size).unwrap())
    }

    proptest! {
        #[test]
        fn random_tiles_comply(tile in arb_tile()) {
            run_full_compliance(&tile);
        }

        #[test]
        fn random_pairs_have_symmetric_distance(
            a in (-89.0f64..89.0, -180.0f64..180.0),
            b in (-89.0f64..89.0, -180.0f64..180.0),
            size in prop::sample::select(TileSize::ALL.to_vec()),
        ) {
            let a = Tile::from_coordinate(a.0, a.1, size).unwrap();
            let b = Tile::from_coordinate(b.0, b.1, size).unwrap();
            assert_distance_symmetric(&a, &b);
        }
    }
}
