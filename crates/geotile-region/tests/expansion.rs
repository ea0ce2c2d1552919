//! Edge detection and ring expansion on hand-enumerated neighbourhoods.

use geotile_region::{ExpandConfig, Region};
use geotile_test_utils::fixtures::{
    gw_high_school_border, gw_high_school_interior, BERKELEY, BERKELEY_RING_1, BERKELEY_RING_2,
    DIGITS,
};
use geotile_test_utils::{addresses, assert_minimal, region};
use geotile_tile::{Tile, TileSize};

fn gw_high_school() -> Region {
    let mut region = Region::new(Tile::from_address("849VQGH5").unwrap());
    for row in ['W', 'X'] {
        for col in "789CFGHJMPQRVW".chars() {
            let address = format!("849VQGG5{row}{col}");
            region.add_tile(Tile::from_address(&address).unwrap());
        }
    }
    region
}

/// Addresses under `prefix` spelled by `pattern`, where `_` stands for
/// any digit.
fn band(prefix: &str, pattern: &str) -> Vec<String> {
    let mut out = vec![prefix.to_string()];
    for slot in pattern.chars() {
        out = if slot == '_' {
            out.iter()
                .flat_map(|head| DIGITS.chars().map(move |d| format!("{head}{d}")))
                .collect()
        } else {
            out.into_iter().map(|head| format!("{head}{slot}")).collect()
        };
    }
    out
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v.dedup();
    v
}

// ── Edges ───────────────────────────────────────────────────────

#[test]
fn gw_high_school_edges() {
    let gw = gw_high_school();
    assert_eq!(gw.len(), 29);

    let edges: Vec<String> = gw
        .edge_tiles()
        .unwrap()
        .iter()
        .map(|t| t.address().to_string())
        .collect();
    assert_eq!(sorted(edges.clone()), sorted(gw_high_school_border()));

    for inner in gw_high_school_interior() {
        assert!(!edges.contains(&inner), "{inner} reported as an edge");
    }
}

#[test]
fn every_member_of_a_thin_strip_is_an_edge() {
    let strip = region(&BERKELEY);
    let edges = strip.edge_tiles().unwrap();
    assert_eq!(edges.len(), BERKELEY.len());
}

// ── Expansion at the region's own size ──────────────────────────

#[test]
fn berkeley_one_district_ring() {
    let mut berkeley = region(&BERKELEY);
    berkeley.expand(TileSize::District, 1).unwrap();

    let want: Vec<&str> = BERKELEY.iter().chain(&BERKELEY_RING_1).copied().collect();
    assert_eq!(addresses(&berkeley), addresses(&region(&want)));
}

#[test]
fn berkeley_two_district_rings() {
    let mut berkeley = region(&BERKELEY);
    berkeley.expand(TileSize::District, 2).unwrap();

    let want: Vec<&str> = BERKELEY
        .iter()
        .chain(&BERKELEY_RING_1)
        .chain(&BERKELEY_RING_2)
        .copied()
        .collect();
    assert_eq!(berkeley.len(), 35);
    assert_eq!(addresses(&berkeley), addresses(&region(&want)));
}

#[test]
fn two_single_rings_equal_one_double_ring() {
    let mut stepwise = region(&BERKELEY);
    stepwise.expand(TileSize::District, 1).unwrap();
    stepwise.expand(TileSize::District, 1).unwrap();

    let mut at_once = region(&BERKELEY);
    at_once.expand(TileSize::District, 2).unwrap();
    assert_eq!(addresses(&stepwise), addresses(&at_once));
}

// ── Expansion with finer tiles ──────────────────────────────────

#[test]
fn berkeley_one_pinpoint_ring() {
    let mut berkeley = region(&BERKELEY);
    berkeley.expand_with(&ExpandConfig::default()).unwrap();
    assert_minimal(&berkeley);

    let mut want: Vec<String> = BERKELEY
        .iter()
        .map(|c| c.trim_end_matches("00+").to_string())
        .collect();
    want.push("849VXM2X2X".into());
    want.extend(band("849VXP", "2_2_"));
    want.push("849VXQ2222".into());
    want.extend(band("849VWQ", "_2_2"));
    want.extend(band("849VVQ", "_2_2"));
    want.push("849VRQX2X2".into());
    want.extend(band("849VRP", "X_X_"));
    want.extend(band("849VRM", "X_X_"));
    want.push("849VRJXXXX".into());
    want.extend(band("849VVJ", "_X_X"));
    want.push("849VWJ2X2X".into());
    want.extend(band("849VWM", "2_2_"));
    want.extend(band("849VWM", "_X_X"));

    let expected = Region::from_tiles(
        sorted(want)
            .iter()
            .map(|a| Tile::from_address(a).unwrap()),
    )
    .unwrap();
    assert_eq!(addresses(&berkeley), addresses(&expected));
}

#[test]
fn pinpoint_ring_only_touches_facing_borders() {
    let mut berkeley = region(&BERKELEY);
    berkeley.expand(TileSize::Pinpoint, 1).unwrap();

    // Middle of the district north of the block.
    assert!(!berkeley.contains(&Tile::from_address("849VXPCCCC").unwrap()));
    // Far (north) edge of the same district.
    assert!(!berkeley.contains(&Tile::from_address("849VXPX2X2").unwrap()));
    // Near (south) edge.
    assert!(berkeley.contains(&Tile::from_address("849VXP2C2C").unwrap()));
}

#[test]
fn finer_region_grows_by_coarser_tiles() {
    let mut gw = gw_high_school();
    gw.expand(TileSize::Neighborhood, 1).unwrap();
    assert_minimal(&gw);

    for address in ["849VQGJ4", "849VQGJ5", "849VQGJ6", "849VQGH4", "849VQGH6"] {
        assert!(
            gw.contains(&Tile::from_address(address).unwrap()),
            "{address} missing"
        );
    }
    assert!(gw.contains(&Tile::from_address("849VQGG5").unwrap()));
    assert_eq!(gw.smallest_tile_size(), TileSize::Neighborhood);
}
