//! Named tile fixtures.

use geotile_tile::{Tile, TileSize};

/// Eleven district tiles covering most of San Francisco.
#[rustfmt::skip]
pub const SAN_FRANCISCO: [&str; 11] = [
    "849VRG00+", "849VRH00+", "849VRJ00+",
    "849VQF00+", "849VQG00+", "849VQH00+", "849VQJ00+",
    "849VPF00+", "849VPG00+", "849VPH00+", "849VPJ00+",
];

/// Three district tiles around UC Berkeley, an L-shaped block.
pub const BERKELEY: [&str; 3] = ["849VWP00+", "849VVM00+", "849VVP00+"];

/// The twelve districts one ring out from [`BERKELEY`].
#[rustfmt::skip]
pub const BERKELEY_RING_1: [&str; 12] = [
    "849VXM00+", "849VXP00+", "849VXQ00+",
    "849VWJ00+", "849VWM00+", "849VWQ00+",
    "849VVJ00+", "849VVQ00+",
    "849VRJ00+", "849VRM00+", "849VRP00+", "849VRQ00+",
];

/// The districts of the second ring out from [`BERKELEY`].
#[rustfmt::skip]
pub const BERKELEY_RING_2: [&str; 20] = [
    "84CV2J00+", "84CV2M00+", "84CV2P00+", "84CV2Q00+", "84CV2R00+",
    "849VXH00+", "849VXJ00+", "849VXR00+",
    "849VWH00+", "849VWR00+",
    "849VVH00+", "849VVR00+",
    "849VRH00+", "849VRR00+",
    "849VQH00+", "849VQJ00+", "849VQM00+", "849VQP00+", "849VQQ00+", "849VQR00+",
];

/// Neighbourhood around the de Young museum.
pub const DE_YOUNG: &str = "849VQGCJ+";

/// The Berkeley stadium neighbourhood.
pub const BERKELEY_STADIUM: &str = "849VVPCX+";

/// The 20° tile holding the US west coast.
pub const US_WEST_COAST: &str = "84000000+";

/// Digits in alphabet order, for hand-built suffixes.
pub const DIGITS: &str = "23456789CFGHJMPQRVWX";

/// Every `size` tile under `parent`: a complete sibling set when `size`
/// is one level finer.
pub fn full_sibling_group(parent: &str, size: TileSize) -> Vec<Tile> {
    let parent: Tile = parent
        .parse()
        .unwrap_or_else(|e| panic!("fixture '{parent}' failed to parse: {e}"));
    parent
        .subtiles(size)
        .unwrap_or_else(|e| panic!("no {size} subtiles under {parent}: {e}"))
}

/// George Washington High School: tiles on the region's edge.
///
/// One neighbourhood (`849VQGH5`) sitting on top of the top two pinpoint
/// rows of the neighbourhood below it, columns `7` through `W`.
pub fn gw_high_school_border() -> Vec<String> {
    let corners = ["849VQGH5", "849VQGG5X7", "849VQGG5XW", "849VQGG5W7", "849VQGG5WW"];
    let mut out: Vec<String> = corners.iter().map(|s| s.to_string()).collect();
    out.extend(inner_columns().map(|d| format!("849VQGG5W{d}")));
    out
}

/// George Washington High School: tiles fully surrounded by the region.
pub fn gw_high_school_interior() -> Vec<String> {
    inner_columns().map(|d| format!("849VQGG5X{d}")).collect()
}

fn inner_columns() -> impl Iterator<Item = char> {
    "89CFGHJMPQRV".chars()
}
