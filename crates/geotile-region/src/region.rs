//! The compressing [`Region`].

use crate::area::TileArea;
use crate::cover::{canonicalize, covers};
use geotile_tile::{Tile, TileError, TileSize};
use indexmap::IndexSet;

/// A set of tiles kept as a minimal covering set.
///
/// After every public operation:
///
/// - no member's address is a prefix of another member's address;
/// - no complete group of 400 same-parent siblings remains, it has been
///   replaced by the parent tile;
/// - the region holds at least one tile.
///
/// # Examples
///
/// ```
/// use geotile_region::Region;
/// use geotile_tile::Tile;
///
/// let stadium = Tile::from_code("849VVPCX+").unwrap();
/// let mut region = Region::from_tiles(stadium.children()).unwrap();
/// assert_eq!(region.len(), 1);
/// assert!(region.contains(&stadium));
///
/// region.add_tile(Tile::from_address("84").unwrap());
/// assert_eq!(region.members().iter().next().unwrap().address(), "84");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub(crate) members: IndexSet<Tile>,
}

impl Region {
    /// A region of one tile.
    pub fn new(tile: Tile) -> Self {
        Self {
            members: IndexSet::from([tile]),
        }
    }

    /// A region covering every tile given.
    ///
    /// Fails with [`TileError::Configuration`] when `tiles` is empty.
    pub fn from_tiles<I>(tiles: I) -> Result<Self, TileError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut members: IndexSet<Tile> = tiles.into_iter().collect();
        if members.is_empty() {
            return Err(TileError::Configuration {
                reason: "a region needs at least one tile".into(),
            });
        }
        canonicalize(&mut members);
        Ok(Self { members })
    }

    /// Whether some member contains `tile`.
    pub fn contains(&self, tile: &Tile) -> bool {
        covers(&self.members, tile)
    }

    /// Add one tile; a no-op when it is already covered.
    pub fn add_tile(&mut self, tile: Tile) {
        if self.contains(&tile) {
            return;
        }
        self.members.insert(tile);
        canonicalize(&mut self.members);
    }

    /// Union with another region, canonicalising once.
    pub fn add_region(&mut self, other: &Region) {
        self.extend_canonical(other.members.iter().cloned());
    }

    pub(crate) fn extend_canonical<I>(&mut self, tiles: I)
    where
        I: IntoIterator<Item = Tile>,
    {
        self.members.extend(tiles);
        canonicalize(&mut self.members);
    }

    /// The finest size among the members.
    pub fn smallest_tile_size(&self) -> TileSize {
        self.members
            .iter()
            .map(Tile::size)
            .max()
            .unwrap_or(TileSize::Global)
    }

    /// Whether a point falls inside the region.
    pub fn contains_coordinate(&self, latitude: f64, longitude: f64) -> Result<bool, TileError> {
        TileArea::contains_coordinate(self, latitude, longitude)
    }

    /// Whether the tile named by a Plus Code or bare address is inside.
    pub fn contains_code(&self, code: &str) -> Result<bool, TileError> {
        TileArea::contains_code(self, code)
    }

    /// The covering set.
    pub fn members(&self) -> &IndexSet<Tile> {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a constructed region; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the members.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Tile> {
        self.members.iter()
    }

    /// Take the covering set.
    pub fn into_tiles(self) -> IndexSet<Tile> {
        self.members
    }
}

impl From<Tile> for Region {
    fn from(tile: Tile) -> Self {
        Self::new(tile)
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Tile;
    type IntoIter = indexmap::set::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl TileArea for Region {
    fn contains(&self, tile: &Tile) -> bool {
        Region::contains(self, tile)
    }

    fn add_tile(&mut self, tile: Tile) {
        Region::add_tile(self, tile);
    }

    fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.members.iter()
    }

    fn smallest_tile_size(&self) -> TileSize {
        Region::smallest_tile_size(self)
    }
}
