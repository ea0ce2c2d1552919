//! Border subtiles and the digit-pattern cache behind them.
//!
//! A border pattern is the address suffix appended to a tile to reach one
//! of its border subtiles. Patterns depend only on the direction and the
//! number of levels descended, never on the tile, so they are memoised in
//! a [`BorderPatterns`] cache and built depth by depth from the cached
//! shallower set.

use crate::direction::Direction;
use crate::error::TileError;
use crate::size::TileSize;
use crate::tile::Tile;
use geotile_olc::alphabet::SYMBOLS;
use indexmap::{IndexMap, IndexSet};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::debug;

const LOW_EDGE: &[u8] = b"2";
const HIGH_EDGE: &[u8] = b"X";
const ANY_DIGIT: &[u8] = &SYMBOLS;

static SHARED: LazyLock<Mutex<BorderPatterns>> =
    LazyLock::new(|| Mutex::new(BorderPatterns::new()));

/// Memoised border digit patterns keyed by `(direction, depth)`.
///
/// Only single directions are stored. The all-edges ring is assembled on
/// demand from the four cached cardinal bands. Entries are never
/// invalidated.
#[derive(Debug, Default)]
pub struct BorderPatterns {
    cache: IndexMap<(Direction, usize), IndexSet<String>>,
}

impl BorderPatterns {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the process-wide cache.
    ///
    /// Do not call [`Tile::border_subtiles`] while holding the guard; it
    /// takes the same lock. Pass the guard to
    /// [`Tile::border_subtiles_with`] instead.
    pub fn shared() -> MutexGuard<'static, BorderPatterns> {
        // Entries are only inserted whole, so a poisoned cache is still sound.
        SHARED.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of cached `(direction, depth)` entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Suffixes selecting the border subtiles facing `direction`,
    /// `depth` levels down.
    pub fn patterns(&mut self, direction: Direction, depth: usize) -> &IndexSet<String> {
        let key = (direction, depth);
        if !self.cache.contains_key(&key) {
            let built = self.build(direction, depth);
            debug!(
                direction = direction.label(),
                depth,
                patterns = built.len(),
                "built border patterns"
            );
            self.cache.insert(key, built);
        }
        &self.cache[&key]
    }

    /// Suffixes on any edge, `depth` levels down: the union of the four
    /// cardinal bands, borrowed from the cache.
    pub fn ring(&mut self, depth: usize) -> IndexSet<&str> {
        for cardinal in Direction::CARDINALS {
            self.patterns(cardinal, depth);
        }
        let cache = &self.cache;
        Direction::CARDINALS
            .iter()
            .flat_map(move |&cardinal| cache[&(cardinal, depth)].iter().map(String::as_str))
            .collect()
    }

    fn build(&mut self, direction: Direction, depth: usize) -> IndexSet<String> {
        if depth == 0 {
            return IndexSet::from([String::new()]);
        }
        let (lat_digits, lon_digits) = edge_digits(direction);
        self.patterns(direction, depth - 1);
        let shallower = &self.cache[&(direction, depth - 1)];
        let capacity = shallower.len() * lat_digits.len() * lon_digits.len();
        let mut out = IndexSet::with_capacity(capacity);
        for prefix in shallower {
            for &lat in lat_digits {
                for &lon in lon_digits {
                    let mut pattern = String::with_capacity(prefix.len() + 2);
                    pattern.push_str(prefix);
                    pattern.push(lat as char);
                    pattern.push(lon as char);
                    out.insert(pattern);
                }
            }
        }
        out
    }
}

/// Latitude and longitude digits allowed on the edge facing `dir`.
fn edge_digits(dir: Direction) -> (&'static [u8], &'static [u8]) {
    let (lat, lon) = dir.unit();
    let pick = |step: i8| match step {
        1 => HIGH_EDGE,
        -1 => LOW_EDGE,
        _ => ANY_DIGIT,
    };
    (pick(lat), pick(lon))
}

impl Tile {
    /// Subtiles of `size` touching the edge facing `direction`, or any
    /// edge when `direction` is `None`.
    ///
    /// A cardinal direction yields a band of `20^levels` tiles, an ordinal
    /// one the single corner tile. Uses the process-wide
    /// [`BorderPatterns`] cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use geotile_tile::{Direction, Tile, TileSize};
    ///
    /// let tile = Tile::from_address("849VVPCX").unwrap();
    /// let ring = tile.border_subtiles(TileSize::Pinpoint, None).unwrap();
    /// assert_eq!(ring.len(), 76);
    ///
    /// let corner = tile.border_subtiles(TileSize::Pinpoint, Some(Direction::NorthEast)).unwrap();
    /// assert_eq!(corner[0].address(), "849VVPCXXX");
    /// ```
    pub fn border_subtiles(
        &self,
        size: TileSize,
        direction: Option<Direction>,
    ) -> Result<Vec<Tile>, TileError> {
        let mut patterns = BorderPatterns::shared();
        self.border_subtiles_with(&mut patterns, size, direction)
    }

    /// As [`border_subtiles`](Self::border_subtiles), with a caller-owned cache.
    pub fn border_subtiles_with(
        &self,
        patterns: &mut BorderPatterns,
        size: TileSize,
        direction: Option<Direction>,
    ) -> Result<Vec<Tile>, TileError> {
        let depth = self.depth_to(size)?;
        let subtile =
            |suffix: &str| Tile::new_unchecked(format!("{}{suffix}", self.address()), size);
        Ok(match direction {
            Some(dir) => patterns.patterns(dir, depth).iter().map(|s| subtile(s)).collect(),
            None => patterns.ring(depth).into_iter().map(subtile).collect(),
        })
    }
}
