//! Neighbours, adjacency, containment, distance and direction.
//!
//! Neighbours are found geometrically (offset the centre by one tile
//! edge and re-encode) so that pole clipping and antimeridian wrapping
//! come from the codec. Distances instead treat each axis of the
//! address as a base-20 number, most significant digit first.

use crate::direction::Direction;
use crate::error::TileError;
use crate::size::TileSize;
use crate::tile::Tile;
use geotile_olc::{symbol_index, ENCODING_BASE, LONGITUDE_COLUMNS};
use smallvec::SmallVec;

/// Neighbour list; eight entries is the common case.
pub type Neighbours = SmallVec<[Tile; 8]>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    Latitude = 0,
    Longitude = 1,
}

fn digit_index(symbol: char) -> Result<i64, TileError> {
    symbol_index(symbol)
        .map(|i| i as i64)
        .ok_or(TileError::Alphabet { symbol })
}

/// Direction of travel along one axis when moving from digit `own` to
/// the adjacent digit `other`. `wrap_max` is the highest digit on an axis
/// where `0` and `wrap_max` meet across a boundary.
fn axis_step(own: i64, other: i64, wrap_max: Option<i64>) -> i8 {
    if own == other {
        return 0;
    }
    if let Some(max) = wrap_max {
        if own == 0 && other == max {
            return -1;
        }
        if own == max && other == 0 {
            return 1;
        }
    }
    if other > own {
        1
    } else {
        -1
    }
}

impl Tile {
    /// All distinct neighbours in compass order N, NE, E, SE, S, SW, W, NW.
    ///
    /// Near a pole several directions clip back onto this tile or onto
    /// each other, so fewer than eight tiles come back.
    ///
    /// # Examples
    ///
    /// ```
    /// use geotile_tile::Tile;
    ///
    /// let pole = Tile::from_address("CF").unwrap();
    /// assert_eq!(pole.neighbours().unwrap().len(), 5);
    /// ```
    pub fn neighbours(&self) -> Result<Neighbours, TileError> {
        self.neighbours_toward(&Direction::ALL)
    }

    /// Distinct neighbours in the given directions, in the order given.
    pub fn neighbours_toward(&self, directions: &[Direction]) -> Result<Neighbours, TileError> {
        let (lat, lon) = self.center()?;
        let step = self.size().edge_degrees();
        let mut out = Neighbours::new();
        for dir in directions {
            let (dlat, dlon) = dir.unit();
            let tile = Tile::from_coordinate(
                lat + f64::from(dlat) * step,
                lon + f64::from(dlon) * step,
                self.size(),
            )?;
            if tile != *self && !out.contains(&tile) {
                out.push(tile);
            }
        }
        Ok(out)
    }

    /// The neighbour in one direction, `None` where it clips onto `self`.
    pub fn neighbour(&self, direction: Direction) -> Result<Option<Tile>, TileError> {
        Ok(self.neighbours_toward(&[direction])?.into_iter().next())
    }

    /// Whether `self` and `other` share an edge or corner.
    ///
    /// Tiles of different sizes are adjacent when the larger does not
    /// contain the smaller and some neighbour of the smaller lies inside
    /// the larger.
    pub fn is_neighbour(&self, other: &Tile) -> Result<bool, TileError> {
        if self.size() == other.size() {
            return Ok(self != other && self.neighbours()?.contains(other));
        }
        let (small, large) = if self.size() > other.size() {
            (self, other)
        } else {
            (other, self)
        };
        if large.contains(small) {
            return Ok(false);
        }
        Ok(small.neighbours()?.iter().any(|n| large.contains(n)))
    }

    /// Whether `other` lies within `self` (every tile contains itself).
    pub fn contains(&self, other: &Tile) -> bool {
        other.address().starts_with(self.address())
    }

    fn axis_distance(&self, other: &Tile, axis: Axis) -> Result<i64, TileError> {
        self.ensure_same_size(other)?;
        let half_turn = (LONGITUDE_COLUMNS / 2) as i64;
        let mut total = 0i64;
        let pairs = self.address().chars().zip(other.address().chars());
        for (i, (a, b)) in pairs.enumerate().skip(axis as usize).step_by(2) {
            let mut diff = digit_index(a)? - digit_index(b)?;
            // Only the first longitude digit wraps around the globe.
            if axis == Axis::Longitude && i == 1 {
                if diff > half_turn {
                    diff -= LONGITUDE_COLUMNS as i64;
                } else if diff < -half_turn {
                    diff += LONGITUDE_COLUMNS as i64;
                }
            }
            total = total * ENCODING_BASE as i64 + diff;
        }
        Ok(total)
    }

    /// Signed north-south offset of `self` from `other`, in tiles.
    pub fn latitudinal_distance(&self, other: &Tile) -> Result<i64, TileError> {
        self.axis_distance(other, Axis::Latitude)
    }

    /// Signed east-west offset of `self` from `other`, in tiles, taking
    /// the shorter way around the globe.
    pub fn longitudinal_distance(&self, other: &Tile) -> Result<i64, TileError> {
        self.axis_distance(other, Axis::Longitude)
    }

    /// Sum of the absolute axis distances.
    pub fn manhattan_distance(&self, other: &Tile) -> Result<i64, TileError> {
        Ok(self.latitudinal_distance(other)?.abs() + self.longitudinal_distance(other)?.abs())
    }

    /// Larger of the absolute axis distances.
    pub fn chebyshev_distance(&self, other: &Tile) -> Result<i64, TileError> {
        Ok(self
            .latitudinal_distance(other)?
            .abs()
            .max(self.longitudinal_distance(other)?.abs()))
    }

    /// `atan2` of the signed axis distances, in radians.
    ///
    /// A coarse grid angle, not a geodesic bearing.
    pub fn direction(&self, other: &Tile) -> Result<f64, TileError> {
        let lat = self.latitudinal_distance(other)? as f64;
        let lon = self.longitudinal_distance(other)? as f64;
        Ok(lat.atan2(lon))
    }

    /// Compass direction in which the neighbouring tile `other` lies.
    ///
    /// Only the final address pair is compared. When the two digits on an
    /// axis are that axis' extremes the tiles meet across a parent
    /// boundary (or the antimeridian), and the tile holding the maximum
    /// digit is the southern or western one.
    pub fn eight_point_direction_of_neighbour(&self, other: &Tile) -> Result<Direction, TileError> {
        self.ensure_same_size(other)?;
        if !self.is_neighbour(other)? {
            return Err(TileError::Configuration {
                reason: format!("{other} is not a neighbour of {self}"),
            });
        }
        let (own_lat, own_lon) = last_pair(self)?;
        let (other_lat, other_lon) = last_pair(other)?;

        let max_digit = ENCODING_BASE as i64 - 1;
        let (lat_wrap, lon_wrap) = if self.size() == TileSize::Global {
            (None, Some(LONGITUDE_COLUMNS as i64 - 1))
        } else {
            (Some(max_digit), Some(max_digit))
        };
        let lat = axis_step(own_lat, other_lat, lat_wrap);
        let lon = axis_step(own_lon, other_lon, lon_wrap);
        Direction::from_unit(lat, lon).ok_or_else(|| TileError::Configuration {
            reason: format!("{other} shares its final digits with {self}"),
        })
    }
}

fn last_pair(tile: &Tile) -> Result<(i64, i64), TileError> {
    let address = tile.address();
    let mut tail = address[address.len() - 2..].chars();
    match (tail.next(), tail.next()) {
        (Some(lat), Some(lon)) => Ok((digit_index(lat)?, digit_index(lon)?)),
        _ => Err(TileError::AddressFormat {
            input: address.to_string(),
            reason: "address has no final digit pair".into(),
        }),
    }
}
