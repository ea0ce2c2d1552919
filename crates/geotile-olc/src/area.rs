//! The rectangle a decoded code covers.

/// Maximum absolute latitude in degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Maximum absolute longitude in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Bounding box of a decoded code, in degrees.
///
/// `south`/`west` are inclusive, `north`/`east` exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CodeArea {
    /// Southern latitude bound.
    pub south: f64,
    /// Western longitude bound.
    pub west: f64,
    /// Northern latitude bound.
    pub north: f64,
    /// Eastern longitude bound.
    pub east: f64,
    /// Number of significant digits in the decoded code.
    pub code_length: usize,
}

impl CodeArea {
    /// Latitude of the centre, never above the pole.
    pub fn center_latitude(&self) -> f64 {
        (self.south + (self.north - self.south) / 2.0).min(LATITUDE_MAX)
    }

    /// Longitude of the centre, never past the antimeridian.
    pub fn center_longitude(&self) -> f64 {
        (self.west + (self.east - self.west) / 2.0).min(LONGITUDE_MAX)
    }

    /// `(latitude, longitude)` of the centre.
    pub fn center(&self) -> (f64, f64) {
        (self.center_latitude(), self.center_longitude())
    }

    /// Whether a point falls inside the area.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.south..self.north).contains(&latitude) && (self.west..self.east).contains(&longitude)
    }
}
