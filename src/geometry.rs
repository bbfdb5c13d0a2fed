//! Geographic and planar point types.

/// Valid longitude range in degrees.
pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);

/// Valid latitude bound in degrees (exclusive).
///
/// The bound is strict: at exactly ±90° the Mercator ordinate diverges
/// (`ln(tan(π/2))`), so such points are rejected during validation rather
/// than projected to a non-finite coordinate.
pub const LAT_LIMIT: f64 = 90.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees, valid in (-90, 90).
    pub latitude: f64,
    /// Longitude in degrees, valid in [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite and inside the valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() < LAT_LIMIT
            && self.longitude >= LON_RANGE.0
            && self.longitude <= LON_RANGE.1
    }
}

/// A projected map coordinate in arbitrary planar units.
///
/// Always derived from a [`GeoPoint`] by the projection; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanarPoint {
    /// X coordinate (west to east).
    pub x: f64,
    /// Y coordinate (north to south, Mercator screen orientation).
    pub y: f64,
}

impl PlanarPoint {
    /// Create a new planar point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
