//! Mercator projection from geographic to planar coordinates.
//!
//! Meridians map to evenly spaced vertical lines; latitude is stretched
//! logarithmically toward the poles. The y axis grows southward so that
//! rendering the output top-to-bottom puts north up.

use crate::geometry::{GeoPoint, PlanarPoint};
use std::f64::consts::PI;

/// Mercator-style projection onto a map of fixed planar dimensions.
///
/// Pure value type: projecting the same point twice yields bit-identical
/// output. No clamping is applied, so latitudes close to the poles produce
/// large-magnitude y values (the projection's known polar distortion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorProjection {
    map_width: f64,
    map_height: f64,
}

impl Default for MercatorProjection {
    fn default() -> Self {
        Self::new(110.0, 100.0)
    }
}

impl MercatorProjection {
    /// Create a projection for a map of the given planar dimensions.
    #[must_use]
    pub const fn new(map_width: f64, map_height: f64) -> Self {
        Self {
            map_width,
            map_height,
        }
    }

    /// Map width in planar units.
    #[must_use]
    pub const fn map_width(&self) -> f64 {
        self.map_width
    }

    /// Map height in planar units.
    #[must_use]
    pub const fn map_height(&self) -> f64 {
        self.map_height
    }

    /// Project a single geographic point.
    ///
    /// Callers are expected to have validated the point with
    /// [`GeoPoint::is_valid`]; latitudes of exactly ±90° would diverge.
    #[must_use]
    pub fn project(&self, point: GeoPoint) -> PlanarPoint {
        let x = (point.longitude + 180.0) * (self.map_width / 360.0);

        let lat_rad = point.latitude.to_radians();
        let merc_n = (PI / 4.0 + lat_rad / 2.0).tan().ln();
        let y = self.map_height / 2.0 - (self.map_width * merc_n) / (2.0 * PI);

        PlanarPoint::new(x, y)
    }

    /// Project a slice of points, preserving order.
    #[must_use]
    pub fn project_all(&self, points: &[GeoPoint]) -> Vec<PlanarPoint> {
        points.iter().map(|&p| self.project(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_is_deterministic() {
        let proj = MercatorProjection::default();
        let p = GeoPoint::new(51.5, -0.1);

        let a = proj.project(p);
        let b = proj.project(p);

        // Bit-for-bit reproducible.
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn test_equator_center() {
        let proj = MercatorProjection::new(110.0, 100.0);
        let p = proj.project(GeoPoint::new(0.0, 0.0));

        // (0, 0) lands at the horizontal center, at map_height / 2.
        assert_relative_eq!(p.x, 55.0);
        assert_relative_eq!(p.y, 50.0);
    }

    #[test]
    fn test_longitude_edges() {
        let proj = MercatorProjection::new(110.0, 100.0);

        let west = proj.project(GeoPoint::new(0.0, -180.0));
        let east = proj.project(GeoPoint::new(0.0, 180.0));

        assert_relative_eq!(west.x, 0.0);
        assert_relative_eq!(east.x, 110.0);
    }

    #[test]
    fn test_known_value_london() {
        let proj = MercatorProjection::new(110.0, 100.0);
        let p = proj.project(GeoPoint::new(51.5, -0.1));

        // x = (-0.1 + 180) * (110 / 360)
        assert_relative_eq!(p.x, 179.9 * (110.0 / 360.0));

        // y = 50 - 110 * ln(tan(pi/4 + lat_rad/2)) / (2 pi)
        let merc_n = (std::f64::consts::PI / 4.0 + 51.5_f64.to_radians() / 2.0)
            .tan()
            .ln();
        let expected_y = 50.0 - 110.0 * merc_n / (2.0 * std::f64::consts::PI);
        assert_relative_eq!(p.y, expected_y);
        // North of the equator projects above the vertical midpoint.
        assert!(p.y < 50.0);
    }

    #[test]
    fn test_output_finite_in_valid_range() {
        let proj = MercatorProjection::new(110.0, 100.0);

        for &lat in &[-89.9, -45.0, 0.0, 33.3, 89.9] {
            for &lon in &[-180.0, -1.0, 0.0, 90.0, 180.0] {
                let p = proj.project(GeoPoint::new(lat, lon));
                assert!(p.x.is_finite() && p.y.is_finite());
                // One ulp of headroom: lon = 180 lands at 110 + ~1e-14.
                assert!(p.x >= 0.0 && p.x <= 110.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_pole_projects_far_outside_map() {
        // Exactly ±90° is rejected by GeoPoint::is_valid. Projected anyway,
        // the ordinate lands far outside the map: tan(π/2) rounds to a huge
        // finite value at the north pole, and ln(0) gives -inf at the south.
        let proj = MercatorProjection::default();
        let north = proj.project(GeoPoint::new(90.0, 0.0));
        let south = proj.project(GeoPoint::new(-90.0, 0.0));
        assert!(north.y < -100.0);
        assert!(south.y > 200.0);
    }

    #[test]
    fn test_project_all_preserves_order() {
        let proj = MercatorProjection::default();
        let pts = [GeoPoint::new(10.0, 10.0), GeoPoint::new(-10.0, -10.0)];
        let out = proj.project_all(&pts);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], proj.project(pts[0]));
        assert_eq!(out[1], proj.project(pts[1]));
    }
}
