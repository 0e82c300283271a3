//! Great-circle distance primitive
//!
//! Stop coordinates are stored as `geo::Point<f64>` with latitude in `y`
//! and longitude in `x`, following the lon/lat axis order of the `geo` crate.

use geo::Point;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Straight-line distance in meters between two coordinates on the sphere,
/// computed with the closed-form spherical law of cosines.
#[must_use]
pub fn great_circle_distance(from: Point<f64>, to: Point<f64>) -> f64 {
    if from == to {
        return 0.0;
    }
    let dr = std::f64::consts::PI / 180.0;
    let (from_lat, to_lat) = (from.y() * dr, to.y() * dr);
    let delta_lng = (from.x() - to.x()).abs() * dr;

    (from_lat.sin() * to_lat.sin() + from_lat.cos() * to_lat.cos() * delta_lng.cos()).acos()
        * EARTH_RADIUS_M
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_have_zero_distance() {
        let p = Point::new(37.20829, 55.611087);
        assert_eq!(great_circle_distance(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Point::new(37.0, 55.0);
        let b = Point::new(37.0, 56.0);
        let d = great_circle_distance(a, b);
        assert!((d - 111_194.9).abs() < 10.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(37.20829, 55.611087);
        let b = Point::new(37.333324, 55.595884);
        let ab = great_circle_distance(a, b);
        let ba = great_circle_distance(b, a);
        assert!((ab - ba).abs() < 1e-9);
    }
}
