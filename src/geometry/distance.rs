use crate::domain::GeoPoint;

/// Mean Earth radius in meters (sphere approximation, no ellipsoid
/// correction)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points using the haversine formula.
///
/// Input coordinates are degrees, output is meters along the sphere
/// surface. The function is total over finite inputs: it never fails, is
/// symmetric in its arguments, and returns exactly zero for equal points.
/// Out-of-range coordinates produce a mathematically defined (if
/// geographically meaningless) result rather than an error; callers that
/// need domain correctness validate before invoking.
pub fn haversine_meters(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let (lat1, lon1) = (p1.lat.to_radians(), p1.lon.to_radians());
    let (lat2, lon2) = (p2.lat.to_radians(), p2.lon.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let distance = haversine_meters(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((distance - 111_194.93).abs() < 0.01);
    }

    #[test]
    fn test_same_point_is_zero() {
        let point = GeoPoint::new(16.4913, 80.4963);
        assert!(haversine_meters(point, point).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let p1 = GeoPoint::new(16.4913, 80.4963);
        let p2 = GeoPoint::new(37.7749, -122.4194);
        assert!((haversine_meters(p1, p2) - haversine_meters(p2, p1)).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_inequality() {
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(0.0, 1.0);
        let p3 = GeoPoint::new(1.0, 1.0);

        let direct = haversine_meters(p1, p3);
        let via = haversine_meters(p1, p2) + haversine_meters(p2, p3);
        assert!(direct <= via + 1e-6);
    }

    #[test]
    fn test_antimeridian_neighbors_are_close() {
        // 0.2 degrees of longitude across the date line, not a full wrap
        let distance =
            haversine_meters(GeoPoint::new(0.0, 179.9), GeoPoint::new(0.0, -179.9));
        assert!(distance < 23_000.0);
    }
}
