use geo::{Area, ConvexHull, MultiPoint, Point};

use crate::domain::{EnclosedRegion, GeoPoint, RegionError};

/// Compute the enclosed survey region for a waypoint set.
///
/// The region is the convex hull of the input, returned as a closed ring so
/// every boundary edge can be labeled. Interior waypoints are dropped;
/// fewer than three points, or a collinear set, cannot enclose an area.
pub fn enclosed_region(points: &[GeoPoint]) -> Result<EnclosedRegion, RegionError> {
    if points.len() < 3 {
        return Err(RegionError::TooFewPoints);
    }

    // geo convention is x = lon, y = lat
    let multi = MultiPoint::new(points.iter().map(|p| Point::new(p.lon, p.lat)).collect());
    let hull = multi.convex_hull();

    if hull.unsigned_area() == 0.0 {
        return Err(RegionError::DegenerateRegion);
    }

    let ring: Vec<GeoPoint> = hull
        .exterior()
        .0
        .iter()
        .map(|c| GeoPoint::new(c.y, c.x))
        .collect();

    EnclosedRegion::from_ring(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_hull_drops_interior_point() {
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(0.5, 0.5),
        ];

        let region = enclosed_region(&points).unwrap();

        assert_eq!(region.vertices().len(), 4);
        assert_eq!(region.ring().first(), region.ring().last());
        for corner in &points[..4] {
            assert!(region.vertices().contains(corner));
        }
        assert!(!region.vertices().contains(&GeoPoint::new(0.5, 0.5)));
    }

    #[test]
    fn test_triangle_keeps_all_vertices() {
        let points = vec![
            GeoPoint::new(16.4913, 80.4963),
            GeoPoint::new(16.4931, 80.4987),
            GeoPoint::new(16.4897, 80.4995),
        ];

        let region = enclosed_region(&points).unwrap();
        assert_eq!(region.vertices().len(), 3);
        for point in &points {
            assert!(region.vertices().contains(point));
        }
    }

    #[test]
    fn test_too_few_points() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];
        assert_eq!(enclosed_region(&points), Err(RegionError::TooFewPoints));
    }

    #[test]
    fn test_collinear_points_are_degenerate() {
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 2.0),
        ];
        assert_eq!(enclosed_region(&points), Err(RegionError::DegenerateRegion));
    }
}
