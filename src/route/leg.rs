use crate::domain::GeoPoint;
use crate::geometry::haversine_meters;

/// One labeled edge of a planned path: the great-circle length of a
/// consecutive waypoint pair and the point where the rendering layer
/// anchors the distance label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub midpoint: GeoPoint,
    pub meters: f64,
}

impl Leg {
    /// Label text as rendered on the map, e.g. "111194.93 m"
    pub fn label(&self) -> String {
        format!("{:.2} m", self.meters)
    }
}

/// Label anchor for a leg.
///
/// Deliberately the arithmetic mean of the raw degree values rather than
/// the geodesic midpoint: label positions must land exactly where the
/// rendering layer has always placed them.
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    GeoPoint::new((a.lat + b.lat) / 2.0, (a.lon + b.lon) / 2.0)
}

/// Walk consecutive waypoint pairs in path order, yielding one [`Leg`] per
/// pair.
///
/// Lazy and restartable: a pure view over the input slice with no retained
/// state. Zero or one input points yield an empty sequence.
pub fn legs(points: &[GeoPoint]) -> impl Iterator<Item = Leg> + '_ {
    points.windows(2).map(|pair| Leg {
        midpoint: midpoint(pair[0], pair[1]),
        meters: haversine_meters(pair[0], pair[1]),
    })
}

/// Total path length over consecutive pairs, in meters
pub fn total_meters(points: &[GeoPoint]) -> f64 {
    legs(points).map(|leg| leg.meters).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_point_path_yields_two_legs() {
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ];

        let result: Vec<Leg> = legs(&points).collect();
        assert_eq!(result.len(), 2);

        assert_eq!(result[0].midpoint, GeoPoint::new(0.0, 0.5));
        assert!((result[0].meters - 111_194.93).abs() < 0.01);

        // Meridian leg of one degree, same length by the formula
        assert_eq!(result[1].midpoint, GeoPoint::new(0.5, 1.0));
        assert!((result[1].meters - 111_194.93).abs() < 0.01);
    }

    #[test]
    fn test_short_paths_yield_nothing() {
        assert_eq!(legs(&[]).count(), 0);
        assert_eq!(legs(&[GeoPoint::new(16.4913, 80.4963)]).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];

        let first: Vec<Leg> = legs(&points).collect();
        let second: Vec<Leg> = legs(&points).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_label_format() {
        let leg = Leg {
            midpoint: GeoPoint::new(0.0, 0.5),
            meters: 111_194.92664455873,
        };
        assert_eq!(leg.label(), "111194.93 m");

        let zero = Leg {
            midpoint: GeoPoint::new(0.0, 0.0),
            meters: 0.0,
        };
        assert_eq!(zero.label(), "0.00 m");
    }

    #[test]
    fn test_total_meters() {
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ];

        let total = total_meters(&points);
        let sum: f64 = legs(&points).map(|leg| leg.meters).sum();
        assert_eq!(total, sum);
        assert!(total > 222_000.0);
    }
}
