use super::GeoPoint;

/// Ordered waypoint collection for a single planning session.
///
/// Insertion order is significant: it is the path order used for leg
/// labeling and the submission order sent to the planner. Removal matches on
/// exact coordinate equality, the same way a map marker toggles off the
/// coordinate it was placed at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waypoints {
    points: Vec<GeoPoint>,
}

impl Waypoints {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Parse a waypoint list from the wire format: a JSON array of
    /// 2-element `[lat, lon]` arrays.
    pub fn from_wire_json(json: &str) -> serde_json::Result<Self> {
        let points: Vec<GeoPoint> = serde_json::from_str(json)?;
        Ok(Self { points })
    }

    /// Append a waypoint at the end of the path
    #[allow(dead_code)]
    pub fn add(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Remove the first waypoint exactly equal to `point`.
    ///
    /// Returns false if no waypoint matched.
    #[allow(dead_code)]
    pub fn remove(&mut self, point: GeoPoint) -> bool {
        match self.points.iter().position(|&p| p == point) {
            Some(index) => {
                self.points.remove(index);
                true
            }
            None => false,
        }
    }

    /// Reset the session to an empty path
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }
}
