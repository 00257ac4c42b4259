use serde::{Deserialize, Serialize};

/// A latitude/longitude coordinate pair in degrees (WGS84).
///
/// On the wire this is a 2-element JSON array `[lat, lon]`, matching the
/// waypoint submission and region response formats. Latitude is expected in
/// [-90, 90] and longitude in [-180, 180] by convention; the range is not
/// enforced, and out-of-range values flow through the distance math
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lon)
    }
}
