use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::GeoPoint;

#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("At least 3 points are required to form a region")]
    TooFewPoints,
    #[error("waypoints are collinear and do not enclose an area")]
    DegenerateRegion,
}

/// Enclosed survey region as a closed ring of boundary vertices.
///
/// The ring repeats the first vertex at the end, matching the shape the
/// planner endpoint returns, so consumers label one edge per consecutive
/// pair. A region is replaced wholesale on every plan, never edited in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnclosedRegion {
    ring: Vec<GeoPoint>,
}

impl EnclosedRegion {
    /// Build a region from a boundary ring, closing it if the source left
    /// the first/last coincidence implicit.
    pub fn from_ring(mut ring: Vec<GeoPoint>) -> Result<Self, RegionError> {
        if ring.len() >= 2 && ring.first() == ring.last() {
            ring.pop();
        }

        if ring.len() < 3 {
            return Err(RegionError::TooFewPoints);
        }

        let first = ring[0];
        ring.push(first);

        Ok(Self { ring })
    }

    /// Closed boundary ring (last entry repeats the first)
    pub fn ring(&self) -> &[GeoPoint] {
        &self.ring
    }

    /// Distinct boundary vertices, without the closing repeat
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.ring[..self.ring.len() - 1]
    }
}
