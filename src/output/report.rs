use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::MissionParams;
use crate::domain::{EnclosedRegion, GeoPoint};
use crate::route;

/// One labeled boundary edge in the plan report
#[derive(Debug, Serialize)]
pub struct LegRecord {
    pub midpoint: GeoPoint,
    pub meters: f64,
    pub label: String,
}

/// Machine-readable mission plan handed to the rendering layer.
///
/// `enclosed_region` is the closed boundary ring in `[lat, lon]` wire
/// order; `legs` carries one record per boundary edge with the distance
/// label pre-formatted to two decimals.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub enclosed_region: EnclosedRegion,
    pub legs: Vec<LegRecord>,
    pub mission: MissionParams,
}

impl PlanReport {
    pub fn new(region: EnclosedRegion, mission: MissionParams) -> Self {
        let legs = route::legs(region.ring())
            .map(|leg| LegRecord {
                midpoint: leg.midpoint,
                meters: leg.meters,
                label: leg.label(),
            })
            .collect();

        Self {
            enclosed_region: region,
            legs,
            mission,
        }
    }
}

/// Write a plan report as pretty-printed JSON
pub fn write_report(path: &Path, report: &PlanReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create plan file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report).context("Failed to encode plan report")?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_report() -> PlanReport {
        let region = EnclosedRegion::from_ring(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ])
        .unwrap();

        PlanReport::new(region, MissionParams::default())
    }

    #[test]
    fn test_closed_triangle_has_three_legs() {
        let report = sample_report();

        assert_eq!(report.enclosed_region.ring().len(), 4);
        assert_eq!(report.legs.len(), 3);

        let first = &report.legs[0];
        assert_eq!(first.midpoint, GeoPoint::new(0.0, 0.5));
        assert_eq!(first.label, "111194.93 m");
    }

    #[test]
    fn test_write_report_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");

        let report = sample_report();
        write_report(&path, &report).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(value["enclosed_region"].as_array().unwrap().len(), 4);
        assert_eq!(value["legs"].as_array().unwrap().len(), 3);
        assert_eq!(value["legs"][0]["label"], "111194.93 m");
        assert_eq!(value["mission"]["sidelap_pct"], 70);
    }
}
