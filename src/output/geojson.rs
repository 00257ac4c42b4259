use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::report::PlanReport;
use crate::domain::GeoPoint;

// GeoJSON positions are (lon, lat), the reverse of the wire format
fn position(point: GeoPoint) -> Value {
    json!([point.lon, point.lat])
}

/// Render a plan as a GeoJSON FeatureCollection: one Polygon feature for
/// the enclosed region and one Point feature per distance label, anchored
/// at the leg midpoint.
pub fn plan_to_geojson(report: &PlanReport) -> Value {
    let ring: Vec<Value> = report
        .enclosed_region
        .ring()
        .iter()
        .map(|&point| position(point))
        .collect();

    let mut features = vec![json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
        "properties": {
            "role": "enclosed-region",
        },
    })];

    for leg in &report.legs {
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": position(leg.midpoint),
            },
            "properties": {
                "role": "distance-label",
                "meters": leg.meters,
                "label": leg.label,
            },
        }));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Write a plan as a GeoJSON file for map viewers
pub fn write_geojson(path: &Path, report: &PlanReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create GeoJSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &plan_to_geojson(report))
        .context("Failed to encode GeoJSON")?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
