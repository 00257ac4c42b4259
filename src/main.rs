use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod api;
mod config;
mod domain;
mod geometry;
mod output;
mod route;

use api::fetch_enclosed_region;
use config::{FileConfig, MissionParams, PlannerConfig};
use domain::Waypoints;
use geometry::enclosed_region;
use output::{PlanReport, write_geojson, write_report};
use route::total_meters;

/// Plan enclosed survey regions and leg distances for drone mission waypoints
///
/// Examples:
///   # Plan from a waypoint file, print the plan to stdout
///   surveyplan -i waypoints.json
///
///   # Inline waypoints, write the plan and a GeoJSON overlay
///   surveyplan --points "[[16.4913,80.4963],[16.4931,80.4987],[16.4897,80.4995]]" -o plan.json --geojson plan.geojson
///
///   # Delegate the region computation to a planner endpoint
///   surveyplan -i waypoints.json --remote --endpoint http://localhost:8000/enclosed
///
///   # Use a config file
///   surveyplan --config my-mission.toml
#[derive(Parser, Debug)]
#[command(name = "surveyplan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches surveyplan.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Waypoint file: a JSON array of [lat, lon] pairs in degrees
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Inline waypoints as a JSON array of [lat, lon] pairs (alternative to --input)
    #[arg(long)]
    points: Option<String>,

    /// Output plan file path (prints the plan to stdout if omitted)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Also write the plan as a GeoJSON FeatureCollection
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Delegate region computation to a remote planner endpoint
    #[arg(long)]
    remote: bool,

    /// Planner endpoint URL (overrides the configured mirror list)
    #[arg(long)]
    endpoint: Option<String>,

    /// Flight speed in mph
    #[arg(long, default_value = "15.0")]
    speed: f64,

    /// Flight altitude in meters
    #[arg(long, default_value = "60.0")]
    altitude: f64,

    /// Survey line spacing in meters
    #[arg(long, default_value = "30.0")]
    spacing: f64,

    /// Side overlap percentage between survey lines
    #[arg(long, default_value = "70", value_parser = clap::value_parser!(u8).range(0..=100))]
    sidelap: u8,

    /// Forward overlap percentage between frames
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u8).range(0..=100))]
    frontlap: u8,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let input = args
        .input
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.clone()));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let geojson = args
        .geojson
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.geojson.clone()));
    let remote = args.remote || file_config.as_ref().map(|c| c.remote).unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let mission_defaults = file_config
        .as_ref()
        .and_then(|c| c.mission.clone())
        .unwrap_or_default();
    let mission = MissionParams {
        speed_mph: if (args.speed - 15.0).abs() > 0.01 {
            args.speed
        } else {
            mission_defaults.speed_mph
        },
        altitude_m: if (args.altitude - 60.0).abs() > 0.01 {
            args.altitude
        } else {
            mission_defaults.altitude_m
        },
        spacing_m: if (args.spacing - 30.0).abs() > 0.01 {
            args.spacing
        } else {
            mission_defaults.spacing_m
        },
        sidelap_pct: if args.sidelap != 70 {
            args.sidelap
        } else {
            mission_defaults.sidelap_pct
        },
        frontlap_pct: if args.frontlap != 80 {
            args.frontlap
        } else {
            mission_defaults.frontlap_pct
        },
    };

    let mut planner_config = file_config
        .as_ref()
        .and_then(|c| c.planner.clone())
        .unwrap_or_default();
    if let Some(url) = args.endpoint.clone() {
        planner_config = PlannerConfig {
            urls: vec![url],
            ..planner_config
        };
    }

    if args.points.is_none() && input.is_none() {
        bail!("Must provide waypoints via --input/-i or --points");
    }

    println!("surveyplan - Survey Region Planner");
    println!("==================================");
    println!();

    if verbose {
        println!("Configuration:");
        if let Some(ref path) = input {
            println!("  Input: {}", path.display());
        }
        println!("  Region source: {}", if remote { "remote planner" } else { "local hull" });
        if remote {
            println!("  Planner mirrors: {}", planner_config.urls.len());
        }
        println!("  Speed: {} mph", mission.speed_mph);
        println!("  Altitude: {}m", mission.altitude_m);
        println!("  Spacing: {}m", mission.spacing_m);
        println!("  Sidelap: {}%", mission.sidelap_pct);
        println!("  Frontlap: {}%", mission.frontlap_pct);
        if let Some(ref path) = output {
            println!("  Output: {}", path.display());
        }
        if let Some(ref path) = geojson {
            println!("  GeoJSON: {}", path.display());
        }
        println!();
    }

    let waypoints = if let Some(ref json) = args.points {
        let parsed = Waypoints::from_wire_json(json).context("Failed to parse --points")?;
        println!("Loaded {} waypoints from the command line", parsed.len());
        parsed
    } else {
        let path = input.as_ref().unwrap();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read waypoint file: {}", path.display()))?;
        let parsed = Waypoints::from_wire_json(&contents)
            .with_context(|| format!("Failed to parse waypoint file: {}", path.display()))?;
        println!("Loaded {} waypoints from {}", parsed.len(), path.display());
        parsed
    };

    let region = if remote {
        let spinner = create_spinner("Requesting enclosed region from planner...");
        let start = Instant::now();
        let region = fetch_enclosed_region(waypoints.as_slice(), &planner_config)
            .context("Failed to fetch enclosed region")?;
        spinner.finish_with_message(format!(
            "Planner returned {} boundary vertices [{:.1}s]",
            region.vertices().len(),
            start.elapsed().as_secs_f32()
        ));
        region
    } else {
        let region = enclosed_region(waypoints.as_slice())?;
        println!(
            "Computed enclosed region: {} boundary vertices",
            region.vertices().len()
        );
        region
    };

    let report = PlanReport::new(region, mission);
    println!(
        "Labeled {} boundary edges, perimeter {:.2} m",
        report.legs.len(),
        total_meters(report.enclosed_region.ring())
    );

    if verbose {
        for leg in &report.legs {
            println!(
                "  ({:.5}, {:.5})  {}",
                leg.midpoint.lat, leg.midpoint.lon, leg.label
            );
        }
    }

    if let Some(ref path) = output {
        write_report(path, &report).context("Failed to write plan report")?;
        println!("Wrote plan: {}", path.display());
    } else {
        println!();
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode plan report")?
        );
    }

    if let Some(ref path) = geojson {
        write_geojson(path, &report).context("Failed to write GeoJSON overlay")?;
        println!("Wrote GeoJSON overlay: {}", path.display());
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
