use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_speed_mph() -> f64 {
    15.0
}
fn default_altitude_m() -> f64 {
    60.0
}
fn default_spacing_m() -> f64 {
    30.0
}
fn default_sidelap_pct() -> u8 {
    70
}
fn default_frontlap_pct() -> u8 {
    80
}

/// Flight parameters attached to a mission plan.
///
/// These ride along with the waypoint submission and are echoed into the
/// plan report for the ground-control side; no flight path is derived from
/// them here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionParams {
    /// Flight speed in mph
    #[serde(default = "default_speed_mph")]
    pub speed_mph: f64,
    /// Flight altitude in meters
    #[serde(default = "default_altitude_m")]
    pub altitude_m: f64,
    /// Survey line spacing in meters
    #[serde(default = "default_spacing_m")]
    pub spacing_m: f64,
    /// Side overlap between adjacent survey lines, percent
    #[serde(default = "default_sidelap_pct")]
    pub sidelap_pct: u8,
    /// Forward overlap between consecutive frames, percent
    #[serde(default = "default_frontlap_pct")]
    pub frontlap_pct: u8,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            speed_mph: default_speed_mph(),
            altitude_m: default_altitude_m(),
            spacing_m: default_spacing_m(),
            sidelap_pct: default_sidelap_pct(),
            frontlap_pct: default_frontlap_pct(),
        }
    }
}

fn default_planner_urls() -> Vec<String> {
    vec!["http://localhost:8000/enclosed".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_planner_urls")]
    pub urls: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            urls: default_planner_urls(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub geojson: Option<PathBuf>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub mission: Option<MissionParams>,
    #[serde(default)]
    pub planner: Option<PlannerConfig>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("surveyplan.toml"));
    paths.push(PathBuf::from(".surveyplan.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("surveyplan").join("config.toml"));
        paths.push(config_dir.join("surveyplan.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".surveyplan.toml"));
        paths.push(home.join(".config").join("surveyplan").join("config.toml"));
    }

    paths
}
