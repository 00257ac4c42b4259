use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::time::Duration;

use crate::config::PlannerConfig;
use crate::domain::{EnclosedRegion, GeoPoint};

const USER_AGENT: &str = "surveyplan/0.1.0";

/// Raw planner endpoint response.
///
/// A successful response carries `enclosed_region` as a closed ring of
/// `[lat, lon]` pairs; a rejection carries `error` with a user-facing
/// message instead.
#[derive(Debug, Default, Deserialize)]
pub struct PlannerResponse {
    #[serde(default)]
    pub enclosed_region: Option<Vec<GeoPoint>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Submit waypoints to a remote planner endpoint and return the enclosed
/// region it computed.
///
/// The waypoint list is sent as a form field named `coordinates`, JSON
/// encoded in the `[[lat, lon], ...]` wire format. Retries on 429/504,
/// rotating through the configured mirror list.
pub fn fetch_enclosed_region(
    points: &[GeoPoint],
    config: &PlannerConfig,
) -> Result<EnclosedRegion> {
    if config.urls.is_empty() {
        bail!("No planner endpoint configured");
    }

    let payload = serde_json::to_string(points).context("Failed to encode waypoints")?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let mut last_error = None;

    for attempt in 0..config.max_retries {
        if attempt > 0 {
            let wait_secs = 2 * attempt as u64;
            eprintln!(
                "Planner endpoint busy, retrying in {} seconds (attempt {}/{})",
                wait_secs,
                attempt + 1,
                config.max_retries
            );
            std::thread::sleep(Duration::from_secs(wait_secs));
        }

        let url = &config.urls[attempt as usize % config.urls.len()];

        // The endpoint expects form-encoded POST data with the waypoint
        // list under the `coordinates` key
        let response = client
            .post(url)
            .form(&[("coordinates", payload.as_str())])
            .send()
            .with_context(|| format!("Failed to send request to planner at {}", url))?;

        match response.status().as_u16() {
            200 => {
                let body: PlannerResponse = response
                    .json()
                    .context("Failed to parse planner JSON response")?;
                return region_from_response(body);
            }
            400 => {
                // Rejections carry the user-facing message in the body
                let body: PlannerResponse = response.json().unwrap_or_default();
                match body.error {
                    Some(message) => bail!("Planner rejected waypoints: {}", message),
                    None => bail!("Planner returned status 400"),
                }
            }
            429 | 504 => {
                last_error = Some(format!(
                    "Planner returned status {} from {} (attempt {})",
                    response.status(),
                    url,
                    attempt + 1
                ));
                continue;
            }
            status => {
                bail!("Planner returned error status: {}", status);
            }
        }
    }

    bail!(
        "Planner failed after {} retries: {}",
        config.max_retries,
        last_error.unwrap_or_else(|| "Unknown error".to_string())
    )
}

fn region_from_response(body: PlannerResponse) -> Result<EnclosedRegion> {
    if let Some(message) = body.error {
        bail!("Planner rejected waypoints: {}", message);
    }

    let ring = body
        .enclosed_region
        .ok_or_else(|| anyhow::anyhow!("Planner response missing enclosed_region"))?;

    EnclosedRegion::from_ring(ring).context("Planner returned an invalid region")
}
