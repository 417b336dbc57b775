use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::OverpassConfig;

const USER_AGENT: &str = "kreisgrenzen/0.1.0 (https://github.com/shantanugoel/kreisgrenzen)";

/// Search area used in every boundary query. Districts are only resolved
/// within Germany.
const SEARCH_AREA: &str = "Deutschland";

/// Raw Overpass API response
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single element from Overpass (node or way)
#[derive(Debug, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: u64,
    #[serde(default)]
    pub nodes: Option<Vec<u64>>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Errors raised while talking to the Overpass API.
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("request to Overpass API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Overpass API returned error status: {0}")]
    Status(reqwest::StatusCode),
}

/// Build the Overpass QL query for an administrative boundary relation
/// matching `name`, scoped to the national search area.
pub fn boundary_query(name: &str) -> String {
    format!(
        r#"[out:json][timeout:180];
area["name"="{area}"]->.searchArea;
relation["boundary"="administrative"]["name"="{name}"](area.searchArea);
out body;
>;
out skel qt;"#,
        area = SEARCH_AREA,
        name = name,
    )
}

/// Build the blocking HTTP client shared across the whole batch.
pub fn build_client(config: &OverpassConfig) -> Result<reqwest::blocking::Client, OverpassError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch the administrative boundary elements for a district name.
///
/// A transport failure or a non-success status is terminal for the current
/// fetch: the caller gives up on this name rather than retrying.
pub fn fetch_boundary(
    client: &reqwest::blocking::Client,
    config: &OverpassConfig,
    name: &str,
) -> Result<OverpassResponse, OverpassError> {
    let query = boundary_query(name);

    // Overpass expects form-encoded POST data, not a raw body: data=<query>
    let response = client.post(&config.url).form(&[("data", &query)]).send()?;

    if !response.status().is_success() {
        return Err(OverpassError::Status(response.status()));
    }

    let result: OverpassResponse = response.json()?;
    Ok(result)
}
