use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{OverpassError, OverpassResponse, fetch_boundary};
use crate::config::OverpassConfig;
use crate::domain::DistrictRecord;
use crate::export;
use crate::osm;

const LANDKREIS_PREFIX: &str = "Landkreis ";

/// Why a district fetch produced no boundary file.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Network(#[from] OverpassError),
    #[error("no administrative boundary found for '{name}'")]
    NoBoundaryFound { name: String },
    #[error("no valid polygons in boundary data for '{name}'")]
    NoValidPolygons { name: String },
    #[error("failed to write boundary file: {0}")]
    Io(#[from] std::io::Error),
}

/// Name variants tried in order until one yields a non-empty result.
///
/// "Landkreis X" falls back to the bare name and then to "Kreis X", matching
/// the two naming conventions OSM uses for rural districts. Plain city names
/// have no fallback.
pub fn candidates(name: &str) -> Vec<String> {
    match name.strip_prefix(LANDKREIS_PREFIX) {
        Some(stripped) => vec![
            name.to_string(),
            stripped.to_string(),
            format!("Kreis {stripped}"),
        ],
        None => vec![name.to_string()],
    }
}

/// Fetch the administrative boundary for `name` and write it below
/// `output_dir`. Returns the written path.
///
/// Every failure is tagged: transport errors, exhausted name variants,
/// geometry assembly yielding no valid polygon, and filesystem errors are
/// all distinct `FetchError` variants. The caller decides whether to stop
/// or move on to the next district.
pub fn fetch_district(
    client: &reqwest::blocking::Client,
    config: &OverpassConfig,
    name: &str,
    output_dir: &Path,
) -> Result<PathBuf, FetchError> {
    fetch_district_with(name, output_dir, |candidate| {
        fetch_boundary(client, config, candidate)
    })
}

/// Fallback-chain driver, parameterized over the query function so the
/// chain can be exercised without a live Overpass endpoint.
///
/// A transport error terminates the chain immediately; remaining candidates
/// are not tried. The written record carries the winning candidate name,
/// which may differ from the name the caller asked for.
pub(crate) fn fetch_district_with<F>(
    name: &str,
    output_dir: &Path,
    mut query: F,
) -> Result<PathBuf, FetchError>
where
    F: FnMut(&str) -> Result<OverpassResponse, OverpassError>,
{
    for candidate in candidates(name) {
        let response = query(&candidate)?;

        if response.elements.is_empty() {
            eprintln!("No boundary data found for {candidate}");
            continue;
        }

        let geometry =
            osm::assemble_boundary(&response).ok_or_else(|| FetchError::NoValidPolygons {
                name: candidate.clone(),
            })?;

        let record = DistrictRecord {
            name: candidate,
            geometry,
        };
        return Ok(export::write_district(&record, output_dir)?);
    }

    Err(FetchError::NoBoundaryFound {
        name: name.to_string(),
    })
}
