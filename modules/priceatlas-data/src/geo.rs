//! Geographic feature loading and year discovery.
//!
//! One GeoJSON file per year, named `Inflation_<year>.geojson`. Features
//! carry a country code and a display name; they hold no inflation data and
//! are joined against the dataset at query time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use priceatlas_common::PriceAtlasError;

const FILE_PREFIX: &str = "Inflation_";
const FILE_SUFFIX: &str = ".geojson";

/// A geographic feature as seen by the analytics layer. Geometry stays in
/// the file; only the join key and display name matter here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoFeature {
    /// ISO3-style country code (`combined_iso_a3` property).
    pub code: String,
    pub name: String,
}

/// The set of years with a geo file present, ascending and deduplicated.
/// Filenames that don't follow the convention are skipped, not errors.
pub fn discover_years(dir: &Path) -> Result<Vec<i32>, PriceAtlasError> {
    let mut years = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if let Some(year) = year_from_path(&entry.path()) {
            years.push(year);
        }
    }
    years.sort_unstable();
    years.dedup();
    Ok(years)
}

fn year_from_path(path: &Path) -> Option<i32> {
    let name = path.file_name()?.to_str()?;
    name.strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?
        .parse()
        .ok()
}

/// Load the features for one year's geo file.
///
/// Features missing the country-code property are logged and skipped; a file
/// without a `features` array is malformed.
pub fn load_features(dir: &Path, year: i32) -> Result<Vec<GeoFeature>, PriceAtlasError> {
    let path: PathBuf = dir.join(format!("{FILE_PREFIX}{year}{FILE_SUFFIX}"));
    let text = fs::read_to_string(&path)?;
    let json: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| PriceAtlasError::MalformedGeo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let raw_features = json
        .get("features")
        .and_then(|f| f.as_array())
        .ok_or_else(|| PriceAtlasError::MalformedGeo {
            path: path.display().to_string(),
            reason: "missing features array".to_string(),
        })?;

    let mut features = Vec::with_capacity(raw_features.len());
    for feature in raw_features {
        let props = feature.get("properties");
        let code = props
            .and_then(|p| p.get("combined_iso_a3"))
            .and_then(|c| c.as_str());
        let Some(code) = code else {
            warn!(path = %path.display(), "Feature without combined_iso_a3, skipping");
            continue;
        };
        let name = props
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or(code);
        features.push(GeoFeature {
            code: code.to_string(),
            name: name.to_string(),
        });
    }

    Ok(features)
}
