//! Typed CSV loading.
//!
//! The tabular input is loosely typed at the edge (string columns, one or two
//! category columns). Everything is converted to a strongly typed `Record`
//! here, failing fast on genuinely malformed rows instead of letting
//! ambiguous values leak into aggregation.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use priceatlas_common::{normalize, PriceAtlasError, Record};

use crate::dataset::Dataset;

/// One CSV row as it arrives. `Year` and `Value` stay strings so parse
/// failures can be reported with their row number.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Area")]
    area: String,
    #[serde(rename = "Area Code (ISO3)")]
    iso3: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Value")]
    value: String,
    #[serde(rename = "Category", default)]
    category: Option<String>,
    #[serde(rename = "Inflation_Category", default)]
    inflation_category: Option<String>,
}

/// Load the country-year CSV into an immutable `Dataset`.
///
/// `Inflation_Category` is preferred when both category columns are present
/// (the source data mirrors one onto the other); a row with neither is
/// malformed.
pub fn load_records(path: &Path) -> Result<Dataset, PriceAtlasError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for (i, row) in reader.deserialize().enumerate() {
        // Row numbers are 1-based and count the header.
        let row_number = i + 2;
        let raw: RawRow = row?;

        let year: i32 = raw.year.trim().parse().map_err(|_| malformed(
            row_number,
            format!("Year is not an integer: {:?}", raw.year),
        ))?;
        let value: f64 = raw.value.trim().parse().map_err(|_| malformed(
            row_number,
            format!("Value is not numeric: {:?}", raw.value),
        ))?;

        let raw_category = raw
            .inflation_category
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(raw.category.as_deref().filter(|s| !s.trim().is_empty()))
            .ok_or_else(|| malformed(row_number, "no category column value".to_string()))?;

        records.push(Record {
            area: raw.area.trim().to_string(),
            iso3: raw.iso3.trim().to_string(),
            region: raw.region.trim().to_string(),
            year,
            value,
            category: normalize(raw_category),
        });
    }

    info!(path = %path.display(), rows = records.len(), "Loaded inflation CSV");
    Ok(Dataset::new(records))
}

fn malformed(row: usize, reason: String) -> PriceAtlasError {
    PriceAtlasError::MalformedRow { row, reason }
}
