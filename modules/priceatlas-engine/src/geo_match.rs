//! Country-code join between geographic features and the dataset.
//!
//! Resolves, for a year and optional category filter, the category and fill
//! color for every feature. Output feeds an external choropleth renderer
//! keyed by feature code; no rendering happens here.

use std::collections::HashMap;

use serde::Serialize;

use priceatlas_common::{InflationCategory, DEFAULT_COLOR};
use priceatlas_data::{Dataset, GeoFeature};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureStyle {
    /// None for unmatched features and unresolved-category records.
    pub category: Option<InflationCategory>,
    pub color: &'static str,
}

impl FeatureStyle {
    fn unmatched() -> Self {
        Self {
            category: None,
            color: DEFAULT_COLOR,
        }
    }
}

/// Resolve category and color for each feature by country code.
///
/// A record matches when its year and iso3 code match the feature, and its
/// category matches the filter when one is set. Duplicate country-year rows
/// are resolved first-in-dataset-order wins. Unmatched features get the
/// default color and no category; this never fails.
pub fn resolve(
    dataset: &Dataset,
    features: &[GeoFeature],
    year: i32,
    category_filter: Option<InflationCategory>,
) -> HashMap<String, FeatureStyle> {
    let mut styles = HashMap::with_capacity(features.len());

    for feature in features {
        let matched = dataset.rows_for_year(year).find(|r| {
            r.iso3 == feature.code
                && match category_filter {
                    Some(filter) => r.category.canonical() == Some(filter),
                    None => true,
                }
        });

        let style = match matched.and_then(|r| r.category.canonical()) {
            Some(c) => FeatureStyle {
                category: Some(c),
                color: c.color(),
            },
            None => FeatureStyle::unmatched(),
        };
        styles.insert(feature.code.clone(), style);
    }

    styles
}
