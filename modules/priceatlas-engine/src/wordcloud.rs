//! Country→weight mapping for the external word-cloud renderer.

use std::collections::BTreeMap;

use priceatlas_common::{InflationCategory, Record};

/// Build word-cloud weights from a filtered row set.
///
/// Weight is the record's Value, except Deflation records use the absolute
/// value: the renderer needs non-negative magnitudes, and strongly
/// deflationary countries should render large, not vanish. Duplicate areas
/// keep the last row's weight. None on empty input so the caller can render
/// a "no data" message.
pub fn build_weights<'a>(
    rows: impl IntoIterator<Item = &'a Record>,
) -> Option<BTreeMap<String, f64>> {
    let mut weights = BTreeMap::new();
    for r in rows {
        let weight = if r.category.canonical() == Some(InflationCategory::Deflation) {
            r.value.abs()
        } else {
            r.value
        };
        weights.insert(r.area.clone(), weight);
    }

    if weights.is_empty() {
        None
    } else {
        Some(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use priceatlas_common::normalize;

    fn rec(area: &str, value: f64, raw: &str) -> Record {
        Record {
            area: area.to_string(),
            iso3: area.to_uppercase(),
            region: "R".to_string(),
            year: 2020,
            value,
            category: normalize(raw),
        }
    }

    #[test]
    fn deflation_weights_flip_sign() {
        let rows = [rec("Coolland", -5.2, "Deflation")];
        let weights = build_weights(rows.iter()).unwrap();
        assert_eq!(weights["Coolland"], 5.2);
    }

    #[test]
    fn other_categories_use_the_raw_value() {
        let rows = [rec("Hotland", 42.0, "high")];
        let weights = build_weights(rows.iter()).unwrap();
        assert_eq!(weights["Hotland"], 42.0);
    }

    #[test]
    fn empty_rows_yield_none() {
        assert!(build_weights(std::iter::empty::<&Record>()).is_none());
    }

    #[test]
    fn duplicate_areas_keep_the_last_weight() {
        let rows = [rec("Twinland", 3.0, "low"), rec("Twinland", 9.0, "moderate")];
        let weights = build_weights(rows.iter()).unwrap();
        assert_eq!(weights["Twinland"], 9.0);
    }
}
