//! Grouped statistics over the dataset: frequency tables, cross-tabs, and
//! the shared top-N ranking primitive.
//!
//! Everything here is a pure function of the dataset and its explicit
//! arguments. Results are deterministic for deterministic input order; ties
//! and orderings are fixed rules, never incidental iteration order.

use std::collections::BTreeMap;

use serde::Serialize;

use priceatlas_common::{InflationCategory, Record, ALL_CATEGORIES};
use priceatlas_data::Dataset;

// --- Value Ranges ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Min/max of Value over an arbitrary row set. None on empty input, so the
/// caller can render a "no data" message instead of a bogus range.
pub fn value_range<'a>(rows: impl IntoIterator<Item = &'a Record>) -> Option<ValueRange> {
    let mut range: Option<ValueRange> = None;
    for r in rows {
        range = Some(match range {
            None => ValueRange {
                min: r.value,
                max: r.value,
            },
            Some(v) => ValueRange {
                min: v.min.min(r.value),
                max: v.max.max(r.value),
            },
        });
    }
    range
}

// --- Category Frequency ---

#[derive(Debug, Clone, Serialize)]
pub struct CategoryFrequency {
    pub category: InflationCategory,
    pub count: u64,
    /// None when the category has no records ("no data", not omitted).
    pub range: Option<ValueRange>,
}

/// Frequency and value range per canonical category.
///
/// Always exactly 8 entries in taxonomy order, zero-count categories
/// included. Unresolved-category records are excluded.
pub fn category_frequency(dataset: &Dataset) -> Vec<CategoryFrequency> {
    ALL_CATEGORIES
        .iter()
        .map(|&category| {
            let mut count = 0u64;
            let range = value_range(dataset.rows_for_category(category).inspect(|_| count += 1));
            CategoryFrequency {
                category,
                count,
                range,
            }
        })
        .collect()
}

// --- Region × Category Cross-tab ---

/// Counts per region per canonical category, columns in taxonomy order and
/// zero-filled. BTreeMap keeps region iteration deterministic.
pub fn region_category_crosstab(dataset: &Dataset) -> BTreeMap<String, [u64; 8]> {
    let mut crosstab: BTreeMap<String, [u64; 8]> = BTreeMap::new();
    for region in dataset.regions() {
        crosstab.insert(region, [0u64; 8]);
    }
    for r in dataset.records() {
        if let Some(c) = r.category.canonical() {
            if let Some(row) = crosstab.get_mut(&r.region) {
                row[c.index()] += 1;
            }
        }
    }
    crosstab
}

// --- Top-N Ranking ---

/// Count occurrences of each key and return the `n` most frequent.
///
/// Sorted by count descending; ties broken by ascending key. This is the
/// one ranking rule every top-N in the system uses.
pub fn top_n<K: Ord + Clone>(keys: impl IntoIterator<Item = K>, n: usize) -> Vec<(K, u64)> {
    let mut counts: BTreeMap<K, u64> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }

    let mut ranked: Vec<(K, u64)> = counts.into_iter().collect();
    // BTreeMap yields keys ascending, so a stable sort by descending count
    // leaves ties in ascending key order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
