//! The immutable in-memory table of inflation records.
//!
//! Built once at startup, shared behind `Arc`, never mutated. The by-year,
//! by-region, and by-category indexes are derived at construction and are
//! caches over the same record vector, never a second source of truth.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;

use priceatlas_common::{InflationCategory, Record};

#[derive(Debug)]
pub struct Dataset {
    records: Vec<Record>,

    by_year: HashMap<i32, Vec<usize>>,
    by_region: HashMap<String, Vec<usize>>,
    /// Canonical categories only; unresolved records appear in no index here.
    by_category: HashMap<InflationCategory, Vec<usize>>,

    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Build the dataset and its indexes from an ordered record vector.
    /// Index vectors preserve dataset order, so "first match in dataset
    /// order" stays well-defined when querying through an index.
    pub fn new(records: Vec<Record>) -> Self {
        let start = std::time::Instant::now();

        let mut by_year: HashMap<i32, Vec<usize>> = HashMap::new();
        let mut by_region: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_category: HashMap<InflationCategory, Vec<usize>> = HashMap::new();

        for (i, r) in records.iter().enumerate() {
            by_year.entry(r.year).or_default().push(i);
            by_region.entry(r.region.clone()).or_default().push(i);
            if let Some(c) = r.category.canonical() {
                by_category.entry(c).or_default().push(i);
            }
        }

        let unresolved = records.iter().filter(|r| !r.category.is_resolved()).count();
        info!(
            records = records.len(),
            unresolved,
            years = by_year.len(),
            regions = by_region.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Dataset indexed"
        );

        Self {
            records,
            by_year,
            by_region,
            by_category,
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose category resolved to a taxonomy member.
    pub fn resolved_count(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    /// Distinct years present in the data, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.by_year.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Distinct regions present in the data, ascending.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.by_region.keys().cloned().collect();
        regions.sort();
        regions
    }

    /// Records for a year, in dataset order. Empty for an unknown year.
    pub fn rows_for_year(&self, year: i32) -> impl Iterator<Item = &Record> {
        self.by_year
            .get(&year)
            .into_iter()
            .flatten()
            .map(move |&i| &self.records[i])
    }

    /// Records for a canonical category, in dataset order.
    pub fn rows_for_category(&self, category: InflationCategory) -> impl Iterator<Item = &Record> {
        self.by_category
            .get(&category)
            .into_iter()
            .flatten()
            .map(move |&i| &self.records[i])
    }

    /// Records for a region, in dataset order.
    pub fn rows_for_region(&self, region: &str) -> impl Iterator<Item = &Record> {
        self.by_region
            .get(region)
            .into_iter()
            .flatten()
            .map(move |&i| &self.records[i])
    }
}
