//! Insight bundles: the numbers behind the dashboard's text panels.

use serde::Serialize;

use priceatlas_common::InflationCategory;
use priceatlas_data::Dataset;

use crate::aggregate::top_n;

/// Categories counted as "high to hyper" in the global rankings.
pub const HIGH_TO_HYPER: [InflationCategory; 3] = [
    InflationCategory::HighInflation,
    InflationCategory::VeryHighInflation,
    InflationCategory::Hyperinflation,
];

// --- Per-category Insights ---

#[derive(Debug, Clone, Serialize)]
pub struct CategoryInsights {
    pub category: InflationCategory,
    /// Countries most frequently in this category, top 3.
    pub top_countries: Vec<(String, u64)>,
    pub average_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Years with the most occurrences of this category, top 3.
    pub top_years: Vec<(i32, u64)>,
}

/// Insights over the records of one canonical category.
/// None when the category has no records.
pub fn category_insights(
    dataset: &Dataset,
    category: InflationCategory,
) -> Option<CategoryInsights> {
    let rows: Vec<_> = dataset.rows_for_category(category).collect();
    if rows.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for r in &rows {
        sum += r.value;
        min = min.min(r.value);
        max = max.max(r.value);
    }

    Some(CategoryInsights {
        category,
        top_countries: top_n(rows.iter().map(|r| r.area.clone()), 3),
        average_value: sum / rows.len() as f64,
        min_value: min,
        max_value: max,
        top_years: top_n(rows.iter().map(|r| r.year), 3),
    })
}

// --- Global Insights ---

#[derive(Debug, Clone, Serialize)]
pub struct GlobalInsights {
    /// Years with the most hyperinflationary country-records, top 5.
    pub top_hyperinflation_years: Vec<(i32, u64)>,
    /// Years with the most deflationary country-records, top 5.
    pub top_deflation_years: Vec<(i32, u64)>,
    /// Countries most frequently at target inflation, top 5.
    pub top_target_inflation_countries: Vec<(String, u64)>,
    /// Regions most affected by high-to-hyper inflation, top 5.
    pub top_high_to_hyper_regions: Vec<(String, u64)>,
    /// Countries most affected by high-to-hyper inflation, top 5.
    pub top_high_to_hyper_countries: Vec<(String, u64)>,
}

/// The dashboard-wide ranking bundle. Sparse data yields short or empty
/// rankings, never an error.
pub fn global_insights(dataset: &Dataset) -> GlobalInsights {
    let high_to_hyper = || {
        HIGH_TO_HYPER
            .iter()
            .flat_map(|&c| dataset.rows_for_category(c))
    };

    GlobalInsights {
        top_hyperinflation_years: top_n(
            dataset
                .rows_for_category(InflationCategory::Hyperinflation)
                .map(|r| r.year),
            5,
        ),
        top_deflation_years: top_n(
            dataset
                .rows_for_category(InflationCategory::Deflation)
                .map(|r| r.year),
            5,
        ),
        top_target_inflation_countries: top_n(
            dataset
                .rows_for_category(InflationCategory::TargetInflation)
                .map(|r| r.area.clone()),
            5,
        ),
        top_high_to_hyper_regions: top_n(high_to_hyper().map(|r| r.region.clone()), 5),
        top_high_to_hyper_countries: top_n(high_to_hyper().map(|r| r.area.clone()), 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use priceatlas_common::{normalize, Record};

    fn rec(area: &str, region: &str, year: i32, value: f64, raw: &str) -> Record {
        Record {
            area: area.to_string(),
            iso3: area.to_uppercase(),
            region: region.to_string(),
            year,
            value,
            category: normalize(raw),
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            rec("Hyperia", "South", 2019, 180.0, "hyper"),
            rec("Hyperia", "South", 2020, 250.0, "hyper"),
            rec("Hyperia", "South", 2021, 300.0, "hyper"),
            rec("Steadia", "North", 2019, 2.1, "target"),
            rec("Steadia", "North", 2020, 2.4, "target"),
            rec("Heatia", "South", 2020, 30.0, "high"),
            rec("Heatia", "South", 2021, 60.0, "very high"),
            rec("Coldia", "North", 2020, -2.0, "deflation"),
        ])
    }

    #[test]
    fn category_insights_cover_values_and_rankings() {
        let insights = category_insights(&sample(), InflationCategory::Hyperinflation).unwrap();
        assert_eq!(insights.top_countries, vec![("Hyperia".to_string(), 3)]);
        assert!((insights.average_value - (180.0 + 250.0 + 300.0) / 3.0).abs() < 1e-10);
        assert_eq!(insights.min_value, 180.0);
        assert_eq!(insights.max_value, 300.0);
        assert_eq!(insights.top_years.len(), 3);
    }

    #[test]
    fn empty_category_yields_none_not_an_error() {
        assert!(category_insights(&sample(), InflationCategory::LowInflation).is_none());
    }

    #[test]
    fn global_insights_count_high_to_hyper_across_three_categories() {
        let insights = global_insights(&sample());
        // Hyperia 3 + Heatia 2, all in South.
        assert_eq!(
            insights.top_high_to_hyper_regions,
            vec![("South".to_string(), 5)]
        );
        assert_eq!(
            insights.top_high_to_hyper_countries,
            vec![("Hyperia".to_string(), 3), ("Heatia".to_string(), 2)]
        );
    }

    #[test]
    fn global_insights_rank_years_deterministically() {
        let insights = global_insights(&sample());
        // One hyperinflation record per year; ties break on ascending year.
        assert_eq!(
            insights.top_hyperinflation_years,
            vec![(2019, 1), (2020, 1), (2021, 1)]
        );
        assert_eq!(insights.top_deflation_years, vec![(2020, 1)]);
    }

    #[test]
    fn global_insights_on_empty_dataset_are_empty() {
        let ds = Dataset::new(vec![]);
        let insights = global_insights(&ds);
        assert!(insights.top_hyperinflation_years.is_empty());
        assert!(insights.top_target_inflation_countries.is_empty());
        assert!(insights.top_high_to_hyper_regions.is_empty());
    }
}
