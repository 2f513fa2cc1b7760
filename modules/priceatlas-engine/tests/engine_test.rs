//! Full-flow tests: fixture CSV and GeoJSON through the loaders, then every
//! query surface the rendering layer consumes.

use std::fs;

use priceatlas_common::{InflationCategory, ALL_CATEGORIES, DEFAULT_COLOR};
use priceatlas_data::{discover_years, load_features, load_records, Dataset};
use priceatlas_engine::{
    build_weights, category_frequency, category_insights, geo_match, global_insights,
    region_category_crosstab,
};

fn init_logs() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn fixture_dataset(dir: &std::path::Path) -> Dataset {
    let csv = "\
Area,Area Code (ISO3),Region,Year,Value,Inflation_Category
Testland,TST,TestRegion,2020,150.0,hyper
Coolland,CLL,TestRegion,2020,-5.2,Deflation
Warmland,WRM,OtherRegion,2020,8.0,moderate
Warmland,WRM,OtherRegion,2021,35.0,high
Oddland,ODD,OtherRegion,2021,4.0,unclassifiable
";
    let path = dir.join("country-year_mean.csv");
    fs::write(&path, csv).unwrap();
    load_records(&path).unwrap()
}

fn fixture_geo(dir: &std::path::Path) {
    let geojson = serde_json::json!({
        "type": "FeatureCollection",
        "features": [
            { "properties": { "combined_iso_a3": "TST", "name": "Testland" } },
            { "properties": { "combined_iso_a3": "CLL", "name": "Coolland" } },
            { "properties": { "combined_iso_a3": "NOR", "name": "Norway" } },
        ]
    });
    fs::write(
        dir.join("Inflation_2020.geojson"),
        serde_json::to_string(&geojson).unwrap(),
    )
    .unwrap();
}

#[test]
fn hyper_record_lands_in_the_frequency_table() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());

    let freq = category_frequency(&ds);
    assert_eq!(freq.len(), 8);

    let hyper = &freq[InflationCategory::Hyperinflation.index()];
    assert_eq!(hyper.count, 1);
    let range = hyper.range.unwrap();
    assert_eq!(range.min, 150.0);
    assert_eq!(range.max, 150.0);

    // The unresolved "unclassifiable" row is excluded from every bucket.
    let total: u64 = freq.iter().map(|f| f.count).sum();
    assert_eq!(total, ds.resolved_count() as u64);
    assert_eq!(ds.len() - ds.resolved_count(), 1);
}

#[test]
fn crosstab_covers_every_region_in_taxonomy_order() {
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());

    let crosstab = region_category_crosstab(&ds);
    assert_eq!(crosstab.len(), 2);
    assert_eq!(
        crosstab["TestRegion"][InflationCategory::Hyperinflation.index()],
        1
    );
    assert_eq!(crosstab["TestRegion"][InflationCategory::Deflation.index()], 1);
    for (region, counts) in &crosstab {
        let resolved = ds
            .rows_for_region(region)
            .filter(|r| r.category.is_resolved())
            .count() as u64;
        assert_eq!(counts.iter().sum::<u64>(), resolved);
    }
}

#[test]
fn insights_for_an_absent_category_are_an_explicit_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());
    assert!(category_insights(&ds, InflationCategory::TargetInflation).is_none());
}

#[test]
fn global_insights_rank_across_the_whole_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());

    let insights = global_insights(&ds);
    assert_eq!(insights.top_hyperinflation_years, vec![(2020, 1)]);
    assert_eq!(insights.top_deflation_years, vec![(2020, 1)]);
    assert!(insights.top_target_inflation_countries.is_empty());
    // Testland hyper 2020 + Warmland high 2021.
    assert_eq!(
        insights.top_high_to_hyper_countries,
        vec![("Testland".to_string(), 1), ("Warmland".to_string(), 1)]
    );
}

#[test]
fn geo_resolution_joins_features_by_country_code() {
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());
    fixture_geo(dir.path());

    assert_eq!(discover_years(dir.path()).unwrap(), vec![2020]);
    let features = load_features(dir.path(), 2020).unwrap();

    let styles = geo_match::resolve(&ds, &features, 2020, None);
    assert_eq!(
        styles["TST"].category,
        Some(InflationCategory::Hyperinflation)
    );
    assert_eq!(styles["TST"].color, InflationCategory::Hyperinflation.color());
    assert_eq!(styles["CLL"].category, Some(InflationCategory::Deflation));

    // Norway has no 2020 record at all.
    assert_eq!(styles["NOR"].category, None);
    assert_eq!(styles["NOR"].color, DEFAULT_COLOR);
}

#[test]
fn geo_resolution_with_a_filter_unmatches_other_categories() {
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());
    fixture_geo(dir.path());
    let features = load_features(dir.path(), 2020).unwrap();

    let styles = geo_match::resolve(&ds, &features, 2020, Some(InflationCategory::Deflation));
    assert_eq!(styles["CLL"].category, Some(InflationCategory::Deflation));
    assert_eq!(styles["TST"].category, None);
    assert_eq!(styles["TST"].color, DEFAULT_COLOR);
}

#[test]
fn word_weights_flip_deflation_for_the_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());

    let weights = build_weights(ds.rows_for_year(2020)).unwrap();
    assert_eq!(weights["Coolland"], 5.2);
    assert_eq!(weights["Testland"], 150.0);

    // No rows for a year outside the data: explicit no-data, not a panic.
    assert!(build_weights(ds.rows_for_year(1990)).is_none());
}

#[test]
fn every_query_is_deterministic_across_repeated_runs() {
    let dir = tempfile::tempdir().unwrap();
    let ds = fixture_dataset(dir.path());

    let a = category_frequency(&ds);
    let b = category_frequency(&ds);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.category, y.category);
        assert_eq!(x.count, y.count);
    }
    assert_eq!(global_insights(&ds).top_high_to_hyper_countries,
               global_insights(&ds).top_high_to_hyper_countries);
    assert_eq!(region_category_crosstab(&ds), region_category_crosstab(&ds));
    assert_eq!(ALL_CATEGORIES.len(), 8);
}
