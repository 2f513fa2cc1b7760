use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;

/// One country-year observation. The loader builds these from the tabular
/// input; after that they are immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Country display name (e.g. "Sudan").
    pub area: String,
    /// ISO3-style country code, the join key against geographic features.
    pub iso3: String,
    /// Continent/region the country belongs to.
    pub region: String,
    pub year: i32,
    /// Mean annual food-price inflation rate in percent. May be negative.
    pub value: f64,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{normalize, InflationCategory};

    #[test]
    fn record_carries_a_normalized_category() {
        let r = Record {
            area: "Testland".to_string(),
            iso3: "TST".to_string(),
            region: "TestRegion".to_string(),
            year: 2020,
            value: 150.0,
            category: normalize("hyper"),
        };
        assert_eq!(
            r.category.canonical(),
            Some(InflationCategory::Hyperinflation)
        );
    }
}
