//! The fixed inflation-category taxonomy and label normalization.
//!
//! Raw category labels arrive in many shapes ("very-high", "hyper inflation",
//! "Moderate Inflation"). Everything downstream works on the 8 canonical
//! categories, in one shared severity order, so normalization lives here and
//! nowhere else.

use serde::{Deserialize, Serialize};

// --- Canonical Categories ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InflationCategory {
    Deflation,
    VeryLowInflation,
    TargetInflation,
    LowInflation,
    ModerateInflation,
    HighInflation,
    VeryHighInflation,
    Hyperinflation,
}

/// The single shared ordering. Every frequency table, cross-tab column set,
/// and legend iterates this array, never an ad-hoc list.
pub const ALL_CATEGORIES: [InflationCategory; 8] = [
    InflationCategory::Deflation,
    InflationCategory::VeryLowInflation,
    InflationCategory::TargetInflation,
    InflationCategory::LowInflation,
    InflationCategory::ModerateInflation,
    InflationCategory::HighInflation,
    InflationCategory::VeryHighInflation,
    InflationCategory::Hyperinflation,
];

/// Fill color for features with no matching record or an unresolved category.
pub const DEFAULT_COLOR: &str = "#808080";

impl std::fmt::Display for InflationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl InflationCategory {
    /// Canonical display label, as it appears in the source data.
    pub fn label(&self) -> &'static str {
        match self {
            InflationCategory::Deflation => "Deflation",
            InflationCategory::VeryLowInflation => "Very Low Inflation",
            InflationCategory::TargetInflation => "Target Inflation",
            InflationCategory::LowInflation => "Low Inflation",
            InflationCategory::ModerateInflation => "Moderate Inflation",
            InflationCategory::HighInflation => "High Inflation",
            InflationCategory::VeryHighInflation => "Very High Inflation",
            InflationCategory::Hyperinflation => "Hyperinflation",
        }
    }

    /// Position in the shared severity order (0 = Deflation .. 7 = Hyperinflation).
    /// Variant declaration order is the taxonomy order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Choropleth fill color for this category.
    pub fn color(&self) -> &'static str {
        match self {
            InflationCategory::Deflation => "#1f77b4",
            InflationCategory::VeryLowInflation => "#53b5a3",
            InflationCategory::TargetInflation => "#2ca02c",
            InflationCategory::LowInflation => "#98df8a",
            InflationCategory::ModerateInflation => "#ffcc00",
            InflationCategory::HighInflation => "#ff7f0e",
            InflationCategory::VeryHighInflation => "#d62728",
            InflationCategory::Hyperinflation => "#7F00FF",
        }
    }

    /// Legend text for the value range this category covers.
    pub fn range_label(&self) -> &'static str {
        match self {
            InflationCategory::Deflation => "Below 0%",
            InflationCategory::VeryLowInflation => "0% - 2%",
            InflationCategory::TargetInflation => "2% - 3%",
            InflationCategory::LowInflation => "3% - 4%",
            InflationCategory::ModerateInflation => "4% - 10%",
            InflationCategory::HighInflation => "10% - 50%",
            InflationCategory::VeryHighInflation => "50% - 100%",
            InflationCategory::Hyperinflation => "Above 100%",
        }
    }

    fn from_label(s: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.label() == s)
    }
}

// --- Normalized Category ---

/// A normalized category: canonical, or the original label when no rule
/// matched. Unresolved records stay in the dataset but are excluded from
/// canonical-category aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Category {
    Canonical(InflationCategory),
    Unresolved(String),
}

impl Category {
    pub fn canonical(&self) -> Option<InflationCategory> {
        match self {
            Category::Canonical(c) => Some(*c),
            Category::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Category::Canonical(_))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Canonical(c) => f.write_str(c.label()),
            Category::Unresolved(s) => f.write_str(s),
        }
    }
}

// --- Alias Table ---

/// Substring patterns mapped to canonical categories, evaluated in order
/// against the lowercased label. The order is load-bearing: more specific
/// patterns come first so "very high" never lands on HighInflation and the
/// "hyper" family never falls through to the bare "high".
const ALIASES: &[(&str, InflationCategory)] = &[
    ("hyper-inflation", InflationCategory::Hyperinflation),
    ("hyper inflation", InflationCategory::Hyperinflation),
    ("hyper", InflationCategory::Hyperinflation),
    ("deflation", InflationCategory::Deflation),
    ("very-low", InflationCategory::VeryLowInflation),
    ("very low", InflationCategory::VeryLowInflation),
    ("very-high", InflationCategory::VeryHighInflation),
    ("very high", InflationCategory::VeryHighInflation),
    ("target", InflationCategory::TargetInflation),
    ("moderate", InflationCategory::ModerateInflation),
    ("low", InflationCategory::LowInflation),
    ("high", InflationCategory::HighInflation),
];

/// Normalize a raw category label. Never fails.
///
/// Exact canonical labels pass through untouched; otherwise the first alias
/// pattern contained in the lowercased label wins; otherwise the trimmed
/// label is kept as `Unresolved`.
pub fn normalize(raw: &str) -> Category {
    let trimmed = raw.trim();

    if let Some(c) = InflationCategory::from_label(trimmed) {
        return Category::Canonical(c);
    }

    let lower = trimmed.to_lowercase();
    for (pattern, category) in ALIASES {
        if lower.contains(pattern) {
            return Category::Canonical(*category);
        }
    }

    Category::Unresolved(trimmed.to_string())
}
