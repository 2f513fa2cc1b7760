//! Query engine over the immutable inflation dataset.
//!
//! Every operation is a pure function of the dataset plus explicit filter
//! arguments: frequency tables and cross-tabs, top-N rankings, insight
//! bundles, geo feature styling, and word-cloud weights. Results are handed
//! to external rendering collaborators; nothing here renders or mutates.

pub mod aggregate;
pub mod cache;
pub mod geo_match;
pub mod insights;
pub mod wordcloud;

pub use aggregate::{
    category_frequency, region_category_crosstab, top_n, value_range, CategoryFrequency,
    ValueRange,
};
pub use cache::{FilterKey, MemoCache};
pub use geo_match::{resolve, FeatureStyle};
pub use insights::{
    category_insights, global_insights, CategoryInsights, GlobalInsights, HIGH_TO_HYPER,
};
pub use wordcloud::build_weights;
