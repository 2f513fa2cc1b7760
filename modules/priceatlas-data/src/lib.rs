//! Data layer: typed loading and the immutable in-memory dataset.
//!
//! Loading is the only I/O in the system. After `load_records` returns, the
//! dataset is read-only for the life of the process and safe to share across
//! concurrent queries without locking.

pub mod dataset;
pub mod geo;
pub mod loader;

pub use dataset::Dataset;
pub use geo::{discover_years, load_features, GeoFeature};
pub use loader::load_records;
