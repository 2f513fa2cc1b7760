use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the country-year mean inflation CSV.
    pub data_csv: String,
    /// Directory holding the `Inflation_<year>.geojson` files.
    pub geo_dir: String,
    /// Time-to-live for memoized query results, in seconds.
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            data_csv: required_env("DATA_CSV"),
            geo_dir: required_env("GEO_DIR"),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .expect("CACHE_TTL_SECS must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
