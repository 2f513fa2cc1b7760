use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceAtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Malformed GeoJSON in {path}: {reason}")]
    MalformedGeo { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
