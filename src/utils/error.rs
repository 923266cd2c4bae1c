use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Failed to read connection config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse connection config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported driver '{driver}', currently supported DriverName: {}", .supported.join(" | "))]
    UnsupportedDriver {
        driver: String,
        supported: Vec<String>,
    },

    /// Raised by an adapter provider; shown as-is.
    #[error(transparent)]
    AdapterConstruction(Box<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Policy file error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Policy error: {message}")]
    PolicyError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AdapterError {
    /// Wraps a provider failure without adding context.
    pub fn construction<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        AdapterError::AdapterConstruction(err.into())
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, AdapterError::UnsupportedDriver { .. })
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
