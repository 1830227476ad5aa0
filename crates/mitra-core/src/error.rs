use thiserror::Error;

/// Top-level error type for Medi Mitra.
///
/// Only configuration and I/O can actually fail. Chat and speech problems are
/// absorbed where they happen and never surface through this type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MitraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown locale: {0:?} (expected one of en, hi, or)")]
    InvalidLocale(String),
}

impl From<toml::de::Error> for MitraError {
    fn from(err: toml::de::Error) -> Self {
        MitraError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MitraError {
    fn from(err: toml::ser::Error) -> Self {
        MitraError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MitraError {
    fn from(err: serde_json::Error) -> Self {
        MitraError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Medi Mitra operations.
pub type Result<T> = std::result::Result<T, MitraError>;
