use thiserror::Error;

/// Errors surfaced by the gallery's storage, configuration and data layers
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not write settings: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine the user data directory")]
    NoDataDir,

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a page fetch failed. Cloneable so it can travel inside a `Message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("the gallery service is unavailable")]
    Unavailable,
}
