use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid game language: {0}")]
    InvalidLanguage(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Track list parse error: {0}")]
    TrackListParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
