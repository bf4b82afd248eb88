use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("timeline parse error: {0}")]
    InputParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid clock value: {0}")]
    InvalidClock(String),

    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
