use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid condition: [{clause}]: tokenized as [{}]", .tokens.join(","))]
    InvalidCondition { clause: String, tokens: Vec<String> },

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Invalid sran level: {0}")]
    InvalidSranLevel(String),

    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    #[error("Invalid chart {id}: {reason}")]
    InvalidChart { id: String, reason: String },

    #[error("Duplicate chart id: {0}")]
    DuplicateChartId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
