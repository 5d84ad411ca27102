use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown discipline: {0}")]
    UnknownDiscipline(String),

    #[error("unknown practice size: {0}")]
    UnknownPracticeSize(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
