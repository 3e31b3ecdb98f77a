use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreGraphError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ScoreGraphResult<T> = Result<T, ScoreGraphError>;
