use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to serialize chart configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}
