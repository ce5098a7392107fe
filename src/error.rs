use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid threshold: {threshold} (strategy requires at least {minimum})")]
    InvalidThreshold { threshold: usize, minimum: usize },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
