use chrono::{DateTime, Utc};
use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("invalid time range: start {start} is after end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid step: {0}")]
    InvalidStep(String),

    #[error("invalid window: {0}")]
    InvalidWindow(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
