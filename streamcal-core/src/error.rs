//! Error types for the streamcal toolkit.

use thiserror::Error;

/// Errors that can occur in streamcal operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for streamcal operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
