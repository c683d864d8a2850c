//! Scene-subsystem error type.

use thiserror::Error;

/// Errors produced by `lot-scene` (telemetry I/O only — scene building is
/// total).
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;
