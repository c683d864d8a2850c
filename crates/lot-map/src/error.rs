//! Map-subsystem error type.

use thiserror::Error;

use lot_core::SlotId;

/// Errors produced by `lot-map`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("slot {0} not found in lot")]
    SlotNotFound(SlotId),

    #[error("layout configuration error: {0}")]
    Config(String),
}

pub type MapResult<T> = Result<T, MapError>;
