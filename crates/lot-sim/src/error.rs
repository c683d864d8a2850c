use lot_map::MapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("session configuration error: {0}")]
    Config(String),

    #[error("map error: {0}")]
    Map(#[from] MapError),
}

pub type SimResult<T> = Result<T, SimError>;
