use thiserror::Error;

use crate::{CellCount, CellIndex};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid dimensions must be at least 1x1")]
    InvalidDimensions,
    #[error("Too many hazards, {hazards} requested for a grid of only {cells} cells")]
    TooManyHazards { hazards: CellCount, cells: CellCount },
    #[error("Cell index {index} is outside a grid of {len} cells")]
    InvalidIndex { index: CellIndex, len: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
