//! Board construction and mutation errors

use thiserror::Error;

/// Errors raised while building or mutating a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The word pool is too small to fill a board
    #[error("You must provide at least {required} words (got {available}).")]
    InsufficientWords { required: usize, available: usize },

    /// A board was assembled from the wrong number of cells
    #[error("A board needs exactly 25 cells, got {0}")]
    WrongCellCount(usize),

    /// A cell index outside 0-24 was addressed
    #[error("Cell index {0} is out of range (0-24)")]
    CellOutOfRange(usize),
}
