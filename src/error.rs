//! Error types shared by the board, engine and pattern code.

use thiserror::Error;

/// Errors raised by board construction, mutation and pattern handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Board size must be positive
    #[error("Invalid board size: {0}")]
    InvalidSize(usize),

    /// Cell address outside the board
    #[error("Cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Pattern region does not fit on the board
    #[error("Pattern of {rows}x{cols} centered at ({row}, {col}) does not fit a {size}x{size} board")]
    PatternOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        size: usize,
    },

    /// Pattern rows have differing lengths
    #[error("Ragged pattern: row {row} has {found} cells, expected {expected}")]
    RaggedPattern { row: usize, expected: usize, found: usize },

    /// Pattern contains no cells
    #[error("Pattern has no cells")]
    EmptyPattern,

    /// Pattern literal holds something other than 0 or 1
    #[error("Invalid cell value {value} at ({row}, {col})")]
    InvalidCellValue { row: usize, col: usize, value: u8 },
}

/// Result type for life operations
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Create an out-of-bounds error for a single cell
    pub fn out_of_bounds(row: usize, col: usize, size: usize) -> Self {
        Self::OutOfBounds { row, col, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = LifeError::out_of_bounds(8, 0, 8);
        assert_eq!(err.to_string(), "Cell (8, 0) is outside a 8x8 board");
    }

    #[test]
    fn test_ragged_message_names_row() {
        let err = LifeError::RaggedPattern { row: 2, expected: 3, found: 1 };
        assert!(err.to_string().contains("row 2"));
    }
}
