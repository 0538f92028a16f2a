use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimension {rows}x{cols}: rows and cols must be at least 1 and their product must be addressable")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
}
