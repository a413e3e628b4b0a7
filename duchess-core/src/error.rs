//! Error types for coordinate conversion

/// Errors raised when a position or index falls outside the board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Invalid coordinate: flap={flap}, row={row}, col={col}")]
    InvalidCoordinate { flap: u8, row: u8, col: u8 },

    #[error("Invalid board index: {0}")]
    InvalidIndex(u32),

    #[error("Invalid position notation: {0:?}")]
    InvalidNotation(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
