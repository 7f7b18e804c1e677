use thiserror::Error;

use crate::CONNECT_NUMBER;

/// Errors raised by board construction and move application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid board size {rows}x{columns}, rows and columns must both be greater than {}", CONNECT_NUMBER)]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {columns}")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("could not parse '{character}' as a valid move")]
    InvalidMoveString { character: char },
}

