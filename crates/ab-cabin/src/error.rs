use thiserror::Error;

#[derive(Debug, Error)]
pub enum CabinError {
    #[error("invalid cabin dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("no column carries seat letter {0:?}")]
    UnknownSeatLetter(char),

    #[error("cell ({row}, {column}) is outside the {rows}x{width} grid")]
    OutOfBounds {
        row:    usize,
        column: usize,
        rows:   usize,
        width:  usize,
    },
}

pub type CabinResult<T> = Result<T, CabinError>;
