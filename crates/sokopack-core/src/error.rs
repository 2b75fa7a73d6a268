use thiserror::Error;

pub type Result<T> = std::result::Result<T, SokoError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SokoError {
    #[error("level {width}x{height} is not encodable (width and height must be < 16)")]
    Ineligible { width: usize, height: usize },

    #[error("{segment} segment holds {len} bytes, count prefix is limited to 255")]
    SegmentOverflow { segment: &'static str, len: usize },

    #[error("unknown cell symbol {symbol:?} at row={row} col={col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("row {row} has {len} cells, declared width is {width}")]
    RowTooWide { row: usize, len: usize, width: usize },

    #[error("level has {rows} rows, declared height is {height}")]
    TooManyRows { rows: usize, height: usize },

    #[error("data format error: {0}")]
    Format(String),
}
