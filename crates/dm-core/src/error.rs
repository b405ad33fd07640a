//! Error types for configuration and grid parsing

use thiserror::Error;

/// Configuration rejected before generation starts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("grid sides must be at most {max}, got {width}x{height}")]
    GridTooLarge { width: i32, height: i32, max: i32 },

    #[error("room chance must be within 0..=100, got {0}")]
    InvalidRoomChance(i32),

    #[error("max features must be at least 1, got {0}")]
    InvalidMaxFeatures(i32),

    #[error("{name} must be within {min}..={max}, got {value}")]
    InvalidLimit {
        name: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialized grid that does not describe a valid grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    Dimensions { width: i32, height: i32 },

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
}
