use thiserror::Error;

/// Contract violations reported by the checked entry points.
///
/// The JS facade turns these into `JsValue` strings via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive and fit in u32")]
    InvalidDimensions { rows: u32, cols: u32 },

    #[error("shape mismatch: board is {board_rows}x{board_cols}, ages are {ages_rows}x{ages_cols}")]
    ShapeMismatch {
        board_rows: u32,
        board_cols: u32,
        ages_rows: u32,
        ages_cols: u32,
    },

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: u32, col: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
