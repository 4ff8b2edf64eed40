use thiserror::Error;

/// Errors produced by rule construction, evolution, table queries and rendering.
#[derive(Debug, Error)]
pub enum CaError {
    /// Rule index is not in `0..=255`.
    #[error("invalid rule index {index}: must be in 0..=255")]
    InvalidRuleIndex { index: u32 },

    /// A neighborhood was left without an output while building a rule table.
    #[error("rule {rule} has no output for neighborhood {neighborhood:03b}")]
    IncompleteRuleTable { rule: u8, neighborhood: u8 },

    /// A supplied row does not have the configured width.
    #[error("row has {actual} cells, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Step count is not below the table's upper bound.
    #[error("step {steps} is out of range: table answers steps < {max_steps}")]
    StepOutOfRange { steps: u64, max_steps: u128 },

    /// Rows need at least one cell.
    #[error("row size must be at least 1")]
    EmptyRow,

    /// Row width cannot be enumerated by a lifting table.
    #[error("unsupported row size {size}: expected 1..={max}")]
    UnsupportedSize { size: usize, max: usize },

    /// Text is not a sequence of `0` and `1`.
    #[error("invalid row: {0}")]
    InvalidRow(String),

    /// Initial row description is not `random`, `random:<n>` or `center`.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// Image scale must be at least 1.
    #[error("scale must be greater than 0")]
    InvalidScale,

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaError>;
