use thiserror::Error;

/// Failures of the image load pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    /// A newer load started before this one resolved; its result is dropped.
    #[error("image load {ticket} superseded by load {current}")]
    Stale { ticket: u64, current: u64 },
    #[error("failed to load image: {0}")]
    Failed(String),
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: f64, height: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid puzzle config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid must have at least one row and column, got {rows}x{cols}")]
    InvalidGrid { rows: u32, cols: u32 },
    #[error("fit fraction must be in (0, 1], got {0}")]
    InvalidFit(f64),
    #[error("snap distance must be a finite, non-negative number, got {0}")]
    InvalidSnap(f64),
}
