//! Error types for SpinForge

use thiserror::Error;

/// Core error type
///
/// Everything here is a setup-time precondition failure. Runtime anomalies
/// (a winning icon missing from a strip, a trigger arriving mid-spin) are
/// absorbed locally and never surface as errors.
#[derive(Error, Debug)]
pub enum SfError {
    #[error("prize catalog is empty")]
    EmptyCatalog,

    #[error("invalid pool length: {0}")]
    InvalidPoolLength(usize),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias
pub type SfResult<T> = Result<T, SfError>;
