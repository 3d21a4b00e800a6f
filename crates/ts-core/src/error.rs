//! Planner error type.
//!
//! Sub-crates define their own error enums and wrap `TsError` as one variant
//! where configuration or parse failures cross the crate boundary.

use thiserror::Error;

/// The top-level error type for `ts-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TsError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ts-*` crates.
pub type TsResult<T> = Result<T, TsError>;
