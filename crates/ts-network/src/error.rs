//! Network-subsystem error type.

use thiserror::Error;

use ts_core::{IntersectionId, TsError};

/// Errors produced by `ts-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("street {0:?} is defined more than once")]
    DuplicateStreet(String),

    #[error("street {street:?} references intersection {intersection}, outside [0, {count})")]
    IntersectionOutOfRange {
        street:       String,
        intersection: IntersectionId,
        count:        u32,
    },

    #[error("expected {expected} street records, found {got}")]
    StreetCountMismatch { expected: u32, got: u32 },

    #[error("expected {expected} vehicle paths, found {got}")]
    VehicleCountMismatch { expected: u32, got: u32 },

    #[error("line {line}: path declares {declared} streets but lists {got}")]
    PathLengthMismatch { line: u64, declared: usize, got: usize },

    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] TsError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
