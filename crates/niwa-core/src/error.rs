//! Error types for grid access, painting and configuration

use thiserror::Error;

/// Errors from grid access and the paint interface
///
/// Both kinds are recoverable: the caller discards the mutation and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        cols: usize,
        rows: usize,
    },

    #[error("cannot place {material} at ({x}, {y}): cell holds {found}")]
    IllegalPlacement {
        x: i32,
        y: i32,
        material: &'static str,
        found: &'static str,
    },
}

/// Errors from loading or validating a simulation config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, WorldError>;
