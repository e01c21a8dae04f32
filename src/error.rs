//! Error types shared by the constellation pipeline

use std::io;
use thiserror::Error;

/// Result type for constellation operations
pub type QamResult<T> = Result<T, QamError>;

/// Errors that can occur while building, perturbing or exporting a constellation
#[derive(Error, Debug)]
pub enum QamError {
    /// Modulation order outside the supported set
    #[error("Unsupported QAM order {0}, expected one of 4, 16, 32, 64, 128, 512, 1024, 2048, 4096")]
    UnsupportedOrder(u32),

    /// Noise scope other than amplitude or phase
    #[error("Invalid noise scope '{0}', expected 'amplitude' or 'phase'")]
    InvalidNoiseScope(String),

    /// Noise intensity must be a finite positive number
    #[error("Invalid noise intensity {0}, expected a finite value > 0")]
    InvalidIntensity(f64),

    #[error("Constellation has no symbol points")]
    EmptyConstellation,

    /// Noise samples do not line up with the symbol blocks
    #[error("Noise samples not grouped per symbol: expected {expected}, got {actual}")]
    MalformedNoiseGrouping { expected: usize, actual: usize },

    /// Plot or table rendering failed
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Run configuration could not be assembled
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt was aborted or failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
