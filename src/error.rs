//! Error types for configuration and pattern loading

use thiserror::Error;

/// Errors raised by the configuration and loader layers.
///
/// The simulation core never produces these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },

    #[error("pattern file is missing its header (expected a title line and a generation count line)")]
    MissingHeader,

    #[error("second header line must begin with a generation count, found {line:?}")]
    InvalidGenerationCount { line: String },

    #[error("line {line_number}: expected two integer coordinates, found {line:?}")]
    InvalidCoordinate { line_number: usize, line: String },

    #[error("a {size}x{size} grid cannot hold {cells} cells")]
    GridShape { size: usize, cells: usize },

    #[error("update interval must be at least 1 millisecond")]
    ZeroInterval,
}
