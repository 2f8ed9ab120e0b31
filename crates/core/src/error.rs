//! Error types for the poster engine.

use thiserror::Error;

/// Errors produced by poster planning, rendering, and export.
#[derive(Debug, Error)]
pub enum PosterError {
    /// Canvas width or height resolved to zero pixels, or overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A style name was not recognized.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// A shape name was not recognized.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// A configuration value fell outside the range accepted at the boundary.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Encoding or writing the exported image failed. Nothing was emitted.
    #[error("export failed: {0}")]
    ExportFailed(String),
}
