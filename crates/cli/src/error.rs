//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: poster error (bad config, bad canvas)
//! - 11: export error (encode or file write)
//! - 12: input error (bad color, style, or shape)
//! - 13: serialization error

use poster_core::PosterError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A planning or rendering error.
    Poster(PosterError),
    /// Encoding or writing the PNG failed.
    Export(String),
    /// A user input error.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Poster(_) => 10,
            CliError::Export(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Poster(e) => write!(f, "{e}"),
            CliError::Export(msg) => write!(f, "export failed: {msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PosterError> for CliError {
    fn from(e: PosterError) -> Self {
        match e {
            PosterError::ExportFailed(msg) => CliError::Export(msg),
            e @ (PosterError::InvalidColor(_)
            | PosterError::UnknownStyle(_)
            | PosterError::UnknownShape(_)) => CliError::Input(e.to_string()),
            other => CliError::Poster(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
