//! Error types for jsx-distill
//!
//! Only hard failures live here. Constructs the extractor does not recognize
//! are skipped silently and never surface as errors.

use std::process::ExitCode;

use thiserror::Error;

/// Errors raised while reading, parsing or serving component source
#[derive(Debug, Error)]
pub enum DistillError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("unsupported file extension: {extension} (expected .tsx, .jsx, .ts or .js)")]
    UnsupportedExtension { extension: String },

    #[error("{message}")]
    Parse { message: String },

    #[error("descriptor validation failed: {}", .issues.join("; "))]
    Validation { issues: Vec<String> },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DistillError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(2),
            Self::UnsupportedExtension { .. } => ExitCode::from(3),
            Self::Parse { .. } => ExitCode::from(4),
            Self::Validation { .. } => ExitCode::from(5),
            Self::InvalidRequest { .. } => ExitCode::from(6),
            Self::Json(_) | Self::Io(_) => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, DistillError>;
