//! Error types for prereq operations.
//!
//! This module defines [`PrereqError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PrereqError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PrereqError::Other`) for unexpected errors
//! - Failure variants carry everything needed to render an actionable message

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for prereq operations.
#[derive(Debug, Error)]
pub enum PrereqError {
    /// The requirement's executable could not be found.
    #[error("Requirement '{name}' not fulfilled; command `{command}` not found")]
    RequirementMissing { name: String, command: String },

    /// The requirement's command ran but exited nonzero.
    #[error(
        "Requirement '{name}' error; command `{command}` returned a non-zero exit code, {code}, with output:\n\n{output}",
        code = display_exit_code(.exit_code)
    )]
    RequirementFailed {
        name: String,
        command: String,
        exit_code: Option<i32>,
        output: String,
    },

    /// A requirement is structurally unusable (e.g. empty command).
    #[error("Invalid requirement '{name}': {message}")]
    InvalidRequirement { name: String, message: String },

    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Invalid manifest structure or values.
    #[error("Invalid manifest: {message}")]
    ManifestValidation { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for prereq operations.
pub type Result<T> = std::result::Result<T, PrereqError>;

/// Render an exit code for error messages (signal deaths have none).
fn display_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "killed by signal".to_string(),
    }
}
