//! Error types for ecr-login operations.
//!
//! This module defines [`EcrLoginError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every pipeline stage returns `Result`; there is no recovery, no retry,
//!   and no partial output — the first failure terminates the run
//! - `main` maps the error to a message and a non-zero exit code only; it
//!   never branches pipeline logic on error kind
//! - Use `anyhow::Error` (via `EcrLoginError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ecr-login operations.
#[derive(Debug, Error)]
pub enum EcrLoginError {
    /// The GetAuthorizationToken call failed (network, auth, permission).
    #[error("Failed to fetch authorization tokens: {message}")]
    Transport { message: String },

    /// An authorization token failed base64 decoding or held no `:` delimiter.
    #[error("Malformed authorization token in record {index}: {message}")]
    MalformedToken { index: usize, message: String },

    /// The service returned a record missing a required field.
    #[error("Incomplete authorization record {index}: missing {field}")]
    IncompleteRecord { index: usize, field: &'static str },

    /// Template file could not be located or parsed.
    #[error("Failed to load template {path}: {message}")]
    TemplateLoad { path: PathBuf, message: String },

    /// Template execution failed (e.g. reference to an undefined field).
    #[error("Template execution failed: {message}")]
    TemplateRender { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ecr-login operations.
pub type Result<T> = std::result::Result<T, EcrLoginError>;
