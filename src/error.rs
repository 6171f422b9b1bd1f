//! Error types for template customizer operations.
//!
//! This module defines [`CustomizerError`], the error type used by the
//! fallible surfaces of the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Template resolution and override reporting never fail; unknown
//!   registrations pass through and unreadable versions degrade to `None`
//! - Manifest loading returns `CustomizerError` so callers see the offending path
//! - Use `anyhow::Error` (via `CustomizerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for template customizer operations.
#[derive(Debug, Error)]
pub enum CustomizerError {
    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Manifest parsed but its contents are unusable.
    #[error("Invalid manifest: {message}")]
    InvalidManifest { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for template customizer operations.
pub type Result<T> = std::result::Result<T, CustomizerError>;
