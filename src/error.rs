//! Error types for Medic operations.
//!
//! This module defines [`MedicError`], the error type for faults that sit
//! outside the check-result vocabulary, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - A check that finds a problem returns a [`CheckResult`](crate::check::CheckResult),
//!   never an error
//! - `MedicError` is reserved for a misconfigured catalog or engine setup,
//!   and terminates the run
//! - Use `anyhow::Error` (via `MedicError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Medic operations.
#[derive(Debug, Error)]
pub enum MedicError {
    /// No check is registered under the descriptor's category and operation.
    #[error("Unknown check: {category}::{operation}")]
    UnknownCheck { category: String, operation: String },

    /// A check rejected the arguments it was dispatched with.
    #[error("Invalid arguments for check '{check}': {message}")]
    InvalidArguments { check: String, message: String },

    /// Failed to parse the engine settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A setting has a value the engine does not understand.
    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: String, value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Medic operations.
pub type Result<T> = std::result::Result<T, MedicError>;
