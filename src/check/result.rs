//! The check-result vocabulary.
//!
//! Every check produces exactly one [`CheckResult`]. Failures are data:
//! callers pattern-match on the variant rather than handling errors.

use serde::{Deserialize, Serialize};

/// Outcome of running a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckResult {
    /// Check passed.
    Ok,

    /// Check was bypassed via a skip marker.
    Skipped,

    /// Non-fatal issue.
    Warn {
        /// Diagnostic text.
        output: String,
    },

    /// Check failed.
    Error {
        /// Diagnostic text.
        output: String,
        /// Suggested fix, e.g. a shell command. May be empty.
        remedy: String,
    },
}

impl CheckResult {
    /// Create a warning result.
    pub fn warn(output: impl Into<String>) -> Self {
        Self::Warn {
            output: output.into(),
        }
    }

    /// Create an error result carrying a remedy.
    pub fn error(output: impl Into<String>, remedy: impl Into<String>) -> Self {
        Self::Error {
            output: output.into(),
            remedy: remedy.into(),
        }
    }

    /// Whether the check passed.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Whether the check was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Whether the check failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Diagnostic text, if the variant carries any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Warn { output } | Self::Error { output, .. } => Some(output),
            Self::Ok | Self::Skipped => None,
        }
    }

    /// Remedy, only present on errors.
    pub fn remedy(&self) -> Option<&str> {
        match self {
            Self::Error { remedy, .. } => Some(remedy),
            _ => None,
        }
    }
}
