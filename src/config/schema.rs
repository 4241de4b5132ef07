//! Engine settings schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::skip::DEFAULT_SKIP_DIR;

/// Settings read from `.medic/config.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicConfig {
    /// Skip-marker directory, relative to the project root unless absolute.
    pub skip_dir: PathBuf,

    /// What the checklist runner does after a failed check.
    pub on_error: ErrorPolicy,
}

impl Default for MedicConfig {
    fn default() -> Self {
        Self {
            skip_dir: PathBuf::from(DEFAULT_SKIP_DIR),
            on_error: ErrorPolicy::default(),
        }
    }
}

/// Behavior of the checklist runner after a check returns `Error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing check.
    #[default]
    Halt,
    /// Run every check regardless of failures.
    Continue,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "halt" => Ok(Self::Halt),
            "continue" => Ok(Self::Continue),
            _ => Err(format!("unknown error policy: {}", s)),
        }
    }
}
