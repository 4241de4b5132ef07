//! Engine settings loading.
//!
//! Settings come from `.medic/config.yml` when present, then environment
//! overrides: `MEDIC_SKIP_DIR` and `MEDIC_ON_ERROR`.

use crate::config::schema::MedicConfig;
use crate::error::{MedicError, Result};
use crate::skip::SkipResolver;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`MedicConfig::skip_dir`].
pub const SKIP_DIR_ENV: &str = "MEDIC_SKIP_DIR";

/// Environment variable overriding [`MedicConfig::on_error`].
pub const ON_ERROR_ENV: &str = "MEDIC_ON_ERROR";

/// Path of the settings file for a project.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(".medic").join("config.yml")
}

/// Parse YAML content into a [`MedicConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<MedicConfig> {
    if content.trim().is_empty() {
        return Ok(MedicConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| MedicError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

impl MedicConfig {
    /// Load settings from `path`, falling back to defaults if it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => parse_config(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(MedicError::Io(e)),
        }
    }

    /// Load a project's settings file and apply environment overrides.
    pub fn for_project(project_root: &Path) -> Result<Self> {
        Self::load(&config_path(project_root))?.with_env_overrides()
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(SKIP_DIR_ENV).filter(|d| !d.is_empty()) {
            self.skip_dir = PathBuf::from(dir);
        }
        if let Some(policy) = lookup(ON_ERROR_ENV) {
            self.on_error = policy.parse().map_err(|_| MedicError::InvalidSetting {
                name: ON_ERROR_ENV.to_string(),
                value: policy.clone(),
            })?;
        }
        Ok(self)
    }

    /// Build the skip resolver for a project.
    pub fn skip_resolver(&self, project_root: &Path) -> SkipResolver {
        SkipResolver::new(project_root.join(&self.skip_dir))
    }
}
