//! Skip-marker path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::sanitize::sanitize;
use crate::check::{Arguments, CheckDescriptor};
use crate::error::Result;

/// Default skip-marker directory, relative to the project root.
pub const DEFAULT_SKIP_DIR: &str = ".medic/skipped";

/// Maps check identities to skip-marker paths under a fixed root.
///
/// The resolver only ever reads the filesystem. Markers are created and
/// removed by the user or other tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipResolver {
    root: PathBuf,
}

impl Default for SkipResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_DIR)
    }
}

impl SkipResolver {
    /// Create a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a resolver for `project_root`'s default skip directory.
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(DEFAULT_SKIP_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The sanitized marker filename for a check identity.
    ///
    /// Non-empty members of `[category, operation, argument token]` are
    /// joined with `-` before sanitization.
    pub fn file_name(&self, category: &str, operation: &str, arguments: &Arguments) -> String {
        let token = arguments.token();
        let name = [category, operation, token.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        sanitize(&name)
    }

    /// The marker path for a check identity.
    pub fn resolve_skip_path(
        &self,
        category: &str,
        operation: &str,
        arguments: &Arguments,
    ) -> PathBuf {
        let name = self.file_name(category, operation, arguments);
        if name.is_empty() {
            return self.root.clone();
        }
        self.root.join(name)
    }

    /// Whether a marker exists for this check identity.
    ///
    /// An identity that sanitizes to `""`, `.` or `..` would name the root
    /// or its parent rather than a marker, so it is never considered skipped.
    pub fn is_skipped(&self, category: &str, operation: &str, arguments: &Arguments) -> bool {
        let name = self.file_name(category, operation, arguments);
        if matches!(name.as_str(), "" | "." | "..") {
            return false;
        }
        let path = self.root.join(name);
        let skipped = path.exists();
        debug!("Skip marker {}: {}", path.display(), skipped);
        skipped
    }

    /// Marker path for a descriptor.
    pub fn path_for(&self, descriptor: &CheckDescriptor) -> PathBuf {
        self.resolve_skip_path(
            descriptor.category(),
            descriptor.operation(),
            descriptor.arguments(),
        )
    }

    /// Whether a descriptor's marker exists.
    pub fn is_descriptor_skipped(&self, descriptor: &CheckDescriptor) -> bool {
        self.is_skipped(
            descriptor.category(),
            descriptor.operation(),
            descriptor.arguments(),
        )
    }

    /// Shell command a user can run to skip this descriptor from now on.
    pub fn skip_command(&self, descriptor: &CheckDescriptor) -> String {
        format!(
            "mkdir -p {} && touch {}",
            self.root.display(),
            self.path_for(descriptor).display()
        )
    }

    /// Names of all markers currently present, sorted.
    ///
    /// A missing skip directory means nothing is skipped.
    pub fn list_skipped(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
