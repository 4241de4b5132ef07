//! Check descriptors.

use std::fmt;

use super::arguments::Arguments;

/// Identifies one check to run and the arguments to run it with.
///
/// Built by the catalog and consumed by the dispatcher. Fields are private
/// so a descriptor cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDescriptor {
    category: String,
    operation: String,
    arguments: Arguments,
}

impl CheckDescriptor {
    /// Create a descriptor with no arguments.
    pub fn new(category: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            operation: operation.into(),
            arguments: Arguments::none(),
        }
    }

    /// Create a descriptor with the given arguments.
    pub fn with_arguments(
        category: impl Into<String>,
        operation: impl Into<String>,
        arguments: impl Into<Arguments>,
    ) -> Self {
        Self {
            category: category.into(),
            operation: operation.into(),
            arguments: arguments.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Human-friendly form of the operation (`packages_installed` → `packages installed`).
    pub fn description(&self) -> String {
        self.operation.replace('_', " ")
    }
}

impl fmt::Display for CheckDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.category, self.operation)?;
        if !self.arguments.is_empty() {
            write!(f, "({})", self.arguments)?;
        }
        Ok(())
    }
}
