//! Check registry.
//!
//! The [`CheckRegistry`] maps a `(category, operation)` pair to the function
//! that implements it. A catalog populates it at startup; the dispatcher
//! resolves descriptors against it at call time.

use std::collections::HashMap;

use crate::check::{CheckResult, Param};
use crate::error::Result;

/// A check implementation.
///
/// Receives the normalized parameters (see [`normalize`](crate::check::normalize)).
/// Returns [`MedicError::InvalidArguments`](crate::MedicError::InvalidArguments)
/// when it cannot accept them.
pub type CheckFn = Box<dyn Fn(&[Param]) -> Result<CheckResult>>;

/// Registry of all known checks.
#[derive(Default)]
pub struct CheckRegistry {
    checks: HashMap<(String, String), CheckFn>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check, replacing any existing one with the same identity.
    pub fn register<F>(
        &mut self,
        category: impl Into<String>,
        operation: impl Into<String>,
        check: F,
    ) where
        F: Fn(&[Param]) -> Result<CheckResult> + 'static,
    {
        self.checks.insert((category.into(), operation.into()), Box::new(check));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(
        mut self,
        category: impl Into<String>,
        operation: impl Into<String>,
        check: F,
    ) -> Self
    where
        F: Fn(&[Param]) -> Result<CheckResult> + 'static,
    {
        self.register(category, operation, check);
        self
    }

    /// Look up a check.
    pub fn get(&self, category: &str, operation: &str) -> Option<&CheckFn> {
        self.checks.get(&(category.to_string(), operation.to_string()))
    }

    pub fn contains(&self, category: &str, operation: &str) -> bool {
        self.get(category, operation).is_some()
    }

    /// Registered identities, sorted.
    pub fn identities(&self) -> Vec<(&str, &str)> {
        let mut ids: Vec<_> = self
            .checks
            .keys()
            .map(|(c, o)| (c.as_str(), o.as_str()))
            .collect();
        ids.sort();
        ids
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.identities())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_PARAMS: &[Param] = &[];

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = CheckRegistry::new();
        registry.register("git", "installed", |_| Ok(CheckResult::Ok));

        assert!(registry.contains("git", "installed"));
        assert!(!registry.contains("git", "configured"));
        assert!(!registry.contains("installed", "git"));

        let check = registry.get("git", "installed").unwrap();
        assert_eq!(check(NO_PARAMS).unwrap(), CheckResult::Ok);
    }

    #[test]
    fn registering_same_identity_replaces() {
        let registry = CheckRegistry::new()
            .with("disk", "space", |_| Ok(CheckResult::Ok))
            .with("disk", "space", |_| Ok(CheckResult::warn("disk low")));

        assert_eq!(registry.len(), 1);
        let check = registry.get("disk", "space").unwrap();
        assert_eq!(check(NO_PARAMS).unwrap(), CheckResult::warn("disk low"));
    }

    #[test]
    fn identities_are_sorted() {
        let registry = CheckRegistry::new()
            .with("b", "two", |_| Ok(CheckResult::Ok))
            .with("a", "one", |_| Ok(CheckResult::Ok));
        assert_eq!(registry.identities(), vec![("a", "one"), ("b", "two")]);
    }

    #[test]
    fn check_receives_params() {
        let registry = CheckRegistry::new().with("echo", "first", |params: &[Param]| {
            let first = params.first().and_then(Param::as_value).unwrap_or("");
            Ok(CheckResult::warn(first))
        });
        let check = registry.get("echo", "first").unwrap();
        let params = vec![Param::Value("hi".into())];
        let result = check(params.as_slice()).unwrap();
        assert_eq!(result, CheckResult::warn("hi"));
    }
}
