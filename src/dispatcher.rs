//! Check dispatch.
//!
//! The [`Dispatcher`] is the entry point for running one check: it reports
//! progress, honors skip markers, normalizes arguments and invokes the
//! registered check function.

use tracing::debug;

use crate::check::{normalize, CheckDescriptor, CheckResult};
use crate::error::{MedicError, Result};
use crate::registry::CheckRegistry;
use crate::report::Reporter;
use crate::skip::SkipResolver;

/// Resolves descriptors against a registry and runs them.
#[derive(Debug)]
pub struct Dispatcher {
    registry: CheckRegistry,
    skips: SkipResolver,
}

impl Dispatcher {
    /// Create a dispatcher over `registry`, reading markers from `skips`.
    pub fn new(registry: CheckRegistry, skips: SkipResolver) -> Self {
        Self { registry, skips }
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    pub fn skips(&self) -> &SkipResolver {
        &self.skips
    }

    /// Run one check.
    ///
    /// A progress event is always emitted first, even when the check turns
    /// out to be skipped. A skipped check is never looked up or invoked.
    /// The final result is returned, not reported; rendering it is up to
    /// the caller.
    ///
    /// # Errors
    ///
    /// [`MedicError::UnknownCheck`] when nothing is registered for the
    /// descriptor, or whatever error the check itself returns for
    /// arguments it cannot accept.
    pub fn run(
        &self,
        descriptor: &CheckDescriptor,
        reporter: &mut dyn Reporter,
    ) -> Result<CheckResult> {
        reporter.notify_progress(
            descriptor.category(),
            &descriptor.description(),
            descriptor.arguments(),
        );

        if self.skips.is_descriptor_skipped(descriptor) {
            debug!("Skipping {}", descriptor);
            return Ok(CheckResult::Skipped);
        }

        let check = self
            .registry
            .get(descriptor.category(), descriptor.operation())
            .ok_or_else(|| MedicError::UnknownCheck {
                category: descriptor.category().to_string(),
                operation: descriptor.operation().to_string(),
            })?;

        let params = normalize(descriptor.arguments());
        debug!("Running {} with {} param(s)", descriptor, params.len());
        let result = check(params.as_slice())?;
        debug!("{} -> {:?}", descriptor, result);
        Ok(result)
    }
}
