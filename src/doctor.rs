//! Checklist runner.
//!
//! [`Doctor`] runs descriptors strictly in order through a [`Dispatcher`],
//! renders each outcome and decides, per [`ErrorPolicy`], whether to keep
//! going after a failure.

use serde::Serialize;
use tracing::info;

use crate::check::{CheckDescriptor, CheckResult};
use crate::config::ErrorPolicy;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::report::Reporter;

/// Outcome of one check in a checklist run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// `category::operation(arguments)` identity of the check.
    pub check: String,
    /// What the check returned.
    pub result: CheckResult,
}

/// Totals for a checklist run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorSummary {
    pub passed: usize,
    pub skipped: usize,
    pub warned: usize,
    pub failed: usize,
    /// Whether the run stopped early on a failure.
    pub halted: bool,
    /// Per-check outcomes in run order.
    pub outcomes: Vec<CheckOutcome>,
}

impl DoctorSummary {
    fn record(&mut self, descriptor: &CheckDescriptor, result: CheckResult) {
        match result {
            CheckResult::Ok => self.passed += 1,
            CheckResult::Skipped => self.skipped += 1,
            CheckResult::Warn { .. } => self.warned += 1,
            CheckResult::Error { .. } => self.failed += 1,
        }
        self.outcomes.push(CheckOutcome {
            check: descriptor.to_string(),
            result,
        });
    }

    /// Whether no check failed. Warnings do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Pretty-printed JSON form of the summary.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::Error::from(e).into())
    }

    /// Process exit code for the run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Runs a checklist.
#[derive(Debug)]
pub struct Doctor<'a> {
    dispatcher: &'a Dispatcher,
    policy: ErrorPolicy,
}

impl<'a> Doctor<'a> {
    pub fn new(dispatcher: &'a Dispatcher, policy: ErrorPolicy) -> Self {
        Self { dispatcher, policy }
    }

    /// Run every descriptor in order.
    ///
    /// Each result is rendered through `reporter`. A failed check is
    /// followed by a skip hint. Under [`ErrorPolicy::Halt`] the run stops
    /// after the first failure.
    ///
    /// # Errors
    ///
    /// Fatal dispatch errors (unknown check, rejected arguments) end the
    /// run immediately.
    pub fn run(
        &self,
        descriptors: &[CheckDescriptor],
        reporter: &mut dyn Reporter,
    ) -> Result<DoctorSummary> {
        let mut summary = DoctorSummary::default();

        for descriptor in descriptors {
            let result = self.dispatcher.run(descriptor, reporter)?;
            reporter.report(&result);

            let failed = result.is_error();
            if failed {
                reporter.notify_skip_hint(&self.dispatcher.skips().skip_command(descriptor));
            }
            summary.record(descriptor, result);

            if failed && self.policy == ErrorPolicy::Halt {
                info!("Halting after failed check {}", descriptor);
                summary.halted = true;
                break;
            }
        }

        info!(
            "Checks finished: {} passed, {} skipped, {} warned, {} failed",
            summary.passed, summary.skipped, summary.warned, summary.failed
        );
        Ok(summary)
    }
}
