//! Reporting of check progress and outcomes.
//!
//! This module provides:
//! - [`Reporter`] trait, the sink the dispatcher and checklist runner report to
//! - [`TerminalReporter`] for styled terminal output
//! - [`MockReporter`] for capturing events in tests
//!
//! # Example
//!
//! ```
//! use medic::check::{Arguments, CheckResult};
//! use medic::report::{MockReporter, ReportEvent, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.notify_progress("git", "installed", &Arguments::none());
//! reporter.report(&CheckResult::Ok);
//!
//! assert_eq!(reporter.progress_count(), 1);
//! assert_eq!(reporter.events().last(), Some(&ReportEvent::Ok));
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockReporter, ReportEvent};
pub use terminal::TerminalReporter;
pub use theme::{should_use_colors, MedicTheme};

use crate::check::{Arguments, CheckResult};

/// Sink for check progress and outcomes.
///
/// Purely side-effecting: implementations decide how (or whether) events
/// are displayed.
pub trait Reporter {
    /// A check is about to be evaluated.
    fn notify_progress(&mut self, category: &str, description: &str, details: &Arguments);

    /// The check passed.
    fn notify_ok(&mut self);

    /// The check was bypassed by a skip marker.
    fn notify_skipped(&mut self);

    /// The check produced a warning.
    fn notify_warn(&mut self, output: &str);

    /// The check failed.
    fn notify_failed(&mut self, output: &str, remedy: &str);

    /// How to skip the check that just failed.
    fn notify_skip_hint(&mut self, _command: &str) {}

    /// Render a final result through the matching `notify_*` method.
    fn report(&mut self, result: &CheckResult) {
        match result {
            CheckResult::Ok => self.notify_ok(),
            CheckResult::Skipped => self.notify_skipped(),
            CheckResult::Warn { output } => self.notify_warn(output),
            CheckResult::Error { output, remedy } => self.notify_failed(output, remedy),
        }
    }
}
