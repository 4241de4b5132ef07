//! Mock reporter for testing.
//!
//! `MockReporter` implements [`Reporter`] and records every event in order
//! for later assertion.

use super::Reporter;
use crate::check::Arguments;

/// An event captured by [`MockReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Progress {
        category: String,
        description: String,
        details: Arguments,
    },
    Ok,
    Skipped,
    Warn(String),
    Failed {
        output: String,
        remedy: String,
    },
    SkipHint(String),
}

/// Reporter that captures all events.
#[derive(Debug, Default)]
pub struct MockReporter {
    events: Vec<ReportEvent>,
}

impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured events, in order.
    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// Number of progress notifications received.
    pub fn progress_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ReportEvent::Progress { .. }))
            .count()
    }

    /// Skip hints received, in order.
    pub fn skip_hints(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::SkipHint(command) => Some(command.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget all captured events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Reporter for MockReporter {
    fn notify_progress(&mut self, category: &str, description: &str, details: &Arguments) {
        self.events.push(ReportEvent::Progress {
            category: category.to_string(),
            description: description.to_string(),
            details: details.clone(),
        });
    }

    fn notify_ok(&mut self) {
        self.events.push(ReportEvent::Ok);
    }

    fn notify_skipped(&mut self) {
        self.events.push(ReportEvent::Skipped);
    }

    fn notify_warn(&mut self, output: &str) {
        self.events.push(ReportEvent::Warn(output.to_string()));
    }

    fn notify_failed(&mut self, output: &str, remedy: &str) {
        self.events.push(ReportEvent::Failed {
            output: output.to_string(),
            remedy: remedy.to_string(),
        });
    }

    fn notify_skip_hint(&mut self, command: &str) {
        self.events.push(ReportEvent::SkipHint(command.to_string()));
    }
}
