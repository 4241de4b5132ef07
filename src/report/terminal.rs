//! Terminal reporter.

use std::io::{self, Write};

use super::icons::StatusKind;
use super::theme::MedicTheme;
use super::Reporter;
use crate::check::Arguments;

/// Writes check progress and outcomes as styled lines.
///
/// The progress line is left open so the outcome lands on the same line:
///
/// ```text
/// • homebrew: bundled packages installed … ✓ ok
/// • tool: installed (jq) … ✗ failed
///   jq: No such file or directory (os error 2)
///   Remedy: brew install jq
/// ```
///
/// Write errors are ignored; reporting never interrupts a run.
pub struct TerminalReporter<W: Write> {
    out: W,
    theme: MedicTheme,
}

impl TerminalReporter<io::Stdout> {
    /// Report to stdout, colored when the terminal supports it.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), MedicTheme::detect())
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W, theme: MedicTheme) -> Self {
        Self { out, theme }
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn indented(&mut self, text: &str) {
        for line in text.lines() {
            let _ = writeln!(self.out, "  {}", line);
        }
    }

    fn status(&mut self, kind: StatusKind) {
        let _ = writeln!(self.out, "{}", kind.styled(&self.theme));
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn notify_progress(&mut self, category: &str, description: &str, details: &Arguments) {
        let mut line = self
            .theme
            .info
            .apply_to(StatusKind::Running.icon())
            .to_string();
        line.push(' ');
        if !category.is_empty() {
            line.push_str(&format!("{}: ", self.theme.category.apply_to(category)));
        }
        line.push_str(description);
        if !details.is_empty() {
            line.push_str(&format!(" {}", self.theme.dim.apply_to(format!("({})", details))));
        }
        let _ = write!(self.out, "{} … ", line);
        let _ = self.out.flush();
    }

    fn notify_ok(&mut self) {
        self.status(StatusKind::Success);
    }

    fn notify_skipped(&mut self) {
        self.status(StatusKind::Skipped);
    }

    fn notify_warn(&mut self, output: &str) {
        self.status(StatusKind::Warning);
        self.indented(output);
    }

    fn notify_failed(&mut self, output: &str, remedy: &str) {
        self.status(StatusKind::Failed);
        self.indented(output);
        if !remedy.is_empty() {
            let _ = writeln!(
                self.out,
                "  Remedy: {}",
                self.theme.command.apply_to(remedy)
            );
        }
    }

    fn notify_skip_hint(&mut self, command: &str) {
        let _ = writeln!(self.out, "  Skip: {}", self.theme.command.apply_to(command));
    }
}
