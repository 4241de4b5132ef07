//! Status vocabulary for terminal output.

use super::theme::MedicTheme;
use crate::check::CheckResult;

/// Status kinds shown next to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Check was skipped.
    Skipped,
    /// Check is running.
    Running,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Running => "•",
            Self::Warning => "⚠",
        }
    }

    /// Short label shown after the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Running => "checking",
            Self::Warning => "warning",
        }
    }

    /// Styled icon and label using the given theme.
    pub fn styled(self, theme: &MedicTheme) -> String {
        let text = format!("{} {}", self.icon(), self.label());
        match self {
            Self::Success => theme.success.apply_to(text).to_string(),
            Self::Failed => theme.error.apply_to(text).to_string(),
            Self::Skipped => theme.dim.apply_to(text).to_string(),
            Self::Running => theme.info.apply_to(text).to_string(),
            Self::Warning => theme.warning.apply_to(text).to_string(),
        }
    }
}

impl From<&CheckResult> for StatusKind {
    fn from(result: &CheckResult) -> Self {
        match result {
            CheckResult::Ok => Self::Success,
            CheckResult::Skipped => Self::Skipped,
            CheckResult::Warn { .. } => Self::Warning,
            CheckResult::Error { .. } => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Skipped.icon(), "○");
        assert_eq!(StatusKind::Running.icon(), "•");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn styled_plain_is_icon_and_label() {
        let theme = MedicTheme::plain();
        assert_eq!(StatusKind::Failed.styled(&theme), "✗ failed");
        assert_eq!(StatusKind::Skipped.styled(&theme), "○ skipped");
    }

    #[test]
    fn from_check_result() {
        assert_eq!(StatusKind::from(&CheckResult::Ok), StatusKind::Success);
        assert_eq!(StatusKind::from(&CheckResult::Skipped), StatusKind::Skipped);
        assert_eq!(
            StatusKind::from(&CheckResult::warn("w")),
            StatusKind::Warning
        );
        assert_eq!(
            StatusKind::from(&CheckResult::error("e", "r")),
            StatusKind::Failed
        );
    }
}
