//! Visual theme and styling.

use console::Style;

/// Medic's visual theme.
#[derive(Debug, Clone)]
pub struct MedicTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failures (red bold).
    pub error: Style,
    /// Style for the check currently running (magenta).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for check categories (bold).
    pub category: Style,
    /// Style for remedies and skip commands (dim italic).
    pub command: Style,
}

impl Default for MedicTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            category: Style::new().bold(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            category: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick [`new`](Self::new) or [`plain`](Self::plain) from the environment.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
