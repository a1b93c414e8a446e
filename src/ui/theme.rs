//! Visual theme and styling.

use console::Style;

use crate::probe::ServiceStatus;

/// phpdev's visual theme.
#[derive(Debug, Clone)]
pub struct DevTheme {
    /// Style for success messages and running services (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages and stopped services (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (blue bold).
    pub header: Style,
    /// Style for section titles (bold).
    pub section: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for DevTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DevTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().blue(),
            section: Style::new().bold(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            section: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a section title.
    pub fn format_section(&self, title: &str) -> String {
        format!("{}", self.section.apply_to(title))
    }

    /// Format a service status badge.
    pub fn format_status(&self, status: ServiceStatus) -> String {
        match status {
            ServiceStatus::Running => format!("{}", self.success.apply_to(format!("● {}", status))),
            ServiceStatus::NotRunning => format!("{}", self.error.apply_to(format!("○ {}", status))),
        }
    }

    /// Format a key/value line.
    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }

    /// Format an absent value.
    pub fn format_missing(&self, text: &str) -> String {
        format!("{}", self.dim.apply_to(text))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_status_badges() {
        let theme = DevTheme::plain();

        assert_eq!(theme.format_status(ServiceStatus::Running), "● Running");
        assert_eq!(theme.format_status(ServiceStatus::NotRunning), "○ Not running");
    }

    #[test]
    fn plain_messages_keep_icons() {
        let theme = DevTheme::plain();

        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
        assert_eq!(theme.format_error("broken"), "✗ broken");
    }

    #[test]
    fn key_value_layout() {
        let theme = DevTheme::plain();

        assert_eq!(
            theme.format_key_value("ROOTFOLDER", "/sites"),
            "ROOTFOLDER: /sites"
        );
    }

    #[test]
    fn default_theme_is_styled() {
        let theme = DevTheme::new();
        let styled = theme.success.clone().force_styling(true);

        assert_ne!(styled.apply_to("x").to_string(), "x");
    }
}
