//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for tests
//! - Theme and table rendering
//!
//! # Example
//!
//! ```
//! use phpdev::ui::{MockUI, Table, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut table = Table::new(&["Service", "Status"]);
//! table.add_row(["NginX", "Running"]);
//! ui.show_table(&table);
//! assert!(ui.has_message("NginX"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DevTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Theme used to style cells before they are handed back for display.
    fn theme(&self) -> &DevTheme;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Write machine-readable output (JSON, YAML). Shown in every mode.
    fn print_data(&mut self, data: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a section title followed by a blank line.
    fn show_section(&mut self, title: &str) {
        let title = self.theme().format_section(title);
        self.message("");
        self.message(&title);
    }

    /// Show a rendered table.
    fn show_table(&mut self, table: &Table) {
        self.message(&table.render());
    }
}
