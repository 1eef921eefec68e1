//! Terminal output for the CLI

/// Interface for user-facing output
///
/// Abstracted so use cases can be tested without capturing stdout.
pub trait UserInteraction: Send + Sync {
    /// Prints a message to the user
    fn print(&self, message: &str);

    /// Prints a diagnostic or error message to the user
    fn print_error(&self, message: &str);
}

pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInteraction for TerminalInteraction {
    fn print(&self, message: &str) {
        println!("{message}");
    }

    fn print_error(&self, message: &str) {
        eprintln!("{message}");
    }
}
