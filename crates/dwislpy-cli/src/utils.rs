//! Utility functions and constants shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use dwislpy_utils::Config;
use std::path::{Path, PathBuf};

/// Template for the entry script of new projects.
pub const MAIN_TEMPLATE: &str = r#"def greet(name: str) -> None:
    print("Hello, " + name + "!")
    return

greet("DWISLPY")
"#;

/// Finds the DWISLPY project root and config.
///
/// # Errors
/// Returns an error if not in a DWISLPY project directory.
pub fn find_project() -> Result<(Config, PathBuf)> {
    Config::find().with_context(|| "Not in a DWISLPY project directory")
}

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Prints a status message with project info.
pub fn print_project_status(status: &str, config: &Config, path: &Path) {
    println!(
        "{} {} v{} ({})",
        status.green().bold(),
        config.package.name,
        config.package.version,
        path.display()
    );
}
