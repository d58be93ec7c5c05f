//! Implementation of the `dwislpy init` command.

use dwislpy_cli::utils::{MAIN_TEMPLATE, print_status};
use anyhow::{Context, Result};
use dwislpy_utils::{CONFIG_FILE, Config};
use std::fs;
use std::path::Path;

/// Executes the `init` command to initialize a DWISLPY project in the current directory.
///
/// # Errors
/// Returns an error if dwislpy.toml already exists or if files cannot be created.
pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

    if Path::new(CONFIG_FILE).exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in current directory");
    }

    let project_name = current_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dwislpy-project");

    let config = Config::new(project_name);
    config.save(CONFIG_FILE)?;

    // An existing entry script is left untouched.
    let entry = config.entry_path(Path::new("."));
    if !entry.exists() {
        if let Some(parent) = entry.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
        fs::write(&entry, MAIN_TEMPLATE)
            .with_context(|| format!("Failed to create {}", entry.display()))?;
    }

    print_status("Created", &format!("DWISLPY project '{project_name}'"));
    println!();
    println!("To get started:");
    println!("  dwislpy check");

    Ok(())
}
