//! Implementation of the `dwislpy new` command.

use dwislpy_cli::utils::{MAIN_TEMPLATE, print_status};
use anyhow::{Context, Result};
use dwislpy_utils::{CONFIG_FILE, Config};
use std::fs;
use std::path::Path;

/// Executes the `new` command to create a new DWISLPY project.
///
/// # Errors
/// Returns an error if the project directory already exists or if files cannot be created.
pub fn execute(name: &str) -> Result<()> {
    let project_dir = Path::new(name);

    if project_dir.exists() {
        anyhow::bail!("Directory '{name}' already exists");
    }

    create_project_structure(project_dir, name)?;

    print_status("Created", &format!("DWISLPY project '{name}'"));
    println!();
    println!("To get started:");
    println!("  cd {name}");
    println!("  dwislpy check");

    Ok(())
}

/// Creates the project directory structure.
fn create_project_structure(project_dir: &Path, name: &str) -> Result<()> {
    let config = Config::new(name);
    let entry = config.entry_path(project_dir);

    if let Some(parent) = entry.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    config.save(project_dir.join(CONFIG_FILE))?;

    fs::write(&entry, MAIN_TEMPLATE)
        .with_context(|| format!("Failed to create {}", entry.display()))?;

    Ok(())
}
