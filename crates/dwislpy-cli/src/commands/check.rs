//! Implementation of the `dwislpy check` command.

use dwislpy_cli::checker::{Checker, check_file};
use dwislpy_cli::utils::find_project;
use anyhow::Result;
use std::path::Path;

/// Executes the `check` command.
///
/// With a file argument the file is checked on its own; otherwise the entry
/// script of the enclosing project is checked.
///
/// # Errors
/// Returns an error if the script cannot be read or does not pass checking.
pub fn execute(file: Option<&Path>) -> Result<()> {
    if let Some(path) = file {
        check_file(path)?;
        return Ok(());
    }

    let (_config, project_root) = find_project()?;
    let checker = Checker::new(project_root)?;
    checker.check()?;

    Ok(())
}
