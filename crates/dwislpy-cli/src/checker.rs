//! Project checker.
//!
//! Pipeline: Source → Lexer → Parser → AST → Semantic

use crate::pipeline;
use crate::utils::{print_project_status, print_status};
use anyhow::{Context, Result};
use dwislpy_utils::{CONFIG_FILE, Config};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Checker for a DWISLPY project.
pub struct Checker {
    project_root: PathBuf,
    config: Config,
}

impl Checker {
    /// Creates a checker for the given project.
    ///
    /// # Errors
    /// Returns an error if the project configuration cannot be loaded.
    pub fn new(project_root: PathBuf) -> Result<Self> {
        let config = Config::load(project_root.join(CONFIG_FILE))?;
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Checks the project's entry script.
    ///
    /// # Errors
    /// Returns an error if the script cannot be read or contains errors.
    pub fn check(&self) -> Result<Duration> {
        let start = Instant::now();

        print_project_status("Checking", &self.config, &self.project_root);

        let entry = self.config.entry_path(&self.project_root);
        run_pipeline(&entry)?;

        let duration = start.elapsed();
        print_check_success(duration);

        Ok(duration)
    }

    /// Returns the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the loaded project configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Checks a single script outside of any project.
///
/// # Errors
/// Returns an error if the script cannot be read or contains errors.
pub fn check_file(path: &Path) -> Result<Duration> {
    let start = Instant::now();

    print_status("Checking", &path.display().to_string());
    run_pipeline(path)?;

    let duration = start.elapsed();
    print_check_success(duration);

    Ok(duration)
}

fn run_pipeline(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read script");

    pipeline::check_pipeline(&source, &path.display().to_string())
}

fn print_check_success(duration: Duration) {
    use colored::Colorize;
    println!(
        "    {} script checked successfully in {:.2}s",
        "Finished".green().bold(),
        duration.as_secs_f64()
    );
}
