//! Shared project utilities for the DWISLPY tools.

mod config;

pub use config::{CONFIG_FILE, CheckSettings, Config, DEFAULT_ENTRY, Package};
