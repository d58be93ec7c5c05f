//! Command implementations for the DWISLPY CLI.

pub mod check;
pub mod init;
pub mod new;
