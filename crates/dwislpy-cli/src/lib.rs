//! DWISLPY CLI library for testing and reusability.

pub mod checker;
pub mod pipeline;
pub mod utils;

pub use checker::Checker;
pub use dwislpy_utils::Config;
