//! Parsing implementation modules.

mod definitions;
mod expressions;
mod parser;
mod primary;
mod statements;
mod types;

pub use parser::Parser;
