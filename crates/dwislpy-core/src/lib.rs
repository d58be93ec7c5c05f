//! Core types and utilities for the DWISLPY front end.
//!
//! This crate provides source spans, the value-type lattice, and the error
//! type shared by the lexer, parser and semantic checker.

pub mod error;
pub mod span;
pub mod types;

pub use error::{Error, ErrorKind, Result, SemanticError};
pub use span::{LineIndex, Location, Span};
pub use types::Type;
