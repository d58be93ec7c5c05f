//! Type annotation parsing.

use super::parser::Parser;
use dwislpy_core::{Result, Type};

impl<'a> Parser<'a> {
    /// Parses a type annotation: `int`, `str`, `bool` or `None`.
    pub(crate) fn parse_type(&mut self) -> Result<Type> {
        let ty = Type::from_name(&self.peek().0.text).ok_or_else(|| self.unexpected("type"))?;
        self.advance();
        Ok(ty)
    }
}
