//! Control flow statement checking (if, while).

use crate::checker::core::TypeChecker;
use crate::flow::ReturnFlow;
use dwislpy_core::{Result, Span};
use dwislpy_parser::ast::{Block, Expression};

impl TypeChecker<'_> {
    /// Checks an `if` statement and merges the flows of its arms.
    ///
    /// A missing `else` arm never returns.
    pub(crate) fn check_if(
        &mut self,
        condition: &Expression,
        then_block: &Block,
        else_block: Option<&Block>,
        span: Span,
    ) -> Result<ReturnFlow> {
        self.check_bool_condition(condition, "if")?;

        let then_flow = self.check_block(then_block)?;
        let else_flow = match else_block {
            Some(block) => self.check_block(block)?,
            None => ReturnFlow::Never,
        };

        then_flow
            .branch(else_flow)
            .map_err(|conflict| self.flow_conflict_error(conflict, span))
    }

    /// Checks a `while` loop. The body may run zero times.
    pub(crate) fn check_while(&mut self, condition: &Expression, body: &Block) -> Result<ReturnFlow> {
        self.check_bool_condition(condition, "while")?;

        let body_flow = self.check_block(body)?;
        Ok(body_flow.repeat())
    }
}
