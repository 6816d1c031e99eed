use crate::interpreter::{
    evaluator::stack::{EvalResult, Stack},
    token::Token,
};

/// Signature shared by all single-operand operations.
pub type UnaryFn = fn(f64) -> f64;

impl Stack {
    /// Replaces the top value with `operation(value)`.
    ///
    /// Used for `Negate` and for every catalog function.
    ///
    /// # Parameters
    /// - `token`: The token being applied, for error reporting.
    /// - `operation`: The operation to apply.
    ///
    /// # Errors
    /// Returns [`RuntimeError::StackUnderflow`] if the stack is empty.
    ///
    /// [`RuntimeError::StackUnderflow`]: crate::error::RuntimeError::StackUnderflow
    pub fn apply_unary(&mut self, token: Token, operation: UnaryFn) -> EvalResult<()> {
        let value = self.pop(token)?;
        self.push(operation(value));
        Ok(())
    }
}
