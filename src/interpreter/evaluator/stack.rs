use log::trace;

use crate::{error::RuntimeError, interpreter::token::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the operands of one postfix evaluation.
///
/// A stack is created fresh for every evaluation and dropped with it; nothing
/// is shared between evaluations.
#[derive(Debug, Default)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: f64) {
        trace!("push {value}");
        self.values.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Parameters
    /// - `operation`: The token that needs the value, for error reporting.
    ///
    /// # Errors
    /// Returns [`RuntimeError::StackUnderflow`] if the stack is empty.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     error::RuntimeError,
    ///     interpreter::{
    ///         evaluator::stack::Stack,
    ///         token::{Operator, Token},
    ///     },
    /// };
    ///
    /// let add = Token::Operator(Operator::Add);
    /// let mut stack = Stack::new();
    /// stack.push(1.0);
    /// stack.push(2.0);
    /// assert_eq!(stack.pop(add), Ok(2.0));
    /// assert_eq!(stack.pop(add), Ok(1.0));
    /// assert_eq!(stack.pop(add), Err(RuntimeError::StackUnderflow { operation: add }));
    /// ```
    pub fn pop(&mut self, operation: Token) -> EvalResult<f64> {
        let value = self.values
                        .pop()
                        .ok_or(RuntimeError::StackUnderflow { operation })?;
        trace!("pop {value} for {operation}");
        Ok(value)
    }

    /// Consumes the stack and returns its only value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnbalancedExpression`] unless exactly one value
    /// remains.
    pub fn into_result(self) -> EvalResult<f64> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(RuntimeError::UnbalancedExpression { remaining: values.len() }),
        }
    }
}
