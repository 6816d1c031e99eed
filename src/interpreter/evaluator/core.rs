use log::debug;

use crate::interpreter::{
    evaluator::stack::{EvalResult, Stack},
    token::{Operator, Token},
};

/// Evaluates a postfix token sequence.
///
/// Tokens are processed strictly left to right against a fresh operand
/// stack:
/// - values and constants are pushed,
/// - binary operators pop their right operand, then their left operand, and
///   push the result,
/// - `Negate` and functions replace the top value.
///
/// Exactly one value must remain at the end; it is the result.
///
/// # Errors
/// - [`RuntimeError::StackUnderflow`] if an operation finds too few operands.
/// - [`RuntimeError::UnbalancedExpression`] if zero or several values remain.
/// - [`RuntimeError::UnhandledOperator`] for `(`, `)` or `,`.
///
/// [`RuntimeError::StackUnderflow`]: crate::error::RuntimeError::StackUnderflow
/// [`RuntimeError::UnbalancedExpression`]: crate::error::RuntimeError::UnbalancedExpression
/// [`RuntimeError::UnhandledOperator`]: crate::error::RuntimeError::UnhandledOperator
///
/// # Example
/// ```
/// use calc::interpreter::{
///     evaluator::core::evaluate,
///     token::{Operator, Token},
/// };
///
/// // 2 3 ^  =>  8
/// let tokens = [Token::Value(2.0), Token::Value(3.0), Token::Operator(Operator::Pow)];
/// assert_eq!(evaluate(&tokens).unwrap(), 8.0);
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack = Stack::new();
    for &token in tokens {
        stack.apply(token)?;
    }
    let result = stack.into_result()?;
    debug!("evaluated {} postfix tokens to {result}", tokens.len());
    Ok(result)
}

impl Stack {
    /// Applies one postfix token to the stack.
    ///
    /// # Errors
    /// Propagates the errors of the individual operations.
    pub fn apply(&mut self, token: Token) -> EvalResult<()> {
        match token {
            Token::Value(value) => {
                self.push(value);
                Ok(())
            },
            Token::Constant(constant) => {
                self.push(constant.value());
                Ok(())
            },
            Token::Operator(Operator::Negate) => self.apply_unary(token, |x| -x),
            Token::Operator(operator) => self.apply_binary(operator),
            Token::Function(function) => self.apply_unary(token, function.operation()),
        }
    }
}
