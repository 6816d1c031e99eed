use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::stack::{EvalResult, Stack},
        token::{Operator, Token},
    },
};

/// Signature shared by all binary operations: `(left, right) -> result`.
pub type BinaryFn = fn(f64, f64) -> f64;

impl Stack {
    /// Pops two operands and pushes `left <operator> right`.
    ///
    /// The first value popped is the right operand, so `a b -` computes
    /// `a - b`.
    ///
    /// # Errors
    /// - [`RuntimeError::UnhandledOperator`] if `operator` is not binary.
    /// - [`RuntimeError::StackUnderflow`] if fewer than two values are
    ///   available.
    pub fn apply_binary(&mut self, operator: Operator) -> EvalResult<()> {
        let operation =
            binary_operation(operator).ok_or(RuntimeError::UnhandledOperator { operator })?;

        let right = self.pop(Token::Operator(operator))?;
        let left = self.pop(Token::Operator(operator))?;
        self.push(operation(left, right));
        Ok(())
    }
}

/// Maps an operator to its arithmetic, or `None` if it is not binary.
///
/// `%` is the floating-point remainder whose sign follows the dividend, and
/// `^` is real power; neither special-cases invalid domains, so results such
/// as `NaN` or infinities pass through unchanged.
///
/// # Example
/// ```
/// use calc::interpreter::{evaluator::binary::binary_operation, token::Operator};
///
/// let modulo = binary_operation(Operator::Mod).unwrap();
/// assert_eq!(modulo(-7.0, 3.0), -1.0);
///
/// let power = binary_operation(Operator::Pow).unwrap();
/// assert!(power(-8.0, 1.0 / 3.0).is_nan());
///
/// assert!(binary_operation(Operator::Comma).is_none());
/// ```
#[must_use]
pub fn binary_operation(operator: Operator) -> Option<BinaryFn> {
    match operator {
        Operator::Add => Some(|left, right| left + right),
        Operator::Sub => Some(|left, right| left - right),
        Operator::Mul => Some(|left, right| left * right),
        Operator::Div => Some(|left, right| left / right),
        Operator::Mod => Some(|left, right| left % right),
        Operator::Pow => Some(f64::powf),
        Operator::Negate | Operator::LeftParen | Operator::RightParen | Operator::Comma => None,
    }
}
