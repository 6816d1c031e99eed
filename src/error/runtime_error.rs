use crate::interpreter::token::{Operator, Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during postfix evaluation.
pub enum RuntimeError {
    /// An operation needed more operands than the stack held.
    StackUnderflow {
        /// The token whose operands were missing.
        operation: Token,
    },
    /// Evaluation finished with other than exactly one value on the stack.
    UnbalancedExpression {
        /// The number of values left on the stack.
        remaining: usize,
    },
    /// A structural operator reached the evaluator.
    ///
    /// Parentheses and commas only have meaning in infix notation.
    UnhandledOperator {
        /// The operator encountered.
        operator: Operator,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { operation } => {
                write!(f, "Stack underflow: not enough operands for '{operation}'.")
            },
            Self::UnbalancedExpression { remaining: 0 } => {
                write!(f, "Unbalanced expression: no value was produced.")
            },
            Self::UnbalancedExpression { remaining } => write!(f,
                                                               "Unbalanced expression: {remaining} values left on the stack, expected 1."),
            Self::UnhandledOperator { operator } => {
                write!(f, "Operator '{operator}' cannot be evaluated in postfix notation.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
