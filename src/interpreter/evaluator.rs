/// Core evaluation loop.
///
/// Dispatches each postfix token to the operand stack and checks that
/// exactly one value remains at the end.
pub mod core;

/// The operand stack.
///
/// A plain last-in, first-out stack of `f64` values that reports underflow
/// as a runtime error instead of panicking.
pub mod stack;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*`, `/`, `%` and `^` over two popped operands.
pub mod binary;

/// Unary operator evaluation.
///
/// Applies single-operand operations such as negation to the top of the
/// stack.
pub mod unary;

/// Function evaluation.
///
/// Maps every catalog function to its `f64` implementation.
pub mod function;
