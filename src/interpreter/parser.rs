/// Entry point of infix-to-postfix conversion.
///
/// Starts the recursive descent at the lowest precedence level and checks
/// that the whole token sequence was consumed.
pub mod core;

/// Binary operator precedence levels.
///
/// Handles additive, multiplicative, and exponentiation levels, emitting each
/// operator after both of its operands.
pub mod binary;

/// Unary sign, primary expressions, and function calls.
///
/// Handles leading `+`/`-`, literals, constants, parenthesized groups, and
/// `function(arguments)` syntax.
pub mod unary;

/// Cursor and output accumulator threaded through the parse.
pub mod state;
