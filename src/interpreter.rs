/// The evaluator module executes postfix token sequences.
///
/// The evaluator walks a postfix sequence left to right against an operand
/// stack, applying operators, functions, and constants, and produces the final
/// number. It is the last stage of a calculation.
///
/// # Responsibilities
/// - Pushes operands and applies operators and functions in postfix order.
/// - Reports stack underflow and leftover operands as runtime errors.
/// - Rejects structural tokens that have no meaning in postfix notation.
pub mod evaluator;
/// The lexer module tokenizes source text for further processing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens: numeric literals, operators, punctuation, and catalog functions and
/// constants. This is the first stage of a calculation in either notation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Computes numeric literals, including nested exponents.
/// - Reports lexical errors for invalid characters, unknown names, and
///   dangling exponents.
pub mod lexer;
/// The parser module reorders infix tokens into postfix order.
///
/// The parser processes the token sequence produced by the lexer with a
/// precedence-climbing recursive descent and emits the equivalent postfix
/// sequence, so infix input can be evaluated by the same stack machine as
/// Reverse Polish input.
///
/// # Responsibilities
/// - Applies precedence and associativity of `+ - * / % ^`.
/// - Handles unary signs, parenthesized groups, and function calls.
/// - Validates grammar, reporting errors such as unmatched parentheses.
pub mod parser;
/// The token module defines the vocabulary shared by all stages.
///
/// This module declares the closed `Token` type together with the operator,
/// function, and constant catalogs, and the case-insensitive lookup used by
/// the lexer to resolve identifiers.
///
/// # Responsibilities
/// - Defines the `Token` enum and its operator, function, and constant kinds.
/// - Resolves identifiers against the catalog.
/// - Provides display names for error messages and logs.
pub mod token;
