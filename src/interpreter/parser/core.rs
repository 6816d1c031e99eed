use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        parser::{binary::parse_additive, state::ParserState},
        token::Token,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix token sequence into postfix order.
///
/// Operators are emitted after their operands, respecting precedence and
/// associativity. Parentheses and commas are structural and never appear in
/// the output. Unary minus becomes an [`Operator::Negate`] placed after its
/// operand; unary plus is dropped.
///
/// [`Operator::Negate`]: crate::interpreter::token::Operator::Negate
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] for empty or incomplete input.
/// - [`ParseError::TrailingInput`] when tokens remain after a complete
///   expression.
/// - Any error of the grammar rules, such as
///   [`ParseError::UnmatchedParenthesis`].
///
/// # Example
/// ```
/// use calc::interpreter::{
///     lexer::tokenize,
///     parser::core::to_postfix,
///     token::{Operator, Token},
/// };
///
/// let postfix = to_postfix(&tokenize("-3 + 4").unwrap()).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Value(3.0),
///                 Token::Operator(Operator::Negate),
///                 Token::Value(4.0),
///                 Token::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut state = ParserState::new(tokens);
    state.advance_expecting_more()?;
    parse_expression(&mut state)?;

    if let Some(token) = state.current() {
        return Err(ParseError::TrailingInput { token });
    }

    let output = state.into_output();
    debug!("converted {} infix tokens into {} postfix tokens", tokens.len(), output.len());
    Ok(output)
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level, addition, and recursively descends
/// through the precedence hierarchy. Also used for every parenthesized group
/// and every function argument.
///
/// Grammar: `expression := additive`
pub fn parse_expression(state: &mut ParserState<'_>) -> ParseResult<()> {
    parse_additive(state)
}
