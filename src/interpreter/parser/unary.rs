use crate::{
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            state::ParserState,
        },
        token::{Function, Operator, Token},
    },
};

/// Parses a unary expression.
///
/// Supports one optional prefix sign:
/// - `+`  is consumed and dropped
/// - `-`  emits [`Operator::Negate`] after the operand
///
/// The sign applies to the primary expression only, so `-2 ^ 2` is
/// `(-2) ^ 2` and `--2` is rejected.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-")? primary
/// ```
pub(crate) fn parse_unary(state: &mut ParserState<'_>) -> ParseResult<()> {
    let negate = if state.is_operator(Operator::Sub) {
        state.advance_expecting_more()?;
        true
    } else {
        if state.is_operator(Operator::Add) {
            state.advance_expecting_more()?;
        }
        false
    };

    parse_primary(state)?;

    if negate {
        state.emit(Operator::Negate);
    }
    Ok(())
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | constant
///              | function "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Errors
/// - [`ParseError::UnexpectedOperator`] if the current token cannot start an
///   operand, such as a stray `)` or `,`.
/// - [`ParseError::UnmatchedParenthesis`] if a group is not closed.
/// - [`ParseError::UnexpectedEndOfInput`] if the input is exhausted.
pub(crate) fn parse_primary(state: &mut ParserState<'_>) -> ParseResult<()> {
    match state.current() {
        Some(token @ (Token::Value(_) | Token::Constant(_))) => {
            state.emit(token);
            state.advance();
            Ok(())
        },
        Some(Token::Function(function)) => parse_function_call(state, function),
        Some(Token::Operator(Operator::LeftParen)) => parse_grouping(state),
        Some(Token::Operator(operator)) => Err(ParseError::UnexpectedOperator { operator }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression.
///
/// The parentheses only group; neither is emitted.
fn parse_grouping(state: &mut ParserState<'_>) -> ParseResult<()> {
    state.advance_expecting_more()?;
    parse_expression(state)?;
    if !state.is_operator(Operator::RightParen) {
        return Err(ParseError::UnmatchedParenthesis);
    }
    state.advance();
    Ok(())
}

/// Parses a function call.
///
/// Each argument is a full expression; arguments are separated by commas.
/// The function token is emitted after all of its arguments.
///
/// Grammar:
/// ```text
///     call := function "(" (expression ","?)* ")"
/// ```
/// # Errors
/// - [`ParseError::MissingOpenParenAfterFunction`] if `(` does not follow the
///   name.
/// - [`ParseError::MissingArgumentAfterComma`] for `,` directly followed by
///   `)`.
fn parse_function_call(state: &mut ParserState<'_>, function: Function) -> ParseResult<()> {
    state.advance();
    if !state.is_operator(Operator::LeftParen) {
        return Err(ParseError::MissingOpenParenAfterFunction { function });
    }
    state.advance_expecting_more()?;

    while !state.is_operator(Operator::RightParen) {
        parse_expression(state)?;
        if state.is_operator(Operator::Comma) {
            state.advance_expecting_more()?;
            if state.is_operator(Operator::RightParen) {
                return Err(ParseError::MissingArgumentAfterComma { function });
            }
        }
    }

    state.advance();
    state.emit(function);
    Ok(())
}
