use std::iter;

use crate::interpreter::{
    parser::{core::ParseResult, state::ParserState, unary::parse_unary},
    token::{Operator, Token},
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(state: &mut ParserState<'_>) -> ParseResult<()> {
    parse_multiplicative(state)?;
    while let Some(operator) = state.operator_in(&[Operator::Add, Operator::Sub]) {
        state.advance_expecting_more()?;
        parse_multiplicative(state)?;
        state.emit(operator);
    }
    Ok(())
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative(state: &mut ParserState<'_>) -> ParseResult<()> {
    parse_exponent(state)?;
    while let Some(operator) = state.operator_in(&[Operator::Mul, Operator::Div, Operator::Mod]) {
        state.advance_expecting_more()?;
        parse_exponent(state)?;
        state.emit(operator);
    }
    Ok(())
}

/// Parses exponentiation expressions.
///
/// The operands of a `^` chain are emitted left to right, followed by one `^`
/// per occurrence. Evaluating `a b c ^ ^` computes `b ^ c` first, so the chain
/// groups to the right: `a ^ b ^ c` is `a ^ (b ^ c)`.
///
/// The rule is: `exponent := unary ("^" unary)*`
pub fn parse_exponent(state: &mut ParserState<'_>) -> ParseResult<()> {
    parse_unary(state)?;
    let mut count = 0;
    while state.is_operator(Operator::Pow) {
        state.advance_expecting_more()?;
        parse_unary(state)?;
        count += 1;
    }
    for token in iter::repeat_n(Token::Operator(Operator::Pow), count) {
        state.emit(token);
    }
    Ok(())
}
