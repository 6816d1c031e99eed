use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Operator, Token},
    },
};

/// Tracks the position of one infix-to-postfix conversion.
///
/// The cursor holds the current token, or `None` once the input is
/// exhausted. Tokens are consumed strictly left to right, exactly once.
/// Every parse owns its own state, so conversions are reentrant.
#[derive(Debug)]
pub struct ParserState<'a> {
    tokens:  &'a [Token],
    index:   usize,
    current: Option<Token>,
    output:  Vec<Token>,
}

impl<'a> ParserState<'a> {
    /// Creates a state positioned before the first token.
    ///
    /// Call [`advance`](Self::advance) or
    /// [`advance_expecting_more`](Self::advance_expecting_more) to load it.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               index: 0,
               current: None,
               output: Vec::with_capacity(tokens.len()) }
    }

    /// Moves the cursor to the next token, or to the exhausted state.
    pub fn advance(&mut self) {
        self.current = self.tokens.get(self.index).copied();
        if self.current.is_some() {
            self.index += 1;
        }
    }

    /// Moves the cursor and requires that a token is now available.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedEndOfInput`] if the input is exhausted.
    pub fn advance_expecting_more(&mut self) -> ParseResult<()> {
        self.advance();
        if self.is_exhausted() {
            return Err(ParseError::UnexpectedEndOfInput);
        }
        Ok(())
    }

    /// Returns the token under the cursor.
    #[must_use]
    pub const fn current(&self) -> Option<Token> {
        self.current
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Tests whether the current token is the given operator.
    #[must_use]
    pub fn is_operator(&self, operator: Operator) -> bool {
        self.current == Some(Token::Operator(operator))
    }

    /// Returns the current operator if it is one of `candidates`.
    #[must_use]
    pub fn operator_in(&self, candidates: &[Operator]) -> Option<Operator> {
        match self.current {
            Some(Token::Operator(operator)) if candidates.contains(&operator) => Some(operator),
            _ => None,
        }
    }

    /// Appends a token to the postfix output.
    pub fn emit(&mut self, token: impl Into<Token>) {
        self.output.push(token.into());
    }

    /// Consumes the state and returns the postfix output.
    #[must_use]
    pub fn into_output(self) -> Vec<Token> {
        self.output
    }
}
