use std::{iter::Peekable, str::Chars};

use log::{debug, trace};
use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::token::{Operator, Token, resolve_identifier},
};

/// Represents a raw lexeme recognized in the source text.
///
/// Lexemes are internal to the tokenizer; [`tokenize`] turns each one into a
/// [`Token`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
enum Lexeme {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    ///
    /// The exponent of a literal is itself a literal, so `1e1e1` is `1e10`.
    #[regex(r"[0-9.]+([eE][+-]?[0-9.]*)*", scan_number)]
    Number(f64),
    /// Function and constant names, resolved against the catalog.
    #[regex(r"[a-zA-Z_][a-zA-Z]*", resolve)]
    Identifier(Token),
    /// Operators and punctuation.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Mod)]
    #[token("^", |_| Operator::Pow)]
    #[token("(", |_| Operator::LeftParen)]
    #[token(")", |_| Operator::RightParen)]
    #[token(",", |_| Operator::Comma)]
    Operator(Operator),
    /// Whitespace between tokens.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Failure raised from inside a lexeme callback.
#[derive(Debug, Clone, PartialEq, Default)]
enum LexError {
    /// No lexeme matches the current character.
    #[default]
    Unrecognized,
    /// The text ended right after an exponent marker or exponent sign.
    DanglingExponent,
    /// An identifier is not in the catalog.
    UnknownIdentifier(String),
}

/// Converts source text into a token sequence.
///
/// Whitespace between tokens is skipped. Identifiers are matched against the
/// function and constant catalogs ignoring case. Nothing is returned on
/// failure; the first error ends tokenizing.
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] for a character that starts no token.
/// - [`ParseError::UnknownIdentifier`] for a name outside the catalog.
/// - [`ParseError::UnexpectedEndOfInput`] when the text ends with an exponent
///   marker or exponent sign.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     lexer::tokenize,
///     token::{Constant, Function, Operator, Token},
/// };
///
/// let tokens = tokenize("2 * sin(PI)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Value(2.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Function(Function::Sin),
///                 Token::Operator(Operator::LeftParen),
///                 Token::Constant(Constant::Pi),
///                 Token::Operator(Operator::RightParen)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Number(value)) => Token::Value(value),
            Ok(Lexeme::Identifier(token)) => token,
            Ok(Lexeme::Operator(operator)) => Token::Operator(operator),
            Ok(Lexeme::Ignored) => continue,
            Err(error) => {
                let position = source[..lexer.span().start].chars().count();
                return Err(match error {
                               LexError::Unrecognized => {
                                   let character = lexer.slice().chars().next().unwrap_or('\0');
                                   ParseError::UnexpectedCharacter { character, position }
                               },
                               LexError::DanglingExponent => ParseError::UnexpectedEndOfInput,
                               LexError::UnknownIdentifier(name) => {
                                   ParseError::UnknownIdentifier { name, position }
                               },
                           });
            },
        };
        trace!("token {token:?}");
        tokens.push(token);
    }

    debug!("tokenized {} characters into {} tokens", source.chars().count(), tokens.len());
    Ok(tokens)
}

/// Resolves the current identifier slice against the catalog.
fn resolve(lex: &logos::Lexer<Lexeme>) -> Result<Token, LexError> {
    let name = lex.slice();
    resolve_identifier(name).ok_or_else(|| LexError::UnknownIdentifier(name.to_string()))
}

/// Computes the value of the current numeric literal slice.
///
/// A dangling exponent is only an error when the literal is the last thing in
/// the source; otherwise the missing exponent counts as zero.
fn scan_number(lex: &logos::Lexer<Lexeme>) -> Result<f64, LexError> {
    let at_source_end = lex.span().end == lex.source().len();
    LiteralScanner { chars: lex.slice().chars().peekable(),
                     at_source_end }.scan()
}

/// Accumulates a numeric literal one digit at a time.
struct LiteralScanner<'s> {
    chars:         Peekable<Chars<'s>>,
    /// Whether running out of characters also means running out of input.
    at_source_end: bool,
}

impl LiteralScanner<'_> {
    /// Scans one literal, recursing for the exponent.
    ///
    /// Digits before the decimal point accumulate as `value * 10 + digit`,
    /// digits after it with a weight starting at `0.1` that shrinks tenfold
    /// per digit. A literal without digits is worth zero.
    fn scan(&mut self) -> Result<f64, LexError> {
        let mut value = 0.0;
        let mut weight = 0.1;
        let mut fraction = false;

        while let Some(&c) = self.chars.peek() {
            match c {
                '.' => fraction = true,
                '0'..='9' => {
                    let digit = f64::from(u32::from(c) - u32::from('0'));
                    if fraction {
                        value += digit * weight;
                        weight /= 10.0;
                    } else {
                        value = value * 10.0 + digit;
                    }
                },
                'e' | 'E' => {
                    self.chars.next();
                    let sign = self.scan_exponent_sign()?;
                    let exponent = self.scan()?;
                    return Ok(value * 10f64.powf(sign * exponent));
                },
                _ => break,
            }
            self.chars.next();
        }

        Ok(value)
    }

    /// Consumes an optional `+` or `-` after an exponent marker.
    fn scan_exponent_sign(&mut self) -> Result<f64, LexError> {
        self.ensure_more()?;
        let sign = match self.chars.peek() {
            Some('-') => -1.0,
            Some('+') => 1.0,
            _ => return Ok(1.0),
        };
        self.chars.next();
        self.ensure_more()?;
        Ok(sign)
    }

    fn ensure_more(&mut self) -> Result<(), LexError> {
        if self.at_source_end && self.chars.peek().is_none() {
            return Err(LexError::DanglingExponent);
        }
        Ok(())
    }
}
