use crate::interpreter::token::{Function, Operator, Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// Found a character that cannot start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index in the source text.
        position:  usize,
    },
    /// An identifier named neither a function nor a constant.
    UnknownIdentifier {
        /// The identifier as written.
        name:     String,
        /// Zero-based character index in the source text.
        position: usize,
    },
    /// Reached the end of input while more was required.
    ///
    /// Raised for an exponent marker or exponent sign at the very end of the
    /// text, and for an expression that stops mid-way.
    UnexpectedEndOfInput,
    /// A function name was not followed by `(`.
    MissingOpenParenAfterFunction {
        /// The function whose call is malformed.
        function: Function,
    },
    /// A comma in an argument list was directly followed by `)`.
    MissingArgumentAfterComma {
        /// The function whose call is malformed.
        function: Function,
    },
    /// A `(` was never closed.
    UnmatchedParenthesis,
    /// A token that cannot start an operand appeared where one was required.
    UnexpectedOperator {
        /// The operator encountered.
        operator: Operator,
    },
    /// Tokens were left over after a complete expression.
    TrailingInput {
        /// The first unconsumed token.
        token: Token,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character '{character}' at position {position}.")
            },
            Self::UnknownIdentifier { name, position } => {
                write!(f,
                       "Unknown function or constant '{name}' at position {position}.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
            Self::MissingOpenParenAfterFunction { function } => {
                write!(f, "Missing '(' after function name '{function}'.")
            },
            Self::MissingArgumentAfterComma { function } => {
                write!(f, "Missing argument after ',' in call to '{function}'.")
            },
            Self::UnmatchedParenthesis => write!(f, "Unmatched parenthesis."),
            Self::UnexpectedOperator { operator } => {
                write!(f, "Unexpected operator '{operator}'.")
            },
            Self::TrailingInput { token } => {
                write!(f, "Unexpected text at the end of the expression: {token}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
