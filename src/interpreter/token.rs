use std::fmt;

/// Represents one unit of a tokenized expression.
///
/// The vocabulary is closed: every stage matches on all four variants, so a
/// token kind can never be silently ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal operand, such as `2.5` or `1e3`.
    Value(f64),
    /// An operator or a piece of punctuation.
    Operator(Operator),
    /// A named unary function, such as `sin`.
    Function(Function),
    /// A named constant, such as `pi`.
    Constant(Constant),
}

/// Operators and structural punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-` in binary position.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// Unary minus. Never produced by the lexer, only by the infix parser.
    Negate,
    /// `^`
    Pow,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
}

impl Operator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Negate => "unary -",
            Self::Pow => "^",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
        }
    }
}

/// Declares an enum whose variants are looked up by a case-insensitive name.
///
/// Each entry provides:
/// - the variant,
/// - the name it is spelled as in source text.
///
/// The macro produces the enum itself, an `ALL` table in declaration order,
/// `name()` and `from_name()`.
macro_rules! named_catalog {
    (
        $(#[$meta:meta])*
        pub enum $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $name:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub enum $kind {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $kind {
            /// Every entry of the catalog, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the lowercase source name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Resolves a source name, ignoring ASCII case.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter()
                         .copied()
                         .find(|entry| entry.name().eq_ignore_ascii_case(name))
            }
        }
    };
}

named_catalog! {
    /// The fixed catalog of unary functions.
    ///
    /// `Neg` is the explicit call `neg(x)`; it is distinct from
    /// [`Operator::Negate`] even though both negate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Function {
        /// Absolute value.
        Abs => "abs",
        /// Arc cosine, in radians.
        Acos => "acos",
        /// Arc sine, in radians.
        Asin => "asin",
        /// Arc tangent, in radians.
        Atan => "atan",
        /// Cosine.
        Cos => "cos",
        /// Hyperbolic cosine.
        Cosh => "cosh",
        /// `e` raised to the argument.
        Exp => "exp",
        /// Natural logarithm.
        Ln => "ln",
        /// Base-10 logarithm.
        Log => "log",
        /// Rounds half away from zero.
        Round => "round",
        /// Sine.
        Sin => "sin",
        /// Hyperbolic sine.
        Sinh => "sinh",
        /// Square root.
        Sqrt => "sqrt",
        /// Tangent.
        Tan => "tan",
        /// Hyperbolic tangent.
        Tanh => "tanh",
        /// Integer part, rounding toward zero.
        Trunc => "trunc",
        /// Arithmetic negation.
        Neg => "neg",
    }
}

named_catalog! {
    /// The fixed catalog of named constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Constant {
        /// Euler's number.
        E => "e",
        /// The ratio of a circle's circumference to its diameter.
        Pi => "pi",
    }
}

impl Constant {
    /// Returns the numeric value of the constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::E => std::f64::consts::E,
            Self::Pi => std::f64::consts::PI,
        }
    }
}

/// Resolves an identifier against the function and constant catalogs.
///
/// Matching ignores ASCII case. Returns `None` for names in neither catalog.
///
/// # Example
/// ```
/// use calc::interpreter::token::{Constant, Function, Token, resolve_identifier};
///
/// assert_eq!(resolve_identifier("SIN"), Some(Token::Function(Function::Sin)));
/// assert_eq!(resolve_identifier("Pi"), Some(Token::Constant(Constant::Pi)));
/// assert_eq!(resolve_identifier("max"), None);
/// ```
#[must_use]
pub fn resolve_identifier(name: &str) -> Option<Token> {
    Function::from_name(name).map(Token::Function)
                             .or_else(|| Constant::from_name(name).map(Token::Constant))
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Constant(constant) => write!(f, "{constant}"),
        }
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

impl From<Function> for Token {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Constant> for Token {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}
