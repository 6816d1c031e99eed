use crate::interpreter::{evaluator::unary::UnaryFn, token::Function};

impl Function {
    /// Returns the `f64` implementation of the function.
    ///
    /// Domain errors are not checked: `sqrt(-1)` and `ln(0)` yield `NaN` and
    /// negative infinity like the underlying float operations do.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::token::Function;
    ///
    /// assert!(((Function::Log.operation())(100.0) - 2.0).abs() < 1e-12);
    /// assert_eq!((Function::Round.operation())(-2.5), -3.0);
    /// assert_eq!((Function::Trunc.operation())(-2.7), -2.0);
    /// assert!((Function::Sqrt.operation())(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn operation(self) -> UnaryFn {
        match self {
            Self::Abs => f64::abs,
            Self::Acos => f64::acos,
            Self::Asin => f64::asin,
            Self::Atan => f64::atan,
            Self::Cos => f64::cos,
            Self::Cosh => f64::cosh,
            Self::Exp => f64::exp,
            Self::Ln => f64::ln,
            Self::Log => f64::log10,
            Self::Round => f64::round,
            Self::Sin => f64::sin,
            Self::Sinh => f64::sinh,
            Self::Sqrt => f64::sqrt,
            Self::Tan => f64::tan,
            Self::Tanh => f64::tanh,
            Self::Trunc => f64::trunc,
            Self::Neg => |x| -x,
        }
    }
}
