use std::f64::consts;

use calc::{
    RuntimeError, evaluate,
    interpreter::token::{Constant, Function, Operator, Token},
};

const fn v(value: f64) -> Token {
    Token::Value(value)
}

const fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

fn eval(tokens: &[Token]) -> f64 {
    evaluate(tokens).unwrap_or_else(|e| panic!("{tokens:?} failed: {e}"))
}

#[test]
fn second_popped_value_is_the_left_operand() {
    assert_eq!(eval(&[v(10.0), v(4.0), op(Operator::Sub)]), 6.0);
    assert_eq!(eval(&[v(10.0), v(4.0), op(Operator::Div)]), 2.5);
    assert_eq!(eval(&[v(2.0), v(3.0), op(Operator::Pow)]), 8.0);
    assert_eq!(eval(&[v(10.0), v(3.0), op(Operator::Mod)]), 1.0);
    assert_eq!(eval(&[v(2.0), v(3.0), op(Operator::Add)]), 5.0);
    assert_eq!(eval(&[v(2.0), v(3.0), op(Operator::Mul)]), 6.0);
}

#[test]
fn remainder_sign_follows_the_dividend() {
    assert_eq!(eval(&[v(-7.0), v(3.0), op(Operator::Mod)]), -1.0);
    assert_eq!(eval(&[v(7.0), v(-3.0), op(Operator::Mod)]), 1.0);
    assert_eq!(eval(&[v(5.5), v(2.0), op(Operator::Mod)]), 1.5);
    assert!(eval(&[v(1.0), v(0.0), op(Operator::Mod)]).is_nan());
}

#[test]
fn special_values_pass_through() {
    assert!(eval(&[v(-8.0), v(0.5), op(Operator::Pow)]).is_nan());
    assert_eq!(eval(&[v(1.0), v(0.0), op(Operator::Div)]), f64::INFINITY);
    assert_eq!(eval(&[v(0.0), v(-1.0), op(Operator::Pow)]), f64::INFINITY);
}

#[test]
fn negate_and_neg_both_negate() {
    assert_eq!(eval(&[v(3.0), op(Operator::Negate)]), -3.0);
    assert_eq!(eval(&[v(3.0), Token::Function(Function::Neg)]), -3.0);
    assert_eq!(eval(&[v(-3.0), op(Operator::Negate), Token::Function(Function::Neg)]), -3.0);
}

#[test]
fn constants_push_their_values() {
    assert_eq!(eval(&[Token::Constant(Constant::E)]), consts::E);
    assert_eq!(eval(&[Token::Constant(Constant::Pi)]), consts::PI);
}

#[test]
fn functions_apply_to_the_top_value() {
    let cases = [(Function::Abs, -2.5, 2.5),
                 (Function::Acos, 1.0, 0.0),
                 (Function::Asin, 1.0, consts::FRAC_PI_2),
                 (Function::Atan, 1.0, consts::FRAC_PI_4),
                 (Function::Cos, 0.0, 1.0),
                 (Function::Cosh, 0.0, 1.0),
                 (Function::Exp, 1.0, consts::E),
                 (Function::Ln, consts::E, 1.0),
                 (Function::Log, 100.0, 2.0),
                 (Function::Round, 2.5, 3.0),
                 (Function::Round, -2.5, -3.0),
                 (Function::Sin, consts::FRAC_PI_2, 1.0),
                 (Function::Sinh, 0.0, 0.0),
                 (Function::Sqrt, 16.0, 4.0),
                 (Function::Tan, consts::FRAC_PI_4, 1.0),
                 (Function::Tanh, 0.0, 0.0),
                 (Function::Trunc, -2.7, -2.0),
                 (Function::Neg, 4.0, -4.0)];

    for (function, input, expected) in cases {
        let value = eval(&[v(input), Token::Function(function)]);
        assert!((value - expected).abs() < 1e-12,
                "{function}({input}) gave {value}, expected {expected}");
    }
}

#[test]
fn lone_operator_underflows() {
    assert_eq!(evaluate(&[op(Operator::Add)]),
               Err(RuntimeError::StackUnderflow { operation: op(Operator::Add) }));
    assert_eq!(evaluate(&[v(1.0), op(Operator::Mul)]),
               Err(RuntimeError::StackUnderflow { operation: op(Operator::Mul) }));
    assert_eq!(evaluate(&[op(Operator::Negate)]),
               Err(RuntimeError::StackUnderflow { operation: op(Operator::Negate) }));
    assert_eq!(evaluate(&[Token::Function(Function::Sqrt)]),
               Err(RuntimeError::StackUnderflow { operation: Token::Function(Function::Sqrt) }));
}

#[test]
fn leftover_or_missing_values_are_unbalanced() {
    assert_eq!(evaluate(&[v(1.0), v(2.0)]),
               Err(RuntimeError::UnbalancedExpression { remaining: 2 }));
    assert_eq!(evaluate(&[]), Err(RuntimeError::UnbalancedExpression { remaining: 0 }));
}

#[test]
fn structural_operators_are_rejected() {
    for operator in [Operator::LeftParen, Operator::RightParen, Operator::Comma] {
        assert_eq!(evaluate(&[v(1.0), v(2.0), op(operator)]),
                   Err(RuntimeError::UnhandledOperator { operator }));
    }
}

#[test]
fn evaluation_stops_at_the_first_error() {
    let tokens = [op(Operator::Sub), v(1.0), op(Operator::Comma)];
    assert_eq!(evaluate(&tokens),
               Err(RuntimeError::StackUnderflow { operation: op(Operator::Sub) }));
}
