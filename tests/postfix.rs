use calc::{
    ParseError, to_postfix, tokenize,
    interpreter::token::{Constant, Function, Operator, Token},
};

fn postfix(src: &str) -> Vec<Token> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"));
    to_postfix(&tokens).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
}

fn parse_error(src: &str) -> ParseError {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"));
    match to_postfix(&tokens) {
        Ok(output) => panic!("'{src}' should fail, got {output:?}"),
        Err(e) => e,
    }
}

const fn v(value: f64) -> Token {
    Token::Value(value)
}

const fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

#[test]
fn binary_operators_follow_their_operands() {
    assert_eq!(postfix("2^3"), [v(2.0), v(3.0), op(Operator::Pow)]);
    assert_eq!(postfix("1 + 2 * 3"),
               [v(1.0), v(2.0), v(3.0), op(Operator::Mul), op(Operator::Add)]);
    assert_eq!(postfix("(1 + 2) * 3"),
               [v(1.0), v(2.0), op(Operator::Add), v(3.0), op(Operator::Mul)]);
}

#[test]
fn additive_and_multiplicative_levels_are_left_associative() {
    assert_eq!(postfix("1 - 2 - 3"),
               [v(1.0), v(2.0), op(Operator::Sub), v(3.0), op(Operator::Sub)]);
    assert_eq!(postfix("8 / 4 % 3"),
               [v(8.0), v(4.0), op(Operator::Div), v(3.0), op(Operator::Mod)]);
}

#[test]
fn exponent_chain_emits_operands_then_operators() {
    assert_eq!(postfix("2^3^2"),
               [v(2.0), v(3.0), v(2.0), op(Operator::Pow), op(Operator::Pow)]);
    assert_eq!(postfix("2 * 3 ^ 2"),
               [v(2.0), v(3.0), v(2.0), op(Operator::Pow), op(Operator::Mul)]);
}

#[test]
fn unary_minus_is_emitted_after_its_operand() {
    assert_eq!(postfix("-3+4"),
               [v(3.0), op(Operator::Negate), v(4.0), op(Operator::Add)]);
    assert_eq!(postfix("-2^2"),
               [v(2.0), op(Operator::Negate), v(2.0), op(Operator::Pow)]);
    assert_eq!(postfix("2^-1"),
               [v(2.0), v(1.0), op(Operator::Negate), op(Operator::Pow)]);
}

#[test]
fn unary_plus_is_dropped() {
    assert_eq!(postfix("+5"), [v(5.0)]);
    assert_eq!(postfix("1 - +2"), [v(1.0), v(2.0), op(Operator::Sub)]);
}

#[test]
fn functions_follow_their_arguments() {
    assert_eq!(postfix("sin(pi / 2)"),
               [Token::Constant(Constant::Pi),
                v(2.0),
                op(Operator::Div),
                Token::Function(Function::Sin)]);
    assert_eq!(postfix("sqrt(abs(-16))"),
               [v(16.0),
                op(Operator::Negate),
                Token::Function(Function::Abs),
                Token::Function(Function::Sqrt)]);
    assert_eq!(postfix("neg(1, 2 + 3)"),
               [v(1.0), v(2.0), v(3.0), op(Operator::Add), Token::Function(Function::Neg)]);
}

#[test]
fn structural_tokens_never_reach_the_output() {
    let sources = ["((1))", "sin((1 + 2) * (3 - 4))", "neg(1, 2)", "-(2 ^ (3))", "e * (pi)"];

    for src in sources {
        let structural = postfix(src).into_iter().any(|token| {
                                                     matches!(token,
                                                              Token::Operator(Operator::LeftParen
                                                                              | Operator::RightParen
                                                                              | Operator::Comma))
                                                 });
        assert!(!structural, "'{src}' kept structural tokens");
    }
}

#[test]
fn unmatched_parenthesis_is_error() {
    assert_eq!(parse_error("(1+2"), ParseError::UnmatchedParenthesis);
    assert_eq!(parse_error("(5 3) * 7"), ParseError::UnmatchedParenthesis);
}

#[test]
fn comma_before_closing_parenthesis_is_error() {
    assert_eq!(parse_error("sin(1,)"),
               ParseError::MissingArgumentAfterComma { function: Function::Sin });
}

#[test]
fn function_name_requires_open_parenthesis() {
    assert_eq!(parse_error("sin 1"),
               ParseError::MissingOpenParenAfterFunction { function: Function::Sin });
    assert_eq!(parse_error("2 * cos"),
               ParseError::MissingOpenParenAfterFunction { function: Function::Cos });
}

#[test]
fn tokens_that_cannot_start_an_operand_are_errors() {
    assert_eq!(parse_error(")"),
               ParseError::UnexpectedOperator { operator: Operator::RightParen });
    assert_eq!(parse_error("sin(,1)"),
               ParseError::UnexpectedOperator { operator: Operator::Comma });
    assert_eq!(parse_error("1 + * 2"),
               ParseError::UnexpectedOperator { operator: Operator::Mul });
    assert_eq!(parse_error("--2"),
               ParseError::UnexpectedOperator { operator: Operator::Sub });
    assert_eq!(to_postfix(&[op(Operator::Negate)]),
               Err(ParseError::UnexpectedOperator { operator: Operator::Negate }));
}

#[test]
fn incomplete_input_is_error() {
    for src in ["", "1 +", "-", "(", "sin(", "sin(1", "2 ^"] {
        assert_eq!(parse_error(src), ParseError::UnexpectedEndOfInput, "'{src}'");
    }
}

#[test]
fn leftover_tokens_are_error() {
    assert_eq!(parse_error("1 2"), ParseError::TrailingInput { token: v(2.0) });
    assert_eq!(parse_error("(1))"),
               ParseError::TrailingInput { token: op(Operator::RightParen) });
}
