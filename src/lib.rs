//! # calc
//!
//! calc is a calculator for arithmetic expressions written in Rust.
//! It evaluates expressions in conventional infix notation or in Reverse
//! Polish (postfix) notation, with the operators `+ - * / % ^`, a catalog of
//! unary functions, and the constants `e` and `pi`.
//!
//! A calculation runs through three stages:
//! text → [`tokenize`] → (infix only) [`to_postfix`] → [`evaluate`] → `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

/// Provides unified error types for tokenizing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while calculating an
/// expression. Every error is a deterministic function of the input and
/// renders as a one-line message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches the offending character, name, or token where one exists.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the stages of a calculation.
///
/// This module ties together the token vocabulary, the lexer, the infix
/// parser, and the postfix evaluator.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Defines the token vocabulary the stages exchange.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// This module provides helpers that are not specific to a single stage, such
/// as formatting results for display.
pub mod util;

pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::tokenize,
        parser::core::to_postfix,
        token::{Constant, Function, Operator, Token},
    },
    util::format::format_result,
};

/// The notation an expression is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Operators between operands, with precedence and parentheses: `2 + 3`.
    #[default]
    Infix,
    /// Reverse Polish Notation, operators after operands: `2 3 +`.
    Postfix,
}

/// Calculates the value of an expression.
///
/// The text is tokenized, converted to postfix order if it is written in
/// infix notation, and evaluated. Identifiers are resolved by name in both
/// notations, so `pi sin` is valid postfix input.
///
/// # Errors
/// Returns the first error of any stage; there is no partial result.
///
/// # Examples
/// ```
/// use calc::{Notation, calculate};
///
/// assert_eq!(calculate("2^3^2", Notation::Infix).unwrap(), 512.0);
/// assert_eq!(calculate("5 3 7 * +", Notation::Postfix).unwrap(), 26.0);
/// assert!(calculate("pi sin", Notation::Postfix).unwrap().abs() < 1e-12);
///
/// // Parentheses must be balanced.
/// assert!(calculate("(1 + 2", Notation::Infix).is_err());
/// ```
pub fn calculate(expression: &str, notation: Notation) -> Result<f64, Error> {
    debug!("calculating {expression:?} in {notation:?} notation");

    let tokens = tokenize(expression)?;
    let postfix = match notation {
        Notation::Infix => to_postfix(&tokens)?,
        Notation::Postfix => tokens,
    };

    Ok(evaluate(&postfix)?)
}
