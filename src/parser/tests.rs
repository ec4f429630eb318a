//! Unit tests for the parser module.
//!
//! This module contains tests for evaluating:
//! - Operator precedence and associativity
//! - Grouping
//! - Functions and constants
//! - Syntax and domain errors

use std::{collections::HashMap, sync::Arc};

use super::parser::{evaluate, evaluate_line, evaluate_with, Parser};
use crate::{
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::{lexer::Lexer, tokens::TokenKind, vocabulary::Vocabulary},
    Position,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_precedence() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
    assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
    assert_eq!(evaluate("2 * 3 ^ 2").unwrap(), 18.0);
    assert_eq!(evaluate("10 - 4 / 2").unwrap(), 8.0);
}

#[test]
fn test_left_associativity() {
    assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
    assert_eq!(evaluate("64 / 4 / 2").unwrap(), 8.0);
    assert_eq!(evaluate("2 * 6 / 3").unwrap(), 4.0);
}

#[test]
fn test_pow_is_right_associative() {
    assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
    assert_eq!(evaluate("(2^3)^2").unwrap(), 64.0);
}

#[test]
fn test_nested_grouping() {
    assert_eq!(evaluate("((((7))))").unwrap(), 7.0);
    assert_eq!(evaluate("2 * (3 + (4 - 1) * 2)").unwrap(), 18.0);
}

#[test]
fn test_float_literals() {
    assert_close(evaluate("1.5 * 2").unwrap(), 3.0);
    assert_close(evaluate("0.1 + 0.2").unwrap(), 0.3);
}

#[test]
fn test_constants() {
    assert_close(evaluate("pi").unwrap(), std::f64::consts::PI);
    assert_close(evaluate("2*e").unwrap(), 5.43656365691809);
    assert_close(evaluate("PHI^2 - phi").unwrap(), 1.0);
}

#[test]
fn test_sqrt() {
    assert_eq!(evaluate("sqrt(4)").unwrap(), 2.0);
    assert_eq!(evaluate("√(16)").unwrap(), 4.0);
    assert_close(evaluate("sqrt(2)^2").unwrap(), 2.0);
}

#[test]
fn test_log() {
    assert_close(evaluate("log(e)").unwrap(), 1.0);
    assert_close(evaluate("ln(e^2)").unwrap(), 2.0);
    assert_close(evaluate("log(8, 2)").unwrap(), 3.0);
    assert_close(evaluate("log(1000, 5 + 5)").unwrap(), 3.0);
}

#[test]
fn test_trigonometry() {
    assert_eq!(evaluate("sin(0)").unwrap(), 0.0);
    assert_eq!(evaluate("cos(0)").unwrap(), 1.0);
    assert_close(evaluate("sin(pi / 2)").unwrap(), 1.0);
    assert_close(evaluate("tan(pi / 4)").unwrap(), 1.0);
    assert!(evaluate("tan(pi / 2)").unwrap().abs() > 1e15);
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("(0 - 1) / 0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn test_invalid_character() {
    let error = evaluate("2 & 3").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::InvalidCharacter { character: '&' }
    );
    assert!(error.to_string().contains('&'));
}

#[test]
fn test_missing_closing_paren() {
    let error = evaluate("(2 + 3").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::RParen,
            found: "end of input".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position(6));
}

#[test]
fn test_trailing_tokens() {
    let error = evaluate("2 + 3)").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::TrailingInput {
            found: "`)`".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position(5));

    let error = evaluate("2 3").unwrap_err();
    assert_eq!(error.get_error_name(), "TrailingInput");
}

#[test]
fn test_malformed_factor() {
    assert_eq!(evaluate("").unwrap_err().get_error_name(), "ExpectedFactor");
    assert_eq!(evaluate("2 +").unwrap_err().get_error_name(), "ExpectedFactor");
    assert_eq!(evaluate("* 2").unwrap_err().get_error_name(), "ExpectedFactor");
    assert_eq!(evaluate("-2").unwrap_err().get_error_name(), "ExpectedFactor");
}

#[test]
fn test_function_needs_parentheses() {
    let error = evaluate("sqrt 4").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedArguments {
            function: TokenKind::Sqrt,
            found: "`4`".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position(5));
    assert_eq!(error.kind(), ErrorKind::Syntax);

    let error = evaluate("2 * log").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedArguments {
            function: TokenKind::Log,
            found: "end of input".to_string()
        }
    );
    assert_eq!(
        error.to_string(),
        "Invalid syntax: `log` must be followed by `(`, found end of input (at position 7)"
    );
}

#[test]
fn test_log_missing_comma() {
    let error = evaluate("log(8 2)").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_domain_errors() {
    let error = evaluate("1 + sqrt(0 - 4)").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "MathDomain");
    assert_eq!(error.get_position(), &Position(4));

    assert!(evaluate("log(0)").is_err());
    assert!(evaluate("log(8, 0)").is_err());
    assert!(evaluate("log(8, 1)").is_err());
    assert!(evaluate("ln(0 - 1)").is_err());
}

#[test]
fn test_lex_error_after_valid_prefix_aborts() {
    let error = evaluate("1 + 2 $").unwrap_err();
    assert_eq!(error.get_position(), &Position(6));
}

#[test]
fn test_evaluate_line_skips_blank_input() {
    assert_eq!(evaluate_line("").unwrap(), None);
    assert_eq!(evaluate_line("   ").unwrap(), None);
    assert_eq!(evaluate_line("1 + 1").unwrap(), Some(2.0));
    assert!(evaluate_line("1 +").is_err());
}

#[test]
fn test_evaluate_with_vocabulary() {
    let mut keywords = HashMap::new();
    keywords.insert("sqrt", TokenKind::Sqrt);
    let mut constants = HashMap::new();
    constants.insert("answer", 42.0);
    let vocabulary = Arc::new(Vocabulary::new(keywords, constants));

    assert_eq!(
        evaluate_with("sqrt(answer - 6)", Arc::clone(&vocabulary)).unwrap(),
        6.0
    );
    assert!(evaluate_with("pi", vocabulary).is_err());
}

#[test]
fn test_eat_advances_lookahead() {
    let mut parser = Parser::new(Lexer::new("( 1")).unwrap();

    assert_eq!(parser.current_token_kind(), TokenKind::LParen);
    let eaten = parser.eat(TokenKind::LParen).unwrap();
    assert_eq!(eaten.kind, TokenKind::LParen);
    assert_eq!(parser.current_token_kind(), TokenKind::Integer);

    assert!(parser.eat(TokenKind::RParen).is_err());
    assert_eq!(parser.current_token_kind(), TokenKind::Integer);

    parser.eat(TokenKind::Integer).unwrap();
    assert!(parser.expect_end().is_ok());
}
