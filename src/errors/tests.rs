//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken { token: '@' },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_error_kinds() {
    let cases = [
        (ErrorImpl::UnrecognisedToken { token: '$' }, ErrorKind::Lexical),
        (
            ErrorImpl::NumberParseError {
                token: String::from("99999999999999999999"),
            },
            ErrorKind::Lexical,
        ),
        (
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseParen,
                received: TokenKind::EOF,
            },
            ErrorKind::Syntax,
        ),
        (
            ErrorImpl::ExpectedFactor {
                received: TokenKind::Star,
            },
            ErrorKind::Syntax,
        ),
        (
            ErrorImpl::TrailingInput {
                token: TokenKind::Integer(2),
            },
            ErrorKind::Syntax,
        ),
        (ErrorImpl::NestingTooDeep { limit: 256 }, ErrorKind::Syntax),
        (ErrorImpl::DivisionByZero, ErrorKind::Arithmetic),
        (
            ErrorImpl::ArithmeticOverflow {
                operator: String::from("*"),
            },
            ErrorKind::Arithmetic,
        ),
    ];

    for (error_impl, kind) in cases {
        let error = Error::new(error_impl, Position(0));
        assert_eq!(error.get_error_kind(), kind, "{}", error.get_error_name());
    }
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            received: TokenKind::EOF,
        },
        Position(4),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `CloseParen`, received `EOF`"),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_nesting_too_deep_tip() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, Position(256));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.get_tip().to_string(),
        "Expression is more than 256 levels deep, try splitting it up"
    );
    assert_eq!(
        error.to_string(),
        "SyntaxError: expression nested deeper than 256 levels at position 256"
    );
}

#[test]
fn test_division_by_zero_has_no_tip() {
    let error = Error::new(ErrorImpl::DivisionByZero, Position(1));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::DivisionByZero, Position(1));
    assert_eq!(
        error.to_string(),
        "ArithmeticError: division by zero at position 1"
    );

    let error = Error::new(
        ErrorImpl::UnrecognisedToken { token: '@' },
        Position(1),
    );
    assert_eq!(
        error.to_string(),
        "LexicalError: unrecognised token: '@' at position 1"
    );

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            received: TokenKind::EOF,
        },
        Position(4),
    );
    assert_eq!(
        error.to_string(),
        "SyntaxError: unexpected token: expected CloseParen, received EOF at position 4"
    );
}

#[test]
fn test_error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}

    takes_std_error(&Error::new(ErrorImpl::DivisionByZero, Position(0)));
}
