//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::LexError { character: '@' },
        Position(10, Rc::new("test.calc".to_string())),
    );

    assert_eq!(error.get_error_name(), "LexError");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.calc".to_string()));
    let error = Error::new(
        ErrorImpl::SyntaxError {
            expected: "`RParen`".to_string(),
            found: "end of input".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_syntax_error() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            expected: "an operand".to_string(),
            found: "`)`".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_tip(), "Expected an operand, found `)`");
}

#[test]
fn test_integer_overflow_error() {
    let error = Error::new(
        ErrorImpl::IntegerOverflow {
            literal: "99999999999999999999".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "IntegerOverflow");
    assert_eq!(
        error.get_tip(),
        "Integer `99999999999999999999` is above the limit of 9223372036854775807"
    );
}

#[test]
fn test_lex_error_tip() {
    let error = Error::new(ErrorImpl::LexError { character: '&' }, Position::null());

    assert_eq!(error.get_tip(), "Unknown character `&`");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 64 }, Position::null());

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_tip(), "Expression nests deeper than 64 levels");
}

#[test]
fn test_every_error_has_a_tip() {
    let errors = [
        ErrorImpl::LexError { character: '$' },
        ErrorImpl::SyntaxError {
            expected: "`RParen`".to_string(),
            found: "end of input".to_string(),
        },
        ErrorImpl::IntegerOverflow { literal: "1".repeat(30) },
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, Position::null());
        assert!(!error.get_tip().is_empty(), "{} has no tip", error.get_error_name());
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::LexError { character: '#' },
        Position(3, Rc::new("shell".to_string())),
    );

    assert_eq!(error.to_string(), "unknown character: '#' at position 3");
}
