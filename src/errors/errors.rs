use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexError { .. } => "LexError",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// A one-line hint shown next to the error name.
    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::LexError { character } => format!("Unknown character `{}`", character),
            ErrorImpl::SyntaxError { expected, found } => {
                format!("Expected {}, found {}", expected, found)
            }
            ErrorImpl::IntegerOverflow { literal } => {
                format!("Integer `{}` is above the limit of {}", literal, i64::MAX)
            }
            ErrorImpl::NestingTooDeep { limit } => {
                format!("Expression nests deeper than {} levels", limit)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown character: {character:?}")]
    LexError { character: char },
    #[error("syntax error: expected {expected}, found {found}")]
    SyntaxError { expected: String, found: String },
    #[error("integer literal {literal:?} does not fit in 64 bits")]
    IntegerOverflow { literal: String },
    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
