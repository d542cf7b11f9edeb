use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,

    LParen,
    RParen,

    Plus,
    Minus,
    Mul,
    Div,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The value a token was lexed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Symbol(char),
    None,
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Symbol(symbol) => write!(f, "{}", symbol),
            Literal::None => write!(f, ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Literal,
    pub span: Span,
}

impl Token {
    /// Short human-readable form used in error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("end of input"),
            _ => format!("`{}`", self.literal),
        }
    }

    pub fn debug(&self) -> String {
        if self.kind == TokenKind::EOF {
            format!("{} ()", self.kind)
        } else {
            format!("{} ({})", self.kind, self.literal)
        }
    }
}
