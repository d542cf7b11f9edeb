//! Parser implementation for building the expression tree.
//!
//! The parser owns the lexer and keeps exactly one token of lookahead.
//! Tokens are fetched from the lexer only when the lookahead is consumed,
//! so lexing errors surface at the point the parser reaches them.

use log::{debug, trace};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::expr::parse_expr;

/// Deepest run of open parentheses accepted on one line.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Tallest tree accepted, counted in operator levels.
pub const MAX_TREE_HEIGHT: usize = 256;

/// What to do with tokens left after a complete top-level expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Ignore them, so `1 + 2 )` parses as `1 + 2`.
    #[default]
    Lenient,
    /// Require the expression to be followed by end of input.
    Strict,
}

/// The parser state: the token source plus the current lookahead.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The fetched but not yet consumed token
    current_token: Token,
    /// Number of parentheses currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser and fetches the first lookahead token.
    ///
    /// # Arguments
    ///
    /// * `lexer` - Lexer positioned at the start of the input
    ///
    /// # Returns
    ///
    /// The parser, or the error raised while lexing the first token.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current_token = lexer.next_token()?;

        Ok(Parser { lexer, current_token, depth: 0 })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns the consumed token and moves the lookahead forward, otherwise
    /// returns a syntax error naming the expected and actual tokens.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token.kind != expected_kind {
            return Err(self.unexpected(format!("`{}`", expected_kind)));
        }

        let next = self.lexer.next_token()?;
        let eaten = std::mem::replace(&mut self.current_token, next);
        trace!("ate {}", eaten.debug());

        Ok(eaten)
    }

    /// Records an opening parenthesis, failing once `MAX_NESTING_DEPTH` are open.
    pub fn enter_group(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds a syntax error for the current token.
    pub fn unexpected(&self, expected: impl Into<String>) -> Error {
        Error::new(
            ErrorImpl::SyntaxError {
                expected: expected.into(),
                found: self.current_token.describe(),
            },
            self.get_position(),
        )
    }

    /// Returns the start of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }
}

/// Parses one line of tokens into an expression tree.
///
/// This is the main entry point for parsing. It reads the first lookahead
/// token, parses a single expression and, in strict mode, checks that
/// nothing follows it.
///
/// # Arguments
///
/// * `lexer` - Lexer over the input line
/// * `mode` - Whether trailing tokens are ignored or rejected
///
/// # Returns
///
/// The root of the tree, or the first lexing or syntax error encountered.
pub fn parse(lexer: Lexer, mode: ParseMode) -> Result<Expr, Error> {
    let mut parser = Parser::new(lexer)?;
    debug!("parsing in {:?} mode", mode);

    let tree = parse_expr(&mut parser)?;

    if mode == ParseMode::Strict && parser.current_token_kind() != TokenKind::EOF {
        return Err(parser.unexpected("end of input"));
    }

    if parser.current_token_kind() != TokenKind::EOF {
        debug!("ignoring trailing input at position {}", parser.get_position().0);
    }

    Ok(tree)
}
