use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_SYMBOL_HANDLER, MK_TOKEN};

use super::tokens::{Literal, Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Token, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Patterns are anchored, so a match always starts at the cursor.
lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^\\s+").unwrap();
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_SYMBOL_HANDLER!(TokenKind::LParen, '(') },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_SYMBOL_HANDLER!(TokenKind::RParen, ')') },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_SYMBOL_HANDLER!(TokenKind::Plus, '+') },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_SYMBOL_HANDLER!(TokenKind::Minus, '-') },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_SYMBOL_HANDLER!(TokenKind::Mul, '*') },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_SYMBOL_HANDLER!(TokenKind::Div, '/') },
    ];
}

/// On-demand tokenizer over a single line of input.
///
/// The cursor is a byte offset into `source` and only ever moves forward.
/// Once it reaches the end, every call to [`Lexer::next_token`] yields EOF.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// The character under the cursor, if any.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            let len = matched.end();
            self.advance_n(len);
        }
    }

    /// Returns the next token and moves the cursor past it.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        if self.at_eof() {
            let position = self.position();
            return Ok(MK_TOKEN!(TokenKind::EOF, Literal::None, Span { start: position.clone(), end: position }));
        }

        for pattern in PATTERNS.iter() {
            let matched = match pattern.regex.find(self.remainder()) {
                Some(found) => found.as_str().to_string(),
                None => continue,
            };

            let token = (pattern.handler)(self, &matched)?;
            trace!("lexed {}", token.debug());
            return Ok(token);
        }

        // at_eof() is false here, so there is a character under the cursor
        let character = self.at().unwrap_or_default();
        Err(Error::new(ErrorImpl::LexError { character }, self.position()))
    }
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Result<Token, Error> {
    let start = lexer.position();

    let value = matched
        .parse::<i64>()
        .map_err(|_| Error::new(ErrorImpl::IntegerOverflow { literal: matched.to_string() }, start.clone()))?;

    lexer.advance_n(matched.len());

    Ok(MK_TOKEN!(TokenKind::Integer, Literal::Integer(value), Span { start, end: lexer.position() }))
}

/// Drains a fresh lexer over `source` into a token list ending with EOF.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let is_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if is_eof {
            break;
        }
    }

    Ok(tokens)
}
