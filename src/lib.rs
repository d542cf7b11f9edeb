#![allow(clippy::module_inception)]

use std::rc::Rc;

use log::debug;

use crate::{
    errors::errors::Error,
    lexer::lexer::Lexer,
    parser::parser::{parse, ParseMode},
    visitor::{prefix::PrefixRenderer, visitor::Visitor},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod visitor;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes, parses and renders a single line of input with lenient parsing.
///
/// Tokens left over after a complete expression are ignored, so `"1 + 2 )"`
/// renders as `"(+ 1 2)"`. Use [`evaluate_line_with`] and [`ParseMode::Strict`]
/// to reject them instead.
pub fn evaluate_line(text: &str) -> Result<String, Error> {
    evaluate_line_with(text, ParseMode::Lenient)
}

pub fn evaluate_line_with(text: &str, mode: ParseMode) -> Result<String, Error> {
    evaluate_source(text, None, mode)
}

/// Like [`evaluate_line_with`], labelling error positions with `file`
/// instead of `"shell"`.
pub fn evaluate_source(text: &str, file: Option<String>, mode: ParseMode) -> Result<String, Error> {
    let lexer = Lexer::new(text.to_string(), file);
    let tree = parse(lexer, mode)?;

    debug!("parsed tree: {:?}", tree);

    Ok(PrefixRenderer.visit(&tree))
}

/// Builds a caret diagnostic pointing at the error position inside `source`.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: SyntaxError (Expected `RParen`, found end of input)
        -> shell
           |
         1 | (1 + 2
           | ------^
    */

    let position = error.get_position();
    let offset = (position.0 as usize).min(source.len());
    let column = source
        .get(..offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);

    let line_string = String::from("1");
    let padding = line_string.len() + 2;

    let mut out = format!("Error: {} ({})\n", error.get_error_name(), error.get_tip());
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(source);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c.is_whitespace() {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
