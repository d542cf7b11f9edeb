//! Lexical analysis for arithmetic input.
//!
//! This module contains the lexer that turns one line of text into tokens
//! on demand. It handles:
//!
//! - Integer literals, operators and parentheses via a regex pattern table
//! - Whitespace skipping
//! - Token positions for error reporting

pub mod lexer;
pub mod tokens;
