//! Parser module for building an expression tree.
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the lexer one at a time and builds an `Expr` tree. It handles:
//!
//! - Two precedence levels (additive and multiplicative), both left-associative
//! - Parenthesized sub-expressions
//! - Lenient or strict handling of tokens after the expression
//!
//! Operator precedence is looked up from a binding power table, so `term`
//! and `expr` share one left-folding routine.

pub mod expr;
pub mod lookups;
pub mod parser;
