//! Tree walking over parsed expressions.
//!
//! - visitor: The `Visitor` trait with exhaustive dispatch over `Expr`
//! - prefix: Renders a tree as a fully-parenthesized prefix expression

pub mod prefix;
pub mod visitor;
