use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

/// Literal Expression
/// Represents a non-negative integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: i64,
    pub span: Span,
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// `operator` is always a `Plus`, `Minus`, `Mul` or `Div` token.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    /// One more than the taller of the two operands
    pub height: usize,
    pub span: Span,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        BinaryExpr {
            height: left.height().max(right.height()) + 1,
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}
