use super::expressions::{BinaryExpr, LiteralExpr};

/// Expression node
///
/// A closed set of node shapes. Every node owns its children, so a tree
/// built by the parser is acyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    BinaryOp(BinaryExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &crate::Span {
        match self {
            Expr::Literal(literal) => &literal.span,
            Expr::BinaryOp(binary) => &binary.span,
        }
    }

    /// Number of operator levels from this node down to its deepest literal.
    pub fn height(&self) -> usize {
        match self {
            Expr::Literal(_) => 0,
            Expr::BinaryOp(binary) => binary.height,
        }
    }
}
