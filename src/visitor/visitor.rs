use crate::ast::{
    ast::Expr,
    expressions::{BinaryExpr, LiteralExpr},
};

/// Visitor Trait
///
/// One method per node shape. `visit` matches on the closed `Expr` type, so
/// adding a node shape fails to compile until every visitor handles it.
pub trait Visitor {
    type Output;

    fn visit_literal(&mut self, expr: &LiteralExpr) -> Self::Output;
    fn visit_binary_op(&mut self, expr: &BinaryExpr) -> Self::Output;

    fn visit(&mut self, expr: &Expr) -> Self::Output {
        match expr {
            Expr::Literal(literal) => self.visit_literal(literal),
            Expr::BinaryOp(binary) => self.visit_binary_op(binary),
        }
    }
}
