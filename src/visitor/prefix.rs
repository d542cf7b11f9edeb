use crate::ast::expressions::{BinaryExpr, LiteralExpr};

use super::visitor::Visitor;

/// Renders `a + b * c` as `(+ a (* b c))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixRenderer;

impl Visitor for PrefixRenderer {
    type Output = String;

    fn visit_literal(&mut self, expr: &LiteralExpr) -> String {
        expr.value.to_string()
    }

    fn visit_binary_op(&mut self, expr: &BinaryExpr) -> String {
        let left = self.visit(&expr.left);
        let right = self.visit(&expr.right);

        format!("({} {} {})", expr.operator.literal, left, right)
    }
}
