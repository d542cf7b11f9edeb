use log::trace;

use crate::{
    ast::{ast::Expr, expressions::{BinaryExpr, LiteralExpr}},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::{
    lookups::{binding_power, BindingPower, OperandHandler},
    parser::{Parser, MAX_TREE_HEIGHT},
};

/// expr := term ( (PLUS | MINUS) term )*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Additive, parse_term)
}

/// term := factor ( (MUL | DIV) factor )*
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative, parse_factor)
}

/// factor := INTEGER | LPAREN expr RPAREN
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    if let Literal::Integer(value) = parser.current_token().literal {
        let token = parser.eat(TokenKind::Integer)?;
        return Ok(Expr::Literal(LiteralExpr { value, span: token.span }));
    }

    match parser.current_token_kind() {
        TokenKind::LParen => parse_grouping_expr(parser),
        _ => Err(parser.unexpected("an operand")),
    }
}

// Folds `operand (op operand)*` to the left for every operator bound at `bp`.
fn parse_binary_expr(parser: &mut Parser, bp: BindingPower, operand: OperandHandler) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while binding_power(parser.current_token_kind()) == Some(bp) {
        let operator = parser.eat(parser.current_token_kind())?;
        let right = operand(parser)?;

        trace!("folding {} at {:?}", operator.kind, bp);

        let binary = BinaryExpr::new(left, operator, right);
        if binary.height > MAX_TREE_HEIGHT {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_TREE_HEIGHT },
                binary.operator.span.start.clone(),
            ));
        }

        left = Expr::BinaryOp(binary);
    }

    Ok(left)
}

fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_group()?;
    parser.eat(TokenKind::LParen)?;
    let expr = parse_expr(parser)?;
    parser.eat(TokenKind::RParen)?;
    parser.leave_group();

    Ok(expr)
}
