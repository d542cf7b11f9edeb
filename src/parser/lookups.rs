use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

pub type OperandHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    pub static ref BP_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        // Additive and multiplicative
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Minus, BindingPower::Additive);
        map.insert(TokenKind::Mul, BindingPower::Multiplicative);
        map.insert(TokenKind::Div, BindingPower::Multiplicative);
        map
    };
}

/// Returns the binding power of an infix operator, or `None` for any other token.
pub fn binding_power(kind: TokenKind) -> Option<BindingPower> {
    BP_LOOKUP.get(&kind).copied()
}
