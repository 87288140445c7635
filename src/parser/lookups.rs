use std::collections::HashMap;

use crate::{
    ast::expressions::Expr,
    errors::errors::Error,
    lexer::tokens::{Associativity, BindingPower, TokenKind},
};

use super::{expr::*, parser::Parser};

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
/// Receives the left operand and the threshold for parsing the right one.
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

/// Registers the default prefix and infix handlers.
///
/// Every token kind must be given a role here, the match is exhaustive.
pub fn create_token_lookups(parser: &mut Parser) {
    for kind in TokenKind::ALL {
        match kind {
            // Literals and symbols
            TokenKind::Number | TokenKind::Identifier => parser.nud(kind, parse_primary_expr),

            // Additive, also unary
            TokenKind::Plus | TokenKind::Minus => {
                parser.nud(kind, parse_prefix_expr);
                parser.led(kind, Associativity::Left, parse_binary_expr);
            }

            // Multiplicative
            TokenKind::Star | TokenKind::Slash => {
                parser.led(kind, Associativity::Left, parse_binary_expr)
            }

            // Grouping and calls
            TokenKind::LParen => {
                parser.nud(kind, parse_grouping_expr);
                parser.led(kind, Associativity::Left, parse_call_expr);
            }

            // Delimiters only
            TokenKind::RParen | TokenKind::Comma | TokenKind::EndOfInput => {}
        }
    }
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type AssociativityLookup = HashMap<TokenKind, Associativity>;
