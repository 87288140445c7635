use crate::{
    ast::expressions::{Expr, Operator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Associativity, BindingPower, TokenKind, TokenValue},
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter()?;
    let expr = parse_nud_led(parser, bp);
    parser.leave();

    expr
}

fn parse_nud_led(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if token_kind == TokenKind::EndOfInput {
        return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, parser.get_position()));
    }

    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken { token: parser.current_lexeme() },
            parser.get_position(),
        ));
    };

    log::trace!("nud {} (min bp {})", token_kind, bp);
    let mut left = nud(parser)?;

    // While the current token binds tighter than bp, it takes lhs as its left operand
    while let Some(token) = parser.current_token() {
        if token.binding_power <= bp {
            break;
        }

        let token_kind = token.kind;
        let token_bp = token.binding_power;

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenInInfixPosition { token: parser.current_lexeme() },
                parser.get_position(),
            ));
        };
        let associativity = parser
            .get_associativity_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(Associativity::Left);

        log::trace!("led {} (bp {}, {:?})", token_kind, token_bp, associativity);
        left = led(parser, left, token_bp.right_operand(associativity))?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();
    let token = parser.advance().cloned();

    match token {
        Some(token) => match (token.kind, token.value) {
            (TokenKind::Number, TokenValue::Number(value)) => Ok(Expr::literal(value)),
            (TokenKind::Identifier, TokenValue::Text(name)) => Ok(Expr::identifier(name)),
            (_, value) => Err(Error::new(
                ErrorImpl::UnexpectedToken { token: value.to_string() },
                position,
            )),
        },
        None => Err(Error::new(ErrorImpl::UnexpectedEndOfInput, position)),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();
    let operator_token = parser.current_token_kind();
    let lexeme = parser.current_lexeme();
    parser.advance();

    let Some(operator) = Operator::from_token_kind(operator_token) else {
        return Err(Error::new(ErrorImpl::UnexpectedToken { token: lexeme }, position));
    };

    // Unary binds tighter than every binary operator
    let operand = parse_expr(parser, BindingPower::UNARY)?;

    Ok(Expr::unary(operator, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect_error(TokenKind::RParen, ErrorImpl::ExpectedClosingParen)?;

    Ok(expr)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let position = parser.get_position();
    let operator_token = parser.current_token_kind();
    let lexeme = parser.current_lexeme();
    parser.advance();

    let Some(operator) = Operator::from_token_kind(operator_token) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenInInfixPosition { token: lexeme },
            position,
        ));
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(operator, left, right))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut args = vec![];

    // Input ending right after `(` is an unclosed call, not a missing argument
    let kind = parser.current_token_kind();
    if kind != TokenKind::RParen && kind != TokenKind::EndOfInput {
        args.push(parse_expr(parser, BindingPower::DEFAULT)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            args.push(parse_expr(parser, BindingPower::DEFAULT)?);
        }
    }

    parser.expect_error(TokenKind::RParen, ErrorImpl::ExpectedClosingParen)?;

    Ok(Expr::call(left, args))
}
