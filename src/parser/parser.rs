//! Parser implementation for building the expression tree.
//!
//! This module contains the Parser struct, which doubles as the token
//! cursor, and the `parse` entry point. The parser uses a Pratt parser
//! approach with NUD/LED handlers.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Associativity of each infix operator

use std::collections::HashMap;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Associativity, BindingPower, Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, AssociativityLookup, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
};

/// Deepest expression nesting the parser accepts before giving up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// A parser is built for a single token stream and only ever moves forward
/// through it. Running off the end of the stream reads as `EndOfInput`, so
/// a stream without a trailing `EndOfInput` token is still handled.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Associativity of each registered infix operator
    associativity_lookup: AssociativityLookup,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
}

impl Parser {
    /// Creates a parser with empty lookup tables.
    ///
    /// Use [`create_token_lookups`] to register the default operators, or
    /// register handlers by hand with [`Parser::nud`] and [`Parser::led`].
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            associativity_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `EndOfInput` once exhausted.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token()
            .map_or(TokenKind::EndOfInput, |token| token.kind)
    }

    /// Advances to the next token and returns the one just passed.
    pub fn advance(&mut self) -> Option<&Token> {
        let previous = self.pos;
        if previous < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens.get(previous)
    }

    /// Consumes a token of the expected kind, or fails with `error`.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: ErrorImpl) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(Error::new(error, self.get_position()));
        }

        self.advance()
            .cloned()
            .ok_or_else(|| Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position()))
    }

    /// Consumes a token of the expected kind, failing with `UnexpectedToken`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_lexeme();
        self.expect_error(expected_kind, ErrorImpl::UnexpectedToken { token })
    }

    /// Lexeme of the current token, used in error messages.
    pub fn current_lexeme(&self) -> String {
        self.current_token()
            .map_or_else(|| String::from("EOF"), Token::lexeme)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the associativity lookup table.
    pub fn get_associativity_lookup(&self) -> &AssociativityLookup {
        &self.associativity_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// The binding power itself comes from the token; `associativity`
    /// decides whether the right operand is parsed at that binding power
    /// (left) or one below it (right).
    pub fn led(&mut self, kind: TokenKind, associativity: Associativity, led_fn: LEDHandler) {
        self.associativity_lookup.insert(kind, associativity);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Enters one level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` once `MAX_NESTING_DEPTH` levels are open.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the source position of the current token.
    ///
    /// Past the end of the stream this is the end of the last token.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start,
            None => self
                .tokens
                .last()
                .map_or(Position::default(), |token| token.span.end),
        }
    }
}

/// Parses a token stream into a single expression.
///
/// This is the main entry point for parsing. It creates a parser, registers
/// the default lookups and parses one expression. Tokens left over after
/// that expression are an error.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, Error> {
    log::debug!("parsing {} tokens", tokens.len());

    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let expr = parse_expr(&mut parser, BindingPower::DEFAULT)?;

    if parser.current_token().is_some() {
        parser.expect(TokenKind::EndOfInput)?;
    }

    log::debug!("parsed {}", expr);
    Ok(expr)
}
