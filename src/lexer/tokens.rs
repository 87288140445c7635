use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Span;

/// Left binding power of a token.
///
/// Only `ADDITIVE`, `MULTIPLICATIVE`, `UNARY` and `CALL` are used by the
/// shipped operator set. The rest of the ladder is where new operators slot
/// in; the gaps leave room for right-associative operators, which parse their
/// right operand at `bp - 1`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Default)]
pub struct BindingPower(pub u8);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const ASSIGNMENT: BindingPower = BindingPower(2);
    pub const CONDITIONAL: BindingPower = BindingPower(4);
    pub const LOGICAL_OR: BindingPower = BindingPower(6);
    pub const LOGICAL_AND: BindingPower = BindingPower(7);
    pub const EQUALITY: BindingPower = BindingPower(8);
    pub const RELATIONAL: BindingPower = BindingPower(9);
    pub const ADDITIVE: BindingPower = BindingPower(10);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(20);
    pub const EXPONENT: BindingPower = BindingPower(30);
    pub const UNARY: BindingPower = BindingPower(50);
    pub const POSTFIX: BindingPower = BindingPower(60);
    pub const CALL: BindingPower = BindingPower(80);
    pub const MEMBER: BindingPower = BindingPower(90);

    /// Threshold used to parse the right operand of an operator with this
    /// binding power.
    pub fn right_operand(self, associativity: Associativity) -> BindingPower {
        match associativity {
            Associativity::Left => self,
            Associativity::Right => BindingPower(self.0.saturating_sub(1)),
        }
    }
}

impl Display for BindingPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Number,
    Identifier,

    Plus,
    Minus,
    Star,
    Slash,

    LParen,
    RParen,
    Comma,
}

impl TokenKind {
    pub const ALL: [TokenKind; 10] = [
        TokenKind::EndOfInput,
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Comma,
    ];

    pub fn binding_power(self) -> BindingPower {
        match self {
            TokenKind::Plus | TokenKind::Minus => BindingPower::ADDITIVE,
            TokenKind::Star | TokenKind::Slash => BindingPower::MULTIPLICATIVE,
            // An opening paren after an expression is always a call
            TokenKind::LParen => BindingPower::CALL,
            TokenKind::EndOfInput
            | TokenKind::Number
            | TokenKind::Identifier
            | TokenKind::RParen
            | TokenKind::Comma => BindingPower::DEFAULT,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Numeric literal value. Lexemes containing a `.` become floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            // Debug keeps the trailing `.0` on whole floats
            Number::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(Number),
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(number) => write!(f, "{}", number),
            TokenValue::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub binding_power: BindingPower,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier => {
                write!(f, "{} ({}) bp={}", self.kind, self.value, self.binding_power)
            }
            _ => write!(f, "{} bp={}", self.kind, self.binding_power),
        }
    }
}

impl Token {
    /// Source text of the token, as used in error messages.
    pub fn lexeme(&self) -> String {
        self.value.to_string()
    }
}
