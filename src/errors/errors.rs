use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenInInfixPosition { .. } => "UnexpectedTokenInInfixPosition",
            ErrorImpl::ExpectedClosingParen => "ExpectedClosingParen",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character: `{}`", character))
            }
            ErrorImpl::MalformedNumber { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, does it have more than one `.` or exceed the integer limit?",
                lexeme
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Expression ended early, is an operand missing?",
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedTokenInInfixPosition { .. } => ErrorTip::None,
            ErrorImpl::ExpectedClosingParen => {
                ErrorTip::Suggestion(String::from("Expected `)`, did you forget to close a paren?"))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nests more than {} levels deep, try splitting it up",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("malformed number: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token in infix position: {token:?}")]
    UnexpectedTokenInInfixPosition { token: String },
    #[error("expected closing parenthesis")]
    ExpectedClosingParen,
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
