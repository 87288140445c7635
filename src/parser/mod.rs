//! Parser module for building the expression tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into an expression tree. It is a Pratt parser and handles:
//!
//! - Binary arithmetic with precedence and associativity
//! - Unary `+` and `-`
//! - Parenthesized grouping
//! - Function calls with comma-separated arguments
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
