//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts an expression
//! string into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using a table of anchored regex patterns
//! - Integer and floating-point literals, identifiers and operators
//! - Binding powers attached to each token
//! - Whitespace skipping and byte positions for error reporting

pub mod lexer;
pub mod tokens;
