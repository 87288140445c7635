//! Error types and error handling for the lexer and parser.
//!
//! This module defines the errors raised while turning source text into a
//! syntax tree. It includes:
//!
//! - An error structure carrying the source position of the failure
//! - Variants for lexing failures and syntax errors
//! - Error names and suggestions for reporting

pub mod errors;
