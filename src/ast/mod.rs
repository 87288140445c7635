/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - expressions: The expression node enum and the operators it uses
pub mod expressions;

pub use crate::lexer::tokens::Number;
pub use expressions::{Expr, Operator};

/// Serializes an expression tree to pretty-printed JSON.
pub fn to_json(expr: &Expr) -> serde_json::Result<String> {
    serde_json::to_string_pretty(expr)
}

/// Serializes an expression tree to single-line JSON.
pub fn to_json_compact(expr: &Expr) -> serde_json::Result<String> {
    serde_json::to_string(expr)
}

/// Reads an expression tree back from JSON.
pub fn from_json(json: &str) -> serde_json::Result<Expr> {
    serde_json::from_str(json)
}
