#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "offset {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }
}

/// Tokenizes and parses `source` in one go.
pub fn parse_source(source: &str) -> Result<Expr, Error> {
    parse(tokenize(source)?)
}

/// Finds the line containing byte offset `pos`.
///
/// Returns the 1-based line number, the line text without its newline and
/// the column in characters. A position equal to the source length (where
/// `EndOfInput` sits) resolves to the end of the last line.
pub fn get_line_at_position(source: &str, pos: usize) -> Option<(usize, String, usize)> {
    let before = source.get(..pos)?;

    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[pos..].find('\n').map_or(source.len(), |i| pos + i);
    let line_number = before.matches('\n').count() + 1;
    let column = source[line_start..pos].chars().count();

    Some((
        line_number,
        source[line_start..line_end].trim_end_matches('\r').to_string(),
        column,
    ))
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnexpectedCharacter (Unexpected character: `&`)
///   |
/// 1 | 3 & 4
///   | --^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };

    let Some((line, line_text, column)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
