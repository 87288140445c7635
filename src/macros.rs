//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance, filling in its binding power
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-lexeme tokens

/// Creates a Token instance.
///
/// The binding power is always taken from the kind, so it can't disagree
/// with the kind once the token exists.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, TokenValue::Text("+".to_string()), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            binding_power: $kind.binding_power(),
            span: $span,
        }
    };
}

/// Creates a lexer handler for a fixed lexeme.
///
/// The generated handler pushes a token of the given kind spanning the
/// lexeme and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let start = lexer.pos;
            lexer.push(MK_TOKEN!(
                $kind,
                TokenValue::Text(String::from($value)),
                Span::new(start, start + $value.len())
            ));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
