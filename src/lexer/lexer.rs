use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Number, Token, TokenKind, TokenValue};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("token patterns are valid regexes"),
            handler,
        }
    }
}

lazy_static! {
    // Every pattern is anchored, so a match is always at the lexer position
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^[0-9][0-9.]*", number_handler),
        RegexPattern::new(r"^\p{Alphabetic}[\p{Alphabetic}\p{N}_]*", symbol_handler),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, ")")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        log::trace!("lexed {}", token);
        self.tokens.push(token);
    }

    /// The character at the current position, if any.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos)
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map_or_else(String::new, |m| m.as_str().to_string())
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex).len();
    lexer.advance_n(matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    // The run may hold any number of dots; conversion decides if it's valid
    let number = if matched.contains('.') {
        // Out-of-range floats parse as infinity, which has no JSON form
        matched
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Number::Float)
    } else {
        matched.parse::<i64>().ok().map(Number::Int)
    };

    let Some(number) = number else {
        return Err(Error::new(
            ErrorImpl::MalformedNumber {
                lexeme: matched,
            },
            lexer.get_position(),
        ));
    };

    let start = lexer.pos;
    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        TokenValue::Number(number),
        Span::new(start, start + matched.len())
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let start = lexer.pos;
    let len = value.len();

    lexer.push(MK_TOKEN!(
        TokenKind::Identifier,
        TokenValue::Text(value),
        Span::new(start, start + len)
    ));
    lexer.advance_n(len);
    Ok(())
}

/// Converts source text into tokens, terminated by a single `EndOfInput`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                // at() is always Some here since we're not at eof
                let character = lex.at().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter { character },
                    lex.get_position(),
                ));
            }
        }
    }

    let end = lex.pos;
    lex.push(MK_TOKEN!(
        TokenKind::EndOfInput,
        TokenValue::Text(String::from("EOF")),
        Span::new(end, end)
    ));

    log::debug!("tokenized {} bytes into {} tokens", source.len(), lex.tokens.len());
    Ok(lex.tokens)
}
