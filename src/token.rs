//! Lexical units produced by the [`Scanner`](crate::Scanner).
//!
//! A [`Token`] records the exact slice of source it was read from, the literal
//! [`Value`] it carries (if any) and where it sits in the input, so that every
//! parse error can point back at the offending text.

use crate::Value;
use std::fmt;
use std::sync::Arc;

/// The classification of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Equal,
    Plus,
    Minus,
    String,
    Number,
    Real,
    True,
    False,
    Nil,
    SectionName,
    Eof,
}

impl TokenKind {
    /// Returns a short human-readable description used in diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Equal => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Real => "real",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Nil => "'nil'",
            TokenKind::SectionName => "section name",
            TokenKind::Eof => "end of input",
        }
    }

    /// Returns `true` for tokens that carry a literal value.
    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number | TokenKind::Real)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A single lexical unit.
///
/// Tokens are immutable once produced. The scanner builds the whole sequence
/// eagerly and the parser walks it by index.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{scan, TokenKind, Value};
///
/// let tokens = scan("0x10").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Number);
/// assert_eq!(tokens[0].lexeme, "0x10");
/// assert_eq!(tokens[0].literal, Value::Int(16));
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source slice of this token.
    pub lexeme: String,
    /// The literal carried by string and number tokens, `Value::Nil` otherwise.
    pub literal: Value,
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset of the first character.
    pub offset: usize,
    /// Label of the source this token came from, used only in diagnostics.
    pub path: Option<Arc<str>>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, offset: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Value::Nil,
            line,
            offset,
            path: None,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: Value) -> Self {
        self.literal = literal;
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: Option<Arc<str>>) -> Self {
        self.path = path;
        self
    }

    /// Returns `true` if this is the end-of-input marker.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "'{}'", self.lexeme)
        }
    }
}
