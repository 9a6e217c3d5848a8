//! Lexical analysis.
//!
//! The [`Scanner`] makes a single forward pass over the source and produces the
//! complete token sequence before any parsing starts. It tracks a `start`/`current`
//! pair of byte offsets for the token being read and a 1-based line counter.
//!
//! ## Token Rules
//!
//! - `{ } [ ] , = + -` are single-character tokens
//! - `//` starts a comment running to the end of the line
//! - spaces, tabs, carriage returns and newlines separate tokens
//! - `'...'` and `"..."` are strings; `\` escapes the next character
//! - numbers are decimal, `0x` hexadecimal or `0b` binary; a decimal with a
//!   fractional part is a real
//! - identifiers start with a letter, `_` or `:`; `true`, `false` and `nil` are
//!   keywords, everything else is a section name
//!
//! ## Usage
//!
//! ```rust
//! use serde_cfg::{Scanner, TokenKind};
//!
//! let tokens = Scanner::new("{port = 8080}").scan_tokens().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::LeftBrace,
//!         TokenKind::SectionName,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::RightBrace,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use crate::escape::unescape;
use crate::token::{Token, TokenKind};
use crate::{Error, ErrorKind, Result, Value};
use std::sync::Arc;

/// Decimal digits of `i64::MIN` without its sign.
const MIN_MAGNITUDE: &str = "9223372036854775808";

/// Converts source text into a sequence of [`Token`]s.
pub struct Scanner<'a> {
    source: &'a str,
    path: Option<Arc<str>>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            path: None,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Labels every produced token with `path`.
    #[must_use]
    pub fn with_path(mut self, path: Option<Arc<str>>) -> Self {
        self.path = path;
        self
    }

    /// Scans the whole source.
    ///
    /// The returned sequence always ends with exactly one [`TokenKind::Eof`].
    ///
    /// # Errors
    ///
    /// Fails on the first malformed lexeme with a scan error whose token is a
    /// synthetic end-of-input marker spanning the text read so far.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }
        self.start = self.current;
        self.add_token(TokenKind::Eof);
        Ok(self.tokens)
    }

    #[inline]
    pub fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    #[inline]
    pub fn is_hex_digit(c: char) -> bool {
        c.is_ascii_hexdigit()
    }

    #[inline]
    pub fn is_bin_digit(c: char) -> bool {
        c == '0' || c == '1'
    }

    /// Letters, `_` and `:` may start an identifier.
    #[inline]
    pub fn is_alpha(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || c == ':'
    }

    #[inline]
    pub fn is_alpha_numeric(c: char) -> bool {
        Self::is_alpha(c) || Self::is_digit(c)
    }

    fn scan_token(&mut self) -> Result<()> {
        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            '[' => self.add_token(TokenKind::LeftBracket),
            ']' => self.add_token(TokenKind::RightBracket),
            ',' => self.add_token(TokenKind::Comma),
            '=' => self.add_token(TokenKind::Equal),
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '/' => {
                if !self.matches('/') {
                    return Err(self.error(ErrorKind::UnexpectedToken));
                }
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '\'' | '"' => self.scan_string(c)?,
            c if Self::is_digit(c) => self.scan_number(c)?,
            c if Self::is_alpha(c) => self.scan_identifier(),
            _ => return Err(self.error(ErrorKind::UnexpectedToken)),
        }

        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.line, self.start).with_path(self.path.clone())
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = self.make_token(kind);
        self.tokens.push(token);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Value) {
        let token = self.make_token(kind).with_literal(literal);
        self.tokens.push(token);
    }

    /// Terminates the stream with an end-of-input marker and reports `kind` at it.
    fn error(&mut self, kind: ErrorKind) -> Error {
        let token = self.make_token(TokenKind::Eof);
        self.tokens.push(token.clone());
        Error::scan(kind, token)
    }

    fn scan_string(&mut self, quote: char) -> Result<()> {
        let first_line = self.line;
        while let Some(c) = self.peek() {
            if c == quote {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            if c == '\\' {
                self.advance();
                if self.peek() == Some('\n') {
                    self.line += 1;
                }
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(self.error(ErrorKind::UnterminatedString));
        }

        // closing quote
        self.advance();

        let body = &self.source[self.start + 1..self.current - 1];
        let token = Token::new(TokenKind::String, self.lexeme(), first_line, self.start)
            .with_literal(Value::String(unescape(body)))
            .with_path(self.path.clone());
        self.tokens.push(token);
        Ok(())
    }

    fn scan_number(&mut self, first: char) -> Result<()> {
        let radix = match (first, self.peek()) {
            ('0', Some('x')) => 16,
            ('0', Some('b')) => 2,
            _ => 10,
        };

        if radix != 10 {
            self.advance(); // prefix letter
            let digits_start = self.current;
            let is_digit: fn(char) -> bool = if radix == 16 {
                Self::is_hex_digit
            } else {
                Self::is_bin_digit
            };
            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
            let digits = &self.source[digits_start..self.current];
            return match i64::from_str_radix(digits, radix) {
                Ok(n) => {
                    self.add_literal(TokenKind::Number, Value::Int(n));
                    Ok(())
                }
                Err(_) => Err(self.error(ErrorKind::NumberParseError)),
            };
        }

        while self.peek().is_some_and(Self::is_digit) {
            self.advance();
        }

        let is_real = self.peek() == Some('.') && self.peek_next().is_some_and(Self::is_digit);
        if is_real {
            self.advance(); // '.'
            while self.peek().is_some_and(Self::is_digit) {
                self.advance();
            }
            return match self.lexeme().parse::<f64>() {
                Ok(f) if f.is_finite() && !self.underflows(f) => {
                    self.add_literal(TokenKind::Real, Value::Real(f));
                    Ok(())
                }
                _ => Err(self.error(ErrorKind::NumberParseError)),
            };
        }

        match self.lexeme().parse::<i64>() {
            Ok(n) => {
                self.add_literal(TokenKind::Number, Value::Int(n));
                Ok(())
            }
            // Only reachable through a preceding minus; the parser keeps it as is.
            Err(_) if self.lexeme() == MIN_MAGNITUDE && self.follows_minus() => {
                self.add_literal(TokenKind::Number, Value::Int(i64::MIN));
                Ok(())
            }
            Err(_) => Err(self.error(ErrorKind::NumberParseError)),
        }
    }

    /// A nonzero literal that rounds to zero.
    fn underflows(&self, f: f64) -> bool {
        f == 0.0 && self.lexeme().bytes().any(|b| matches!(b, b'1'..=b'9'))
    }

    fn follows_minus(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.kind == TokenKind::Minus)
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(Self::is_alpha_numeric) {
            self.advance();
        }

        let kind = match self.lexeme() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            _ => TokenKind::SectionName,
        };
        self.add_token(kind);
    }
}

/// Scans `source` into tokens.
///
/// # Errors
///
/// See [`Scanner::scan_tokens`].
pub fn scan(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).unwrap().iter().map(|t| t.kind).collect()
    }

    fn scan_err(source: &str) -> Error {
        scan(source).unwrap_err()
    }

    #[test]
    fn test_character_classes() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(Scanner::is_alpha(c));
            assert!(!Scanner::is_digit(c));
            assert!(Scanner::is_alpha_numeric(c));
        }
        for c in '0'..='9' {
            assert!(!Scanner::is_alpha(c));
            assert!(Scanner::is_digit(c));
            assert!(Scanner::is_alpha_numeric(c));
            assert!(Scanner::is_hex_digit(c));
        }
        for c in ('a'..='f').chain('A'..='F') {
            assert!(Scanner::is_hex_digit(c));
        }
        for c in ('g'..='z').chain('G'..='Z') {
            assert!(!Scanner::is_hex_digit(c));
        }
        assert!(Scanner::is_alpha('_'));
        assert!(Scanner::is_alpha(':'));
        assert!(Scanner::is_bin_digit('1'));
        assert!(Scanner::is_bin_digit('0'));
        assert!(!Scanner::is_bin_digit('2'));
    }

    #[test]
    fn test_token_stream() {
        let tokens =
            scan("{}[],\"Hello\"'World'\n\r\t0x123 0b101 200 3.1415 true false nil =").unwrap();

        let expected: Vec<(usize, &str, TokenKind, Value)> = vec![
            (1, "{", TokenKind::LeftBrace, Value::Nil),
            (1, "}", TokenKind::RightBrace, Value::Nil),
            (1, "[", TokenKind::LeftBracket, Value::Nil),
            (1, "]", TokenKind::RightBracket, Value::Nil),
            (1, ",", TokenKind::Comma, Value::Nil),
            (1, "\"Hello\"", TokenKind::String, Value::from("Hello")),
            (1, "'World'", TokenKind::String, Value::from("World")),
            (2, "0x123", TokenKind::Number, Value::Int(0x123)),
            (2, "0b101", TokenKind::Number, Value::Int(0b101)),
            (2, "200", TokenKind::Number, Value::Int(200)),
            (2, "3.1415", TokenKind::Real, Value::Real(3.1415)),
            (2, "true", TokenKind::True, Value::Nil),
            (2, "false", TokenKind::False, Value::Nil),
            (2, "nil", TokenKind::Nil, Value::Nil),
            (2, "=", TokenKind::Equal, Value::Nil),
            (2, "", TokenKind::Eof, Value::Nil),
        ];

        assert_eq!(tokens.len(), expected.len());
        for (token, (line, lexeme, kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.line, line, "line of {}", token);
            assert_eq!(token.lexeme, lexeme);
            assert_eq!(token.kind, kind);
            assert_eq!(token.literal, literal);
        }
    }

    #[test]
    fn test_offsets() {
        let tokens = scan("{ab = -12}").unwrap();
        let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 1, 4, 6, 7, 9, 10]);
    }

    #[test]
    fn test_signs_are_separate_tokens() {
        assert_eq!(
            kinds("-1 +2.5"),
            vec![
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Real,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_comments() {
        assert_eq!(kinds("// only a comment"), vec![TokenKind::Eof]);
        let tokens = scan("1 // one\n2").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].literal, Value::Int(2));
    }

    #[test]
    fn test_identifiers() {
        let tokens = scan("_private ns:key k2 nil_value").unwrap();
        assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::SectionName));
        assert_eq!(tokens[1].lexeme, "ns:key");
        assert_eq!(tokens[3].lexeme, "nil_value");
    }

    #[test]
    fn test_string_escapes() {
        let tokens = scan(r#""a \"quoted\" word" 'it\'s'"#).unwrap();
        assert_eq!(tokens[0].literal, Value::from("a \"quoted\" word"));
        assert_eq!(tokens[1].literal, Value::from("it's"));
    }

    #[test]
    fn test_multiline_string_counts_lines() {
        let tokens = scan("'one\ntwo' x").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].literal, Value::from("one\ntwo"));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unicode_in_strings() {
        let tokens = scan("\"héllo wörld\" 1").unwrap();
        assert_eq!(tokens[0].literal, Value::from("héllo wörld"));
        assert_eq!(tokens[1].offset, "\"héllo wörld\" ".len());
    }

    #[test]
    fn test_real_requires_digit_after_dot() {
        assert_eq!(
            scan_err("1.").kind(),
            ErrorKind::UnexpectedToken,
            "a trailing dot is not part of the number"
        );
    }

    #[test]
    fn test_scanner_failures() {
        assert_eq!(scan_err("\"String").kind(), ErrorKind::UnterminatedString);
        assert_eq!(scan_err("'String").kind(), ErrorKind::UnterminatedString);
        assert_eq!(scan_err("/").kind(), ErrorKind::UnexpectedToken);
        assert_eq!(scan_err("/ 1").kind(), ErrorKind::UnexpectedToken);
        assert_eq!(scan_err("@").kind(), ErrorKind::UnexpectedToken);
        assert!(scan_err("@").is_scan());
    }

    #[test]
    fn test_error_carries_synthetic_eof() {
        let err = scan_err("{a = 'open");
        let token = err.token().unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.lexeme, "'open");
        assert_eq!(token.offset, 5);
    }

    #[test]
    fn test_number_failures() {
        assert_eq!(scan_err("0x").kind(), ErrorKind::NumberParseError);
        assert_eq!(scan_err("0b").kind(), ErrorKind::NumberParseError);
        assert_eq!(
            scan_err("0xFFFFFFFFFFFFFFFF").kind(),
            ErrorKind::NumberParseError
        );
        assert_eq!(
            scan_err("99999999999999999999").kind(),
            ErrorKind::NumberParseError
        );
    }

    #[test]
    fn test_real_out_of_range() {
        let huge = format!("1{}.5", "0".repeat(400));
        assert_eq!(scan_err(&huge).kind(), ErrorKind::NumberParseError);

        let tiny = format!("0.{}1", "0".repeat(400));
        assert_eq!(scan_err(&tiny).kind(), ErrorKind::NumberParseError);

        let zero = format!("0.{}", "0".repeat(400));
        assert_eq!(scan(&zero).unwrap()[0].literal, Value::Real(0.0));
    }

    #[test]
    fn test_min_magnitude_needs_minus() {
        let tokens = scan("-9223372036854775808").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[1].literal, Value::Int(i64::MIN));

        assert_eq!(
            scan_err("9223372036854775808").kind(),
            ErrorKind::NumberParseError
        );
        assert_eq!(
            scan_err("+9223372036854775808").kind(),
            ErrorKind::NumberParseError
        );
        assert_eq!(
            scan_err("-9223372036854775809").kind(),
            ErrorKind::NumberParseError
        );
    }

    #[test]
    fn test_hex_and_binary() {
        let tokens = scan("0xff 0XFF 0b11").unwrap();
        assert_eq!(tokens[0].literal, Value::Int(255));
        // uppercase prefix is not a hex prefix: `0` then identifier `XFF`
        assert_eq!(tokens[1].literal, Value::Int(0));
        assert_eq!(tokens[2].kind, TokenKind::SectionName);
        assert_eq!(tokens[3].literal, Value::Int(3));
    }

    #[test]
    fn test_path_label() {
        let tokens = Scanner::new("1")
            .with_path(Some(Arc::from("a.cfg")))
            .scan_tokens()
            .unwrap();
        assert!(tokens.iter().all(|t| t.path.as_deref() == Some("a.cfg")));
    }
}
