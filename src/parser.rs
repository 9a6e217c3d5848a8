//! Recursive-descent parsing of a token sequence into a [`Value`].
//!
//! ## Grammar
//!
//! ```text
//! object   := section | list | boolean | nil | literal
//! section  := '{' (key '=' object)* '}'
//! key      := SECTION_NAME | STRING
//! list     := '[' object* ']'
//! boolean  := 'true' | 'false'
//! nil      := 'nil'
//! literal  := ['+' | '-'] (NUMBER | REAL) | STRING
//! ```
//!
//! Each alternative is chosen from the kind of the current token alone; the parser
//! never backtracks. Entries and elements are separated by whitespace only, so a
//! comma between them is an error. A key that appears twice in one section keeps
//! the last value.
//!
//! ## Usage
//!
//! ```rust
//! use serde_cfg::{Parser, Value};
//!
//! let value = Parser::from_source("[1 -2 +3.1 -4]").unwrap().parse().unwrap();
//! assert_eq!(
//!     value,
//!     Value::List(vec![
//!         Value::Int(1),
//!         Value::Int(-2),
//!         Value::Real(3.1),
//!         Value::Int(-4),
//!     ])
//! );
//! ```

use crate::options::DEFAULT_MAX_DEPTH;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};
use crate::{Error, ErrorKind, Result, Section, Value};

/// Builds a [`Value`] tree from tokens produced by the [`Scanner`].
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a parser over a complete token sequence.
    ///
    /// A missing trailing end-of-input token is supplied, so any sequence is safe
    /// to parse.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let (line, offset) = tokens
                .last()
                .map_or((1, 0), |t| (t.line, t.offset + t.lexeme.len()));
            tokens.push(Token::new(TokenKind::Eof, "", line, offset));
        }
        Parser {
            tokens,
            current: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Scans `source` and creates a parser over its tokens.
    ///
    /// # Errors
    ///
    /// Returns the scan error if the source cannot be tokenized.
    pub fn from_source(source: &str) -> Result<Self> {
        Ok(Parser::new(Scanner::new(source).scan_tokens()?))
    }

    /// Limits how deeply sections and lists may nest.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses one root object and requires the input to end after it.
    ///
    /// # Errors
    ///
    /// Returns a parse error carrying the offending token on malformed input.
    pub fn parse(mut self) -> Result<Value> {
        let root = self.object()?;
        if !self.is_at_end() {
            return Err(self.error(ErrorKind::ExpectedEndOfInput));
        }
        Ok(root)
    }

    fn object(&mut self) -> Result<Value> {
        match self.peek().kind {
            TokenKind::LeftBrace => self.nested(Self::section),
            TokenKind::LeftBracket => self.nested(Self::list),
            TokenKind::True | TokenKind::False => {
                let token = self.advance();
                Ok(Value::Bool(token.kind == TokenKind::True))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Value::Nil)
            }
            _ => self.literal(),
        }
    }

    fn nested(&mut self, rule: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        if self.depth >= self.max_depth {
            return Err(self.error(ErrorKind::RecursionLimitExceeded));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn section(&mut self) -> Result<Value> {
        self.advance(); // {
        let mut section = Section::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let key = self.section_key()?;
            self.consume(TokenKind::Equal, ErrorKind::ExpectedEqual)?;
            let value = self.object()?;
            section.insert(key, value);
        }

        self.consume(TokenKind::RightBrace, ErrorKind::MissingRightBrace)?;
        Ok(Value::Section(section))
    }

    fn section_key(&mut self) -> Result<String> {
        match self.peek().kind {
            TokenKind::SectionName => Ok(self.advance().lexeme.clone()),
            TokenKind::String => match self.advance().literal.clone() {
                Value::String(key) => Ok(key),
                _ => Err(self.error(ErrorKind::ExpectedSectionName)),
            },
            _ => Err(self.error(ErrorKind::ExpectedSectionName)),
        }
    }

    fn list(&mut self) -> Result<Value> {
        self.advance(); // [
        let mut list = Vec::new();

        while !self.check(TokenKind::RightBracket) && !self.is_at_end() {
            list.push(self.object()?);
        }

        self.consume(TokenKind::RightBracket, ErrorKind::MissingRightBracket)?;
        Ok(Value::List(list))
    }

    fn literal(&mut self) -> Result<Value> {
        let negate = match self.peek().kind {
            TokenKind::Minus => {
                self.advance();
                Some(true)
            }
            TokenKind::Plus => {
                self.advance();
                Some(false)
            }
            _ => None,
        };

        match (self.peek().kind, negate) {
            (TokenKind::Number | TokenKind::Real, _) => {
                let literal = self.peek().literal.clone();
                let value = match (literal, negate) {
                    // the scanner already folded the sign into `i64::MIN`
                    (Value::Int(i64::MIN), Some(true)) => Value::Int(i64::MIN),
                    (Value::Int(n), Some(true)) => match n.checked_neg() {
                        Some(n) => Value::Int(n),
                        None => return Err(self.error(ErrorKind::NumberParseError)),
                    },
                    (Value::Real(f), Some(true)) => Value::Real(-f),
                    (literal @ (Value::Int(_) | Value::Real(_)), _) => literal,
                    _ => return Err(self.error(ErrorKind::UnexpectedToken)),
                };
                self.advance();
                Ok(value)
            }
            (TokenKind::String, None) => Ok(self.advance().literal.clone()),
            _ => Err(self.error(ErrorKind::UnexpectedToken)),
        }
    }

    fn consume(&mut self, kind: TokenKind, error: ErrorKind) -> Result<&Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error(error))
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::parse(kind, self.peek().clone())
    }
}
