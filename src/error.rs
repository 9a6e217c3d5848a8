//! Error types for scanning, parsing and value access.
//!
//! Every failure in this crate is reported through the single [`Error`] type.
//! Scan and parse errors are fatal to the parse attempt and carry the offending
//! [`Token`], so a diagnostic can name the line, byte offset and lexeme. Accessor
//! errors ([`Error::TypeMismatch`], [`Error::OutOfBounds`]) are raised lazily, only
//! when a caller asks a [`Value`](crate::Value) for something it is not.
//!
//! ## Error Categories
//!
//! - **Scan errors**: unknown characters, malformed numbers, unterminated strings
//! - **Parse errors**: grammar violations such as a missing `=` or `}`
//! - **Accessor errors**: type mismatches and out-of-range lookups
//! - **I/O errors**: failures reading a config file or writing output
//!
//! ## Examples
//!
//! ```rust
//! use serde_cfg::{parse, ErrorKind};
//!
//! let err = parse("{a=1").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingRightBrace);
//! assert!(err.to_string().contains("line 1"));
//! ```

use crate::token::Token;
use crate::value::ValueKind;
use std::fmt;
use thiserror::Error;

/// The category of an [`Error`], independent of its context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedToken,
    NumberParseError,
    UnterminatedString,
    MissingRightBracket,
    MissingRightBrace,
    ExpectedEqual,
    ExpectedSectionName,
    ExpectedEndOfInput,
    RecursionLimitExceeded,
    TypeMismatch,
    OutOfBounds,
    Io,
    Custom,
}

impl ErrorKind {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedToken => "Unexpected token",
            ErrorKind::NumberParseError => "Number parse error",
            ErrorKind::UnterminatedString => "Unterminated string",
            ErrorKind::MissingRightBracket => "Expected ']'",
            ErrorKind::MissingRightBrace => "Expected '}'",
            ErrorKind::ExpectedEqual => "Expected '='",
            ErrorKind::ExpectedSectionName => "Expected section name",
            ErrorKind::ExpectedEndOfInput => "Expected end of input",
            ErrorKind::RecursionLimitExceeded => "Nesting too deep",
            ErrorKind::TypeMismatch => "Type mismatch",
            ErrorKind::OutOfBounds => "Out of bounds",
            ErrorKind::Io => "I/O error",
            ErrorKind::Custom => "Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The scanner met a character sequence it cannot turn into a token.
    #[error("{}", located(.kind, .token))]
    Scan { kind: ErrorKind, token: Box<Token> },

    /// The token stream does not match the grammar.
    #[error("{}", located(.kind, .token))]
    Parse { kind: ErrorKind, token: Box<Token> },

    /// A typed accessor was called on a value of another kind.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    /// A list index or section key does not exist.
    #[error("Out of bounds: {index} (length {len})")]
    OutOfBounds { index: String, len: usize },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, mostly raised through the Serde traits
    #[error("Error: {0}")]
    Custom(String),
}

fn located<'a>(kind: &ErrorKind, token: &'a Token) -> Located<'a> {
    Located { kind: *kind, token }
}

/// Renders "<path>: <message> at line L, offset O near <token>".
struct Located<'a> {
    kind: ErrorKind,
    token: &'a Token,
}

impl fmt::Display for Located<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.token.path {
            write!(f, "{}: ", path)?;
        }
        write!(
            f,
            "{} at line {}, offset {}",
            self.kind, self.token.line, self.token.offset
        )?;
        if !self.token.lexeme.is_empty() {
            write!(f, " near '{}'", self.token.lexeme)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a scanner error pointing at `token`.
    pub fn scan(kind: ErrorKind, token: Token) -> Self {
        Error::Scan {
            kind,
            token: Box::new(token),
        }
    }

    /// Creates a parser error pointing at `token`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cfg::{Error, ErrorKind, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Comma, ",", 4, 17);
    /// let err = Error::parse(ErrorKind::ExpectedSectionName, token);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Expected section name at line 4, offset 17 near ','"
    /// );
    /// ```
    pub fn parse(kind: ErrorKind, token: Token) -> Self {
        Error::Parse {
            kind,
            token: Box::new(token),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cfg::{Error, ValueKind};
    ///
    /// let err = Error::type_mismatch(ValueKind::String, ValueKind::Int);
    /// assert!(err.to_string().contains("expected string"));
    /// ```
    pub fn type_mismatch(expected: ValueKind, found: ValueKind) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates an out-of-bounds error for a list index or section key.
    pub fn out_of_bounds(index: impl fmt::Display, len: usize) -> Self {
        Error::OutOfBounds {
            index: index.to_string(),
            len,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Scan { kind, .. } | Error::Parse { kind, .. } => *kind,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the token a scan or parse error points at.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        match self {
            Error::Scan { token, .. } | Error::Parse { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Returns the 1-based source line of a scan or parse error.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.token().map(|token| token.line)
    }

    /// Returns `true` for errors raised by the scanner.
    #[must_use]
    pub fn is_scan(&self) -> bool {
        matches!(self, Error::Scan { .. })
    }

    /// Returns `true` for errors raised by the parser.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use std::sync::Arc;

    #[test]
    fn test_located_message_with_path() {
        let token = Token::new(TokenKind::Eof, "\"abc", 2, 5).with_path(Some(Arc::from("app.cfg")));
        let err = Error::scan(ErrorKind::UnterminatedString, token);

        assert_eq!(
            err.to_string(),
            "app.cfg: Unterminated string at line 2, offset 5 near '\"abc'"
        );
        assert_eq!(err.kind(), ErrorKind::UnterminatedString);
        assert_eq!(err.line(), Some(2));
        assert!(err.is_scan());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_located_message_without_lexeme() {
        let err = Error::parse(ErrorKind::MissingRightBrace, Token::new(TokenKind::Eof, "", 1, 4));
        assert_eq!(err.to_string(), "Expected '}' at line 1, offset 4");
    }

    #[test]
    fn test_accessor_errors_have_no_token() {
        let err = Error::out_of_bounds(3, 3);
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert!(err.token().is_none());
        assert_eq!(err.to_string(), "Out of bounds: 3 (length 3)");

        let err = Error::type_mismatch(ValueKind::Bool, ValueKind::Nil);
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "Type mismatch: expected bool, found nil");
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("missing field `port`");
        assert_eq!(err.kind(), ErrorKind::Custom);
        assert!(err.to_string().contains("missing field"));
    }
}
