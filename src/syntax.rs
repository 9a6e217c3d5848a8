//! Config Language Reference
//!
//! This module documents the text format read by [`parse`](crate::parse) and written
//! by [`stringify`](crate::stringify). It contains no code.
//!
//! # Overview
//!
//! A document is exactly one value. Usually that value is a section:
//!
//! ```text
//! // server settings
//! {
//!     name = "primary"
//!     listen = { host = '0.0.0.0' port = 8080 }
//!     workers = [1 2 4 8]
//!     ratio = 0.75
//!     mask = 0xff00
//!     flags = 0b1010
//!     debug = false
//!     parent = nil
//! }
//! ```
//!
//! Whitespace (space, tab, carriage return, newline) separates tokens and is
//! otherwise ignored. Commas are **not** separators: `{a=1, b=2}` is an error.
//!
//! # Values
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | Nil | `nil` | `parent = nil` |
//! | Bool | `true` or `false` | `debug = true` |
//! | Int | decimal, `0x` hex or `0b` binary digits, optional sign | `-12`, `0x1F`, `0b11` |
//! | Real | digits `.` digits, optional sign | `3.1415`, `-0.5` |
//! | String | `"..."` or `'...'` | `"hello"`, `'world'` |
//! | List | `[` values `]` | `[1 'two' 3.0]` |
//! | Section | `{` key `=` value ... `}` | `{x=1 y=2}` |
//!
//! ## Numbers
//!
//! - Integers are signed 64-bit. Literals outside that range are rejected.
//! - A real needs at least one digit on both sides of the point: `1.` and `.5` are
//!   not reals.
//! - Hex and binary literals are always integers.
//! - `+` and `-` are separate tokens that apply only to the number directly after
//!   them: `- 5` is `-5`, while `-true` is an error.
//!
//! ```rust
//! use serde_cfg::{parse, Value};
//!
//! assert_eq!(parse("0x1F").unwrap(), Value::Int(31));
//! assert_eq!(parse("0b11").unwrap(), Value::Int(3));
//! assert_eq!(parse("- 5").unwrap(), Value::Int(-5));
//! assert_eq!(parse("+0.25").unwrap(), Value::Real(0.25));
//! assert!(parse("-true").is_err());
//! assert!(parse("99999999999999999999").is_err());
//! ```
//!
//! ## Strings
//!
//! Either quote character opens a string, and the same character closes it. Strings
//! may span lines. A backslash always consumes the next character, so `\"` never
//! closes a string. These escapes are interpreted:
//!
//! | Escape | Character |
//! |--------|-----------|
//! | `\"` `\'` `\\` | the quote or backslash itself |
//! | `\n` `\t` `\r` | newline, tab, carriage return |
//! | `\v` `\a` `\b` `\f` | vertical tab, bell, backspace, form feed |
//! | `\0` | NUL |
//!
//! Any other backslash pair is kept as written.
//!
//! ```rust
//! use serde_cfg::{parse, Value};
//!
//! assert_eq!(parse(r#"'it\'s'"#).unwrap(), Value::from("it's"));
//! assert_eq!(parse(r#""a\tb""#).unwrap(), Value::from("a\tb"));
//! assert_eq!(parse(r#""C:\dir""#).unwrap(), Value::from("C:\\dir"));
//! ```
//!
//! # Sections
//!
//! Keys are identifiers or quoted strings. Identifiers start with an ASCII letter,
//! `_` or `:` and continue with letters, digits, `_` or `:`. The words `true`,
//! `false` and `nil` are keywords and must be quoted to be used as keys.
//!
//! When a key appears twice, the later value replaces the earlier one and the entry
//! keeps its first position.
//!
//! ```rust
//! use serde_cfg::parse;
//!
//! let value = parse(r#"{ns:key=1 "two words"=2 "nil"=3 ns:key=4}"#).unwrap();
//! assert_eq!(value.get("ns:key").unwrap().as_int().unwrap(), 4);
//! assert_eq!(value.get("two words").unwrap().as_int().unwrap(), 2);
//! assert_eq!(value.to_string(), r#"{ns:key=4 "two words"=2 "nil"=3}"#);
//! ```
//!
//! # Comments
//!
//! `//` starts a comment that runs to the end of the line. A single `/` is an error.
//!
//! ```rust
//! use serde_cfg::parse;
//!
//! assert!(parse("{a=1 // trailing\n b=2}").is_ok());
//! assert!(parse("{a=1 / 2}").is_err());
//! ```
//!
//! # Output Form
//!
//! The stringifier writes everything on one line, separating list elements and
//! section entries with a single space:
//!
//! - reals always carry a decimal point (`2.0`) so they read back as reals
//! - reals that are NaN or infinite have no literal and are written as `nil`
//! - strings are written between double quotes; escaping is off unless
//!   [`StringifyOptions::with_escape_strings`](crate::StringifyOptions::with_escape_strings)
//!   is set
//! - keys that are not plain identifiers are quoted
//!
//! ```rust
//! use serde_cfg::{parse, stringify};
//!
//! let value = parse("{ a = 2.0 b = [ 'x' ] }").unwrap();
//! assert_eq!(stringify(&value), r#"{a=2.0 b=["x"]}"#);
//! assert_eq!(parse(&stringify(&value)).unwrap(), value);
//! ```
//!
//! # Errors
//!
//! Scanning and parsing stop at the first problem. The error names the line, the
//! byte offset and the text of the offending token:
//!
//! ```rust
//! use serde_cfg::{parse, ErrorKind};
//!
//! let err = parse("{\n  port = 80,\n}").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ExpectedSectionName);
//! assert_eq!(err.to_string(), "Expected section name at line 2, offset 13 near ','");
//! ```
