//! # serde_cfg
//!
//! A small configuration language with a scanner, a recursive-descent parser, a
//! stringifier and a Serde bridge.
//!
//! ## What does it look like?
//!
//! ```text
//! // comments run to the end of the line
//! {
//!     name = "primary"
//!     listen = { host = '0.0.0.0' port = 8080 }
//!     workers = [1 2 4 8]
//!     mask = 0xff00
//!     debug = false
//! }
//! ```
//!
//! Sections hold `key = value` entries, lists hold values, and both are separated
//! by whitespace only. Values are `nil`, booleans, 64-bit integers (decimal, `0x`
//! hex, `0b` binary), reals, quoted strings, lists and sections. See [`syntax`]
//! for the full reference.
//!
//! ## Key Features
//!
//! - **Typed tree**: every document parses into a [`Value`] with typed accessors
//! - **Precise diagnostics**: errors carry the line, byte offset and lexeme of the
//!   offending token
//! - **Order preserving**: sections keep insertion order; sorted output on request
//! - **Serde Compatible**: read config files straight into `#[derive(Deserialize)]`
//!   types and write them back
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_cfg = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Working with the value tree
//!
//! ```rust
//! use serde_cfg::parse;
//!
//! let value = parse("{server={host='localhost' ports=[80 443]}}").unwrap();
//! let server = value.get("server").unwrap();
//!
//! assert_eq!(server.get("host").unwrap().as_str().unwrap(), "localhost");
//! assert_eq!(server.get("ports").unwrap().get(1).unwrap().as_int().unwrap(), 443);
//! assert_eq!(value.to_string(), r#"{server={host="localhost" ports=[80 443]}}"#);
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_cfg::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//!     verbose: bool,
//! }
//!
//! let server: Server = from_str("{host='localhost' port=8080 verbose=true}").unwrap();
//! assert_eq!(server.port, 8080);
//!
//! let text = to_string(&server).unwrap();
//! assert_eq!(text, r#"{host="localhost" port=8080 verbose=true}"#);
//! assert_eq!(from_str::<Server>(&text).unwrap(), server);
//! ```
//!
//! ### Building values with the config! macro
//!
//! ```rust
//! use serde_cfg::config;
//!
//! let value = config!({ name: "demo", retries: 3, tags: ["a", "b"] });
//! assert_eq!(value.get("retries").unwrap().as_int().unwrap(), 3);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Nesting depth is bounded (see [`ParseOptions::with_max_depth`])
//! - No panics in the public API; failures are reported as [`Error`]
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - reading a config file into a struct
//! - **`macro.rs`** - building values with the config! macro
//! - **`dynamic_values.rs`** - walking and editing a `Value` tree
//! - **`custom_options.rs`** - key order, escaping and depth limits
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod ser;
pub mod syntax;
pub mod token;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, ErrorKind, Result};
pub use escape::{escape, unescape};
pub use map::Section;
pub use options::{KeyOrder, ParseOptions, StringifyOptions};
pub use parser::Parser;
pub use scanner::{scan, Scanner};
pub use ser::{stringify, stringify_with_options, Renderer, Stringifier, ValueSerializer};
pub use token::{Token, TokenKind};
pub use value::{Value, ValueKind};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Parses config text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{parse, Value};
///
/// let value = parse("{x=10 pi=3.1415}").unwrap();
/// assert_eq!(value.get("x").unwrap(), &Value::Int(10));
/// ```
///
/// # Errors
///
/// Returns a scan or parse error pointing at the first offending token.
pub fn parse(source: &str) -> Result<Value> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parses config text with a custom nesting limit or source label.
///
/// # Errors
///
/// Returns a scan or parse error pointing at the first offending token.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Value> {
    let tokens = Scanner::new(source)
        .with_path(options.path.clone())
        .scan_tokens()?;
    Parser::new(tokens).with_max_depth(options.max_depth).parse()
}

/// Reads and parses a config file. Errors are labelled with the file's path.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, otherwise any scan or parse
/// error.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
    let options = ParseOptions {
        path: Some(Arc::from(path.to_string_lossy().as_ref())),
        ..ParseOptions::default()
    };
    parse_with_options(&source, &options)
}

/// Serialize any `T: Serialize` to config text.
///
/// Strings are escaped so that the output always reads back.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_cfg::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: -2 }).unwrap(), "{x=1 y=-2}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a `u64` above
/// `i64::MAX`, or a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &StringifyOptions::lossless())
}

/// Serialize any `T: Serialize` to config text with custom options.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use serde_cfg::{to_string_with_options, KeyOrder, StringifyOptions};
///
/// let mut map = HashMap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
///
/// let options = StringifyOptions::lossless().with_key_order(KeyOrder::Sorted);
/// assert_eq!(to_string_with_options(&map, &options).unwrap(), "{a=1 b=2}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &StringifyOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(stringify_with_options(&to_value(value)?, options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_cfg::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_section());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as config text into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2, 3]).unwrap();
/// assert_eq!(buffer, b"[1 2 3]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{from_value, Value};
///
/// let numbers: Vec<i32> = from_value(Value::List(vec![Value::Int(1), Value::Int(2)])).unwrap();
/// assert_eq!(numbers, vec![1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if the value does not have the shape `T` expects.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Deserialize an instance of type `T` from config text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_cfg::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{x=1 y=2}").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text does not parse (with line and offset of the
/// offending token) or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(s)?)
}

/// Deserialize an instance of type `T` from an I/O stream of config text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_cfg::from_reader;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"{x=1 y=2}")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the text does not parse, or the data cannot
/// be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of config text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, do not parse, or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
