//! Configuration options for parsing and stringifying.
//!
//! - [`ParseOptions`]: nesting limit and diagnostic source label for the parser
//! - [`StringifyOptions`]: section key order and string escaping for the stringifier
//! - [`KeyOrder`]: how section entries are ordered on output
//!
//! ## Examples
//!
//! ```rust
//! use serde_cfg::{parse, stringify_with_options, KeyOrder, StringifyOptions};
//!
//! let value = parse("{b=1 a=2}").unwrap();
//!
//! // Insertion order is the default
//! assert_eq!(value.to_string(), "{b=1 a=2}");
//!
//! let options = StringifyOptions::new().with_key_order(KeyOrder::Sorted);
//! assert_eq!(stringify_with_options(&value, &options), "{a=2 b=1}");
//! ```

use std::sync::Arc;

/// Default maximum nesting of sections and lists accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Order in which section entries are rendered.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::KeyOrder;
///
/// assert_eq!(KeyOrder::default(), KeyOrder::Insertion);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// The order in which keys were first inserted.
    #[default]
    Insertion,
    /// Lexicographic byte order of the keys.
    Sorted,
}

/// Options controlling the parser.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{parse_with_options, ErrorKind, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(2).with_path("inline.cfg");
/// let err = parse_with_options("[[[1]]]", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::RecursionLimitExceeded);
/// assert!(err.to_string().starts_with("inline.cfg: "));
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub max_depth: usize,
    pub path: Option<Arc<str>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            path: None,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many sections and lists may nest inside each other.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Labels every token (and therefore every error) with a source path.
    #[must_use]
    pub fn with_path(mut self, path: impl AsRef<str>) -> Self {
        self.path = Some(Arc::from(path.as_ref()));
        self
    }
}

/// Options controlling the stringifier.
///
/// The defaults produce the canonical form: insertion-ordered keys and strings
/// emitted verbatim between double quotes. Verbatim strings containing `"` or `\`
/// do not parse back; enable [`StringifyOptions::with_escape_strings`] when the
/// output must round-trip arbitrary text.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{stringify_with_options, StringifyOptions, Value};
///
/// let value = Value::from("say \"hi\"");
/// let options = StringifyOptions::new().with_escape_strings(true);
/// assert_eq!(stringify_with_options(&value, &options), r#""say \"hi\"""#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StringifyOptions {
    pub key_order: KeyOrder,
    pub escape_strings: bool,
}

impl StringifyOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options whose output always parses back to an equal value
    /// (finite reals assumed): escaping on, insertion order kept.
    #[must_use]
    pub fn lossless() -> Self {
        StringifyOptions {
            escape_strings: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    #[must_use]
    pub fn with_escape_strings(mut self, escape_strings: bool) -> Self {
        self.escape_strings = escape_strings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let options = ParseOptions::new();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert!(options.path.is_none());
    }

    #[test]
    fn test_stringify_presets() {
        let options = StringifyOptions::new();
        assert_eq!(options.key_order, KeyOrder::Insertion);
        assert!(!options.escape_strings);

        let options = StringifyOptions::lossless().with_key_order(KeyOrder::Sorted);
        assert!(options.escape_strings);
        assert_eq!(options.key_order, KeyOrder::Sorted);
    }
}
