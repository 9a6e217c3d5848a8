//! Backslash escapes inside quoted strings.
//!
//! The scanner only skips over escapes while looking for the closing quote;
//! interpretation happens here, after the string has been cut out of the source.

/// Interprets backslash escapes.
///
/// Recognised sequences are `\"`, `\'`, `\\`, `\n`, `\t`, `\r`, `\v`, `\a`, `\b`,
/// `\f` and `\0`. Any other backslash pair, and a trailing lone backslash, pass
/// through unchanged. This never fails.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::unescape;
///
/// assert_eq!(unescape("Hello \\\"World\\\"\\n"), "Hello \"World\"\n");
/// assert_eq!(unescape("C:\\dir"), "C:\\dir");
/// ```
#[must_use]
pub fn unescape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('v') => result.push('\u{000B}'),
            Some('a') => result.push('\u{0007}'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('0') => result.push('\0'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Inverse of [`unescape`] for text placed between double quotes.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{escape, unescape};
///
/// let text = "tab\there \"quoted\" back\\slash";
/// assert_eq!(escape(text), "tab\\there \\\"quoted\\\" back\\\\slash");
/// assert_eq!(unescape(&escape(text)), text);
/// ```
#[must_use]
pub fn escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\u{000B}' => result.push_str("\\v"),
            '\u{0007}' => result.push_str("\\a"),
            '\u{0008}' => result.push_str("\\b"),
            '\u{000C}' => result.push_str("\\f"),
            '\0' => result.push_str("\\0"),
            _ => result.push(ch),
        }
    }
    result
}
