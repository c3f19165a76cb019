//! Serialization: rendering a [`Value`] tree as JSON text.
//!
//! The serializer is the [`core::fmt::Display`] impl; [`Value::serialize`]
//! is the owned-string convenience over it. Rendering is recursive and
//! bottom-up, with no configurable indentation.

use alloc::string::{String, ToString};
use core::fmt;

use crate::value::Value;

/// Escapes a string for inclusion in a JSON string literal.
///
/// `"` and `\` take a preceding backslash; characters below U+0020 use the
/// two-character shorthands where one exists (`\b \t \n \f \r`) and `\u00XX`
/// otherwise. Everything else passes through unchanged, so output is UTF-8,
/// not forced ASCII.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\r' => f.write_str("\\r")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => {
                // The float Display is shortest-round-trip, so whole numbers
                // come out without a decimal point and fractions without
                // trailing zeros. Non-finite numbers have no JSON form.
                if n.is_finite() {
                    write!(f, "{n}")
                } else {
                    f.write_str("null")
                }
            }
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for v in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Value {
    /// Renders the tree as JSON text.
    ///
    /// Object members are written in map iteration order (key-sorted), not
    /// insertion order. Non-finite numbers render as `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert_eq!(Value::from(3.0).serialize(), "3");
    /// assert_eq!(Value::from(3.14).serialize(), "3.14");
    /// assert_eq!(Value::from("a\"b").serialize(), r#""a\"b""#);
    /// ```
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}
