//! Recursive-descent JSON parser over a byte cursor.
//!
//! Single pass, one byte of lookahead, no backtracking. The cursor walks
//! `input` as bytes; slices are only taken at ASCII delimiters, so multi-byte
//! characters inside strings are copied through span-wise without a decode.
//! Every fault aborts the parse and reports the byte offset it was detected
//! at, together with a short excerpt of the surrounding text.

use alloc::string::String;
use core::cmp;

use bstr::ByteSlice;

use crate::{
    error::{ParseError, ParseErrorKind},
    value::{Array, Map, Value},
};

/// How many bytes of surrounding text a fault excerpt carries on each side.
const CONTEXT_WINDOW: usize = 20;

/// Parses one JSON value out of `text`.
///
/// The parser consumes exactly one top-level value; trailing characters
/// after it are not validated. Whitespace (space, tab, CR, LF) is skipped
/// between tokens. Duplicate object keys are retained last-write-wins.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the fault kind, byte offset, and a
/// context excerpt on any malformed input; no partial tree is produced.
///
/// # Examples
///
/// ```
/// use jsontree::{parse, Value};
///
/// let v = parse(r#"{"on": true}"#).unwrap();
/// assert_eq!(v.at("on").unwrap(), &Value::Boolean(true));
///
/// assert!(parse("{ invalid json ").is_err());
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Parser {
        input: text,
        pos: 0,
    }
    .parse_value()
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Decodes the character under the cursor for diagnostics.
    fn peek_char(&self) -> char {
        let (ch, _) = bstr::decode_utf8(&self.input.as_bytes()[self.pos..]);
        ch.unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    fn eat_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }

    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        self.fail_at(kind, self.pos)
    }

    fn fail_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        let bytes = self.input.as_bytes();
        let start = offset.saturating_sub(CONTEXT_WINDOW);
        let end = cmp::min(bytes.len(), offset.saturating_add(CONTEXT_WINDOW));
        let context: String = bytes[start..end]
            .to_str_lossy()
            .chars()
            .filter(|c| !matches!(c, '\r' | '\n'))
            .collect();
        ParseError {
            kind,
            offset,
            context,
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let Some(byte) = self.peek() else {
            return Err(self.fail(ParseErrorKind::UnexpectedEnd));
        };
        match byte {
            b'"' => Ok(Value::String(self.parse_string()?)),
            b'-' | b'0'..=b'9' => self.parse_number(),
            b't' | b'f' | b'n' => self.parse_literal(),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            _ => Err(self.fail(ParseErrorKind::UnexpectedCharacter(self.peek_char()))),
        }
    }

    fn parse_literal(&mut self) -> Result<Value, ParseError> {
        let rest = &self.input[self.pos..];
        for (keyword, value) in [
            ("true", Value::Boolean(true)),
            ("false", Value::Boolean(false)),
            ("null", Value::Null),
        ] {
            if rest.starts_with(keyword) {
                self.pos += keyword.len();
                return Ok(value);
            }
        }
        Err(self.fail(ParseErrorKind::UnexpectedCharacter(self.peek_char())))
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        self.eat_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.eat_digits();
        }
        let mut end = self.pos;
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.eat_digits();
            end = self.pos;
            // A fractional tail after the exponent digits is consumed for
            // robustness but excluded from the converted lexeme.
            if self.peek() == Some(b'.') {
                self.pos += 1;
                self.eat_digits();
            }
        }
        let lexeme = &self.input[start..end];
        let n: f64 = lexeme
            .parse()
            .map_err(|_| self.fail_at(ParseErrorKind::InvalidNumber, start))?;
        Ok(Value::Number(n))
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.pos += 1; // opening quote
        let bytes = self.input.as_bytes();
        let mut out = String::with_capacity(16);
        let mut run = self.pos;
        loop {
            match bytes.get(self.pos) {
                None => return Err(self.fail(ParseErrorKind::UnexpectedEnd)),
                Some(b'"') => {
                    out.push_str(&self.input[run..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[run..self.pos]);
                    self.pos += 1;
                    self.parse_escape(&mut out)?;
                    run = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let Some(esc) = self.peek() else {
            return Err(self.fail(ParseErrorKind::UnexpectedEnd));
        };
        let ch = match esc {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                self.pos += 1;
                let decoded = self.parse_unicode_escape()?;
                out.push(decoded);
                return Ok(());
            }
            _ => return Err(self.fail(ParseErrorKind::InvalidEscape(self.peek_char()))),
        };
        self.pos += 1;
        out.push(ch);
        Ok(())
    }

    /// Decodes the 4 hex digits of a `\uXXXX` escape to a code point and
    /// encodes it as UTF-8. Unpaired surrogates cannot be encoded and come
    /// out as U+FFFD; surrogate pairs are not combined.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let start = self.pos;
        if self.input.len() < start + 4 {
            return Err(self.fail(ParseErrorKind::UnexpectedEnd));
        }
        let Some(hex) = self.input.get(start..start + 4) else {
            return Err(self.fail_at(ParseErrorKind::InvalidUnicodeEscape, start));
        };
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.fail_at(ParseErrorKind::InvalidUnicodeEscape, start));
        }
        let code = u32::from_str_radix(hex, 16)
            .map_err(|_| self.fail_at(ParseErrorKind::InvalidUnicodeEscape, start))?;
        self.pos += 4;
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.pos += 1; // '['
        self.skip_whitespace();
        let mut items = Array::new();
        if self.eat(b']') {
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            if self.eat(b',') {
                continue;
            }
            if self.eat(b']') {
                return Ok(Value::Array(items));
            }
            return Err(self.fail(if self.peek().is_none() {
                ParseErrorKind::UnexpectedEnd
            } else {
                ParseErrorKind::ExpectedCommaOrBracket
            }));
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.pos += 1; // '{'
        self.skip_whitespace();
        let mut map = Map::new();
        if self.eat(b'}') {
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.fail(ParseErrorKind::UnexpectedEnd)),
                Some(b'"') => {}
                Some(_) => return Err(self.fail(ParseErrorKind::ExpectedKey)),
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if !self.eat(b':') {
                return Err(self.fail(if self.peek().is_none() {
                    ParseErrorKind::UnexpectedEnd
                } else {
                    ParseErrorKind::ExpectedColon
                }));
            }
            let value = self.parse_value()?;
            // last write wins on duplicate keys
            map.insert(key, value);
            self.skip_whitespace();
            if self.eat(b',') {
                continue;
            }
            if self.eat(b'}') {
                return Ok(Value::Object(map));
            }
            return Err(self.fail(if self.peek().is_none() {
                ParseErrorKind::UnexpectedEnd
            } else {
                ParseErrorKind::ExpectedCommaOrBrace
            }));
        }
    }
}
