//! Fault types for value access and parsing.

use alloc::string::String;

use thiserror::Error;

/// A fault raised by the read-only accessors and by strict retrieval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The operation required a different variant than the one present.
    #[error("expected {expected}, found {found}")]
    WrongVariant {
        expected: &'static str,
        found: &'static str,
    },
    /// Read-only keyed access on an object missing the requested key.
    #[error("key {key:?} not found in object")]
    KeyNotFound { key: String },
    /// Read-only indexed access at or beyond the array length.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Strict retrieval where the variant does not match the requested
    /// category.
    #[error("cannot extract {requested} from {found}")]
    TypeMismatch {
        requested: &'static str,
        found: &'static str,
    },
}

/// A fatal fault detected while scanning JSON text.
///
/// Parsing aborts at the first fault; no partial tree is returned. The error
/// carries the byte offset at which the fault was detected and a short
/// excerpt of the surrounding text with line breaks stripped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte {offset}, near: {context}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
    pub context: String,
}

/// What went wrong at the fault position.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("expected string key")]
    ExpectedKey,
    #[error("expected ':' after object key")]
    ExpectedColon,
    #[error("expected ',' or ']'")]
    ExpectedCommaOrBracket,
    #[error("expected ',' or '}}'")]
    ExpectedCommaOrBrace,
    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
    #[error("invalid number literal")]
    InvalidNumber,
}
