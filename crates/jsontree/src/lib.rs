//! An owned JSON value tree with a bidirectional text codec.
//!
//! [`Value`] is a six-variant sum type covering every JSON datum. A tree is
//! built from literals, the [`json!`] macro, or [`parse`], mutated through
//! vivifying accessors (`value["key"][index] = ...` works from any starting
//! variant), read back leniently ([`Value::get`]) or strictly
//! ([`Value::strict_get`]), and rendered back to text with
//! [`Value::serialize`].
//!
//! ```
//! use jsontree::{json, parse};
//!
//! let mut config = parse(r#"{"name":"demo","retries":3}"#).unwrap();
//! config["limits"]["depth"] = json!(8);
//!
//! assert_eq!(config["retries"].get::<u32>(), 3);
//! assert_eq!(
//!     config.serialize(),
//!     r#"{"limits":{"depth":8},"name":"demo","retries":3}"#,
//! );
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod access;
mod error;
mod macros;
mod parser;
mod ser;
mod value;

#[cfg(test)]
mod tests;

pub use access::Scalar;
pub use error::{AccessError, ParseError, ParseErrorKind};
pub use parser::parse;
pub use value::{Array, Map, Value};

#[doc(hidden)]
pub use alloc::vec;
