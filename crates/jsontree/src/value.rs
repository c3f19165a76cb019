//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, together with its constructors, variant predicates, and direct
//! container accessors.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::error::AccessError;

/// The mapping backing [`Value::Object`].
///
/// Member insertion order is not preserved; iteration is in key order.
pub type Map = BTreeMap<String, Value>;
/// The sequence backing [`Value::Array`].
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number (a double; integers and reals are not distinguished)
/// - String
/// - Array
/// - Object
///
/// Cloning is always a deep copy, and ownership is strictly tree-shaped:
/// every element of an `Array` and every entry of an `Object` is owned by its
/// container and dropped with it.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
// Enable serde support for tests and when the optional `serde` feature is
// activated by downstream crates.  The `cfg_attr` conditional keeps the core
// crate free of a serde dependency in normal builds.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

// Every primitive numeric type collapses to the double representation.
// Integers beyond 2^53 lose precision; that is a property of the number
// model, not of the conversion.
macro_rules! impl_from_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
            fn from(v: $ty) -> Self {
                Self::Number(v as f64)
            }
        }
    )*};
}

impl_from_numeric!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize, f32);

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Array(vec![Value::Null]).is_array());
    /// assert!(!Value::Null.is_array());
    /// ```
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Builds an array value from anything convertible to [`Value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let v = Value::array([Value::from(1), Value::from("two")]);
    /// assert_eq!(v.serialize(), r#"[1,"two"]"#);
    /// ```
    pub fn array<T, I>(items: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds an object value from key/value pairs.
    ///
    /// Keys are unique; a repeated key overwrites the earlier entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let v = Value::object([("a", Value::from(1)), ("b", Value::from(true))]);
    /// assert_eq!(v.serialize(), r#"{"a":1,"b":true}"#);
    /// ```
    pub fn object<K, T, I>(entries: I) -> Self
    where
        K: Into<String>,
        T: Into<Value>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The canonical null value.
    ///
    /// Handy where a `&Value` is needed without owning one; read-only
    /// `Index` lookups that miss resolve to this instance.
    #[must_use]
    pub fn null() -> &'static Value {
        static NULL: Value = Value::Null;
        &NULL
    }

    /// Takes the value out, leaving `Null` behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let mut v = Value::from(5);
    /// let moved = v.take();
    /// assert!(v.is_null());
    /// assert_eq!(moved, Value::Number(5.0));
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Returns the element count for [`Array`] and `0` for every other
    /// variant, including [`Object`].
    ///
    /// [`Array`]: Value::Array
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert_eq!(Value::array([Value::Null, Value::Null]).len(), 2);
    /// assert_eq!(Value::object([("a", Value::Null)]).len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Returns `true` if [`len`](Self::len) is `0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the underlying sequence of an [`Array`].
    ///
    /// Any other variant is a [`WrongVariant`] fault.
    ///
    /// [`Array`]: Value::Array
    /// [`WrongVariant`]: AccessError::WrongVariant
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::WrongVariant`] if the value is not an array.
    pub fn as_array(&self) -> Result<&Array, AccessError> {
        match self {
            Self::Array(items) => Ok(items),
            other => Err(AccessError::WrongVariant {
                expected: "array",
                found: other.type_name(),
            }),
        }
    }

    /// Mutably borrows the underlying sequence of an [`Array`].
    ///
    /// [`Array`]: Value::Array
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::WrongVariant`] if the value is not an array.
    pub fn as_array_mut(&mut self) -> Result<&mut Array, AccessError> {
        match self {
            Self::Array(items) => Ok(items),
            other => Err(AccessError::WrongVariant {
                expected: "array",
                found: other.type_name(),
            }),
        }
    }

    /// Borrows the underlying mapping of an [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::WrongVariant`] if the value is not an object.
    pub fn as_object(&self) -> Result<&Map, AccessError> {
        match self {
            Self::Object(map) => Ok(map),
            other => Err(AccessError::WrongVariant {
                expected: "object",
                found: other.type_name(),
            }),
        }
    }

    /// Mutably borrows the underlying mapping of an [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::WrongVariant`] if the value is not an object.
    pub fn as_object_mut(&mut self) -> Result<&mut Map, AccessError> {
        match self {
            Self::Object(map) => Ok(map),
            other => Err(AccessError::WrongVariant {
                expected: "object",
                found: other.type_name(),
            }),
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(..) => "boolean",
            Self::Number(..) => "number",
            Self::String(..) => "string",
            Self::Array(..) => "array",
            Self::Object(..) => "object",
        }
    }
}
