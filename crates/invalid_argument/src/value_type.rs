//! Value Type - Coarse runtime categories of values
//!
//! [`TypeOf`] reports which category a value falls into, using the same
//! vocabulary a dynamically typed host prints for its values
//! (`integer`, `double`, `NULL`, ...). Typed code rarely needs it; it is
//! meant for boundaries where untyped data such as decoded JSON arrives.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Runtime category of a value.
///
/// ## Examples
/// ```rust
/// use invalid_argument::value_type::{TypeOf, ValueType};
///
/// assert_eq!("abc".type_of(), ValueType::String);
/// assert_eq!(None::<i32>.type_of().as_str(), "NULL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Integer,
    Double,
    String,
    /// Sequences and keyed maps alike.
    Array,
    Object,
    Null,
}

impl ValueType {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::Null => "NULL",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Reports the [`ValueType`] of a value.
pub trait TypeOf {
    fn type_of(&self) -> ValueType;
}

macro_rules! impl_type_of {
    ($variant:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl TypeOf for $ty {
                #[inline]
                fn type_of(&self) -> ValueType {
                    ValueType::$variant
                }
            }
        )+
    };
}

impl_type_of!(Boolean => bool);
impl_type_of!(
    Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
impl_type_of!(Double => f32, f64);
impl_type_of!(String => char, str, String);
impl_type_of!(Null => ());
impl_type_of!(Object => Map<String, Value>);

impl TypeOf for Cow<'_, str> {
    #[inline]
    fn type_of(&self) -> ValueType {
        ValueType::String
    }
}

impl<T: TypeOf> TypeOf for Option<T> {
    fn type_of(&self) -> ValueType {
        match self {
            Some(value) => value.type_of(),
            None => ValueType::Null,
        }
    }
}

impl<T> TypeOf for [T] {
    #[inline]
    fn type_of(&self) -> ValueType {
        ValueType::Array
    }
}

impl<T, const N: usize> TypeOf for [T; N] {
    #[inline]
    fn type_of(&self) -> ValueType {
        ValueType::Array
    }
}

impl<T> TypeOf for Vec<T> {
    #[inline]
    fn type_of(&self) -> ValueType {
        ValueType::Array
    }
}

impl<K, V, S> TypeOf for HashMap<K, V, S> {
    #[inline]
    fn type_of(&self) -> ValueType {
        ValueType::Array
    }
}

impl<K, V> TypeOf for BTreeMap<K, V> {
    #[inline]
    fn type_of(&self) -> ValueType {
        ValueType::Array
    }
}

impl<T: TypeOf + ?Sized> TypeOf for &T {
    #[inline]
    fn type_of(&self) -> ValueType {
        (**self).type_of()
    }
}

impl<T: TypeOf + ?Sized> TypeOf for Box<T> {
    #[inline]
    fn type_of(&self) -> ValueType {
        (**self).type_of()
    }
}

impl TypeOf for Value {
    fn type_of(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueType::Integer,
            Value::Number(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }
}
