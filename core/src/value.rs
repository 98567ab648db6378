//! Scanned values and their conversion into destination types.

use serde::Serialize;

/// A value extracted from raw option text by a scan format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value<'a> {
    /// Raw text (`%s`).
    Str(&'a str),
    /// Boolean (`%b`).
    Bool(bool),
    /// Signed integer (`%d`, `%i`).
    Int(i64),
    /// Unsigned integer (`%u`, `%x`, `%o`).
    Uint(u64),
    /// Floating point (`%f`, `%e`, `%g`, `%a`).
    Float(f64),
    /// Single character (`%c`).
    Char(char),
}

/// Conversion from a scanned [`Value`] into a destination type.
///
/// Returns `None` when the value's kind does not match or a number does not
/// fit the destination range.
///
/// # Examples
///
/// ```
/// use shortopt_core::{FromValue, Value};
///
/// assert_eq!(i32::from_value(Value::Int(42)), Some(42));
/// assert_eq!(u8::from_value(Value::Int(300)), None);
/// assert_eq!(String::from_value(Value::Float(1.0)), None);
/// ```
pub trait FromValue<'a>: Sized {
    fn from_value(value: Value<'a>) -> Option<Self>;
}

impl<'a> FromValue<'a> for Value<'a> {
    fn from_value(value: Value<'a>) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: Value<'a>) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl FromValue<'_> for String {
    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.to_string()),
            _ => None,
        }
    }
}

impl FromValue<'_> for bool {
    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromValue<'_> for char {
    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl FromValue<'_> for f64 {
    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }
}

/// Finite doubles outside the `f32` range are rejected; infinities and NaN
/// carry over.
impl FromValue<'_> for f32 {
    fn from_value(value: Value<'_>) -> Option<Self> {
        match value {
            Value::Float(v) => {
                let narrowed = v as f32;
                (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
            }
            _ => None,
        }
    }
}

macro_rules! impl_from_value_int {
    ($($t:ty),*) => {
        $(
            impl FromValue<'_> for $t {
                fn from_value(value: Value<'_>) -> Option<Self> {
                    match value {
                        Value::Int(v) => <$t>::try_from(v).ok(),
                        Value::Uint(v) => <$t>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
