// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic field values.

use crate::config;
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::types::RequiredType;
use std::fmt;

/// A value that can be stored in a value-class field.
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Nested value-class instance.
    Instance(Instance),
}

impl Value {
    /// Runtime type name (`int`, `str`, or the class name).
    pub fn type_name(&self) -> &str {
        match self {
            Self::None => config::NONE_TYPE_NAME,
            Self::Bool(_) => config::BOOL_TYPE_NAME,
            Self::Int(_) => config::INT_TYPE_NAME,
            Self::Float(_) => config::FLOAT_TYPE_NAME,
            Self::Str(_) => config::STR_TYPE_NAME,
            Self::Instance(instance) => instance.class().name(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view; booleans count as 0/1.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Bool(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// Numeric view of any int, bool or float.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            other => other.as_int().map(|v| v as f64),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(v) => Some(v),
            _ => None,
        }
    }

    /// `self + rhs` with int/float promotion and string concatenation.
    pub fn add(&self, rhs: &Value) -> Result<Value> {
        if let (Self::Str(a), Self::Str(b)) = (self, rhs) {
            return Ok(Self::Str(format!("{a}{b}")));
        }
        if let (Some(a), Some(b)) = (self.as_int(), rhs.as_int()) {
            return a.checked_add(b).map(Self::Int).ok_or(Error::Overflow {
                op: "+",
                lhs: a,
                rhs: b,
            });
        }
        match (self.as_f64(), rhs.as_f64()) {
            (Some(a), Some(b)) => Ok(Self::Float(a + b)),
            _ => Err(Error::UnsupportedOperand {
                op: "+",
                lhs: self.type_name().to_string(),
                rhs: rhs.type_name().to_string(),
            }),
        }
    }

    /// Debug-oriented textual form (`'abc'`, `2.0`, `Point(x=1, y=2)`).
    pub fn repr(&self) -> String {
        match self {
            Self::None => "None".to_string(),
            Self::Bool(true) => "True".to_string(),
            Self::Bool(false) => "False".to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format_float(*v),
            Self::Str(v) => format!("'{}'", v.replace('\\', "\\\\").replace('\'', "\\'")),
            Self::Instance(instance) => instance.repr(),
        }
    }
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v == f64::INFINITY {
        "inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{v:?}")
    }
}

/// User-facing form: strings unquoted, instances through their class hook.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(v) => f.write_str(v),
            Self::Instance(instance) => fmt::Display::fmt(instance, f),
            other => f.write_str(&other.repr()),
        }
    }
}

/// Numbers compare across int/bool/float; everything else by kind.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Float(f), n) | (n, Self::Float(f)) => {
                n.as_int().is_some_and(|i| int_equals_float(i, *f))
            }
            _ => match (self.as_int(), other.as_int()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// Exact int/float comparison, without rounding the int through `as f64`.
#[allow(clippy::cast_possible_truncation)]
fn int_equals_float(i: i64, f: f64) -> bool {
    // 2^63, the first float past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i64 == i
}

macro_rules! impl_from_for_value {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v.into())
            }
        }
    };
}

impl_from_for_value!(bool, Bool);
impl_from_for_value!(i8, Int);
impl_from_for_value!(i16, Int);
impl_from_for_value!(i32, Int);
impl_from_for_value!(i64, Int);
impl_from_for_value!(u8, Int);
impl_from_for_value!(u16, Int);
impl_from_for_value!(u32, Int);
impl_from_for_value!(f32, Float);
impl_from_for_value!(f64, Float);
impl_from_for_value!(String, Str);
impl_from_for_value!(Instance, Instance);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::None
    }
}

/// Rust types usable as value-class fields.
///
/// Implemented for the builtin kinds here and by `#[derive(TypedFields)]`
/// for derived structs, which then nest as class-typed fields.
pub trait FieldType: Sized {
    /// Required type of a field declared with this Rust type.
    fn required_type() -> RequiredType;

    /// Convert into a dynamic value.
    fn into_value(self) -> Result<Value>;

    /// Convert from a dynamic value.
    fn from_value(value: &Value) -> Result<Self>;
}

fn conversion_error(expected: &str, got: &Value) -> Error {
    Error::Conversion {
        expected: expected.to_string(),
        got: got.type_name().to_string(),
    }
}

macro_rules! impl_field_type {
    ($ty:ty, $required:ident, $view:ident) => {
        impl FieldType for $ty {
            fn required_type() -> RequiredType {
                RequiredType::$required
            }

            fn into_value(self) -> Result<Value> {
                Ok(Value::from(self))
            }

            fn from_value(value: &Value) -> Result<Self> {
                value
                    .$view()
                    .ok_or_else(|| conversion_error(RequiredType::$required.name(), value))
            }
        }
    };
}

impl_field_type!(bool, Bool, as_bool);
impl_field_type!(i64, Int, as_int);

impl FieldType for f64 {
    fn required_type() -> RequiredType {
        RequiredType::Float
    }

    fn into_value(self) -> Result<Value> {
        Ok(Value::Float(self))
    }

    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float(v) => Ok(*v),
            other => Err(conversion_error(config::FLOAT_TYPE_NAME, other)),
        }
    }
}

impl FieldType for String {
    fn required_type() -> RequiredType {
        RequiredType::Str
    }

    fn into_value(self) -> Result<Value> {
        Ok(Value::Str(self))
    }

    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| conversion_error(config::STR_TYPE_NAME, value))
    }
}
