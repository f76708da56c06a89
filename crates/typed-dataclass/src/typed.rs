// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bridge between Rust structs and value classes.
//!
//! `#[derive(TypedFields)]` implements [`TypedFields`] and
//! [`FieldType`](crate::FieldType) for a struct with named fields. The
//! generated class has one typed attribute per struct field, in declaration
//! order, and is defined once per process.

use crate::class::ValueClass;
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::value::Value;
use std::sync::Arc;

/// A Rust struct with a value-class counterpart.
pub trait TypedFields: Sized {
    /// The value class generated for this struct.
    fn value_class() -> Arc<ValueClass>;

    /// Build a checked instance from the struct's fields.
    fn into_instance(self) -> Result<Instance>;

    /// Read every field back out of `instance`.
    ///
    /// `instance` must belong to [`value_class`](Self::value_class) or a
    /// subclass of it.
    fn from_instance(instance: &Instance) -> Result<Self>;
}

/// Fail unless `instance` is an instance of `T`'s class.
pub fn expect_class<T: TypedFields>(instance: &Instance) -> Result<()> {
    let class = T::value_class();
    if instance.is_instance_of(&class) {
        Ok(())
    } else {
        Err(Error::Conversion {
            expected: class.name().to_string(),
            got: instance.class().name().to_string(),
        })
    }
}

/// [`FieldType::into_value`](crate::FieldType::into_value) for nested structs.
pub fn nested_into_value<T: TypedFields>(value: T) -> Result<Value> {
    value.into_instance().map(Value::Instance)
}

/// [`FieldType::from_value`](crate::FieldType::from_value) for nested structs.
pub fn nested_from_value<T: TypedFields>(value: &Value) -> Result<T> {
    match value {
        Value::Instance(instance) => T::from_instance(instance),
        other => Err(Error::Conversion {
            expected: T::value_class().name().to_string(),
            got: other.type_name().to_string(),
        }),
    }
}
