// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Required types and their identity keys.

use crate::class::ValueClass;
use crate::config;
use crate::value::Value;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-unique identity of a value class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u64);

impl ClassId {
    /// Allocate a fresh id. Ids are never reused.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Cache key of a required type.
///
/// Builtins are keyed by kind, value classes by their [`ClassId`], so two
/// classes with the same name are still distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Any,
    Bool,
    Int,
    Float,
    Str,
    NoneType,
    Class(ClassId),
}

/// The type a field value must satisfy on every write.
#[derive(Clone)]
pub enum RequiredType {
    /// Universal type, accepts everything.
    Any,
    Bool,
    /// Integers; booleans are accepted too (bool is an int subtype).
    Int,
    Float,
    Str,
    NoneType,
    /// A value class; accepts instances of it and of its subclasses.
    Class(Arc<ValueClass>),
}

impl RequiredType {
    /// Identity used by the checker cache.
    pub fn key(&self) -> TypeKey {
        match self {
            Self::Any => TypeKey::Any,
            Self::Bool => TypeKey::Bool,
            Self::Int => TypeKey::Int,
            Self::Float => TypeKey::Float,
            Self::Str => TypeKey::Str,
            Self::NoneType => TypeKey::NoneType,
            Self::Class(class) => TypeKey::Class(class.id()),
        }
    }

    /// Type name as shown in error messages.
    pub fn name(&self) -> &str {
        match self {
            Self::Any => config::UNIVERSAL_TYPE_NAME,
            Self::Bool => config::BOOL_TYPE_NAME,
            Self::Int => config::INT_TYPE_NAME,
            Self::Float => config::FLOAT_TYPE_NAME,
            Self::Str => config::STR_TYPE_NAME,
            Self::NoneType => config::NONE_TYPE_NAME,
            Self::Class(class) => class.name(),
        }
    }

    /// Is this the universal type?
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Runtime kind check: does `value` satisfy this type?
    pub fn is_instance(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Bool, Value::Bool(_)) => true,
            (Self::Int, Value::Int(_) | Value::Bool(_)) => true,
            (Self::Float, Value::Float(_)) => true,
            (Self::Str, Value::Str(_)) => true,
            (Self::NoneType, Value::None) => true,
            (Self::Class(required), Value::Instance(instance)) => {
                instance.class().is_subclass_of(required)
            }
            _ => false,
        }
    }
}

impl PartialEq for RequiredType {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RequiredType {}

impl fmt::Debug for RequiredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "Class({})", class.name()),
            other => f.write_str(other.name()),
        }
    }
}

impl fmt::Display for RequiredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Arc<ValueClass>> for RequiredType {
    fn from(class: Arc<ValueClass>) -> Self {
        Self::Class(class)
    }
}

impl From<&Arc<ValueClass>> for RequiredType {
    fn from(class: &Arc<ValueClass>) -> Self {
        Self::Class(Arc::clone(class))
    }
}
