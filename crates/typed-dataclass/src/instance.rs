// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value-class instances and constructor arguments.

use crate::checker::TypedAttribute;
use crate::class::ValueClass;
use crate::error::{Error, Result};
use crate::value::{FieldType, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Arguments for [`ValueClass::construct`].
#[derive(Debug, Clone, Default)]
pub struct Args {
    positional: Vec<Value>,
    keyword: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, Vec<(String, Value)>) {
        (self.positional, self.keyword)
    }
}

impl<V: Into<Value>> FromIterator<V> for Args {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            keyword: Vec::new(),
        }
    }
}

/// An instance of a [`ValueClass`].
///
/// Field values live in a private mapping keyed by storage key (`_x` for
/// field `x`). [`get`](Self::get) and [`set`](Self::set) route through the
/// class's [`TypedAttribute`]s; [`storage_mut`](Self::storage_mut) does not.
#[derive(Clone)]
pub struct Instance {
    class: Arc<ValueClass>,
    storage: HashMap<String, Value>,
}

impl Instance {
    pub(crate) fn empty(class: Arc<ValueClass>) -> Self {
        let storage = HashMap::with_capacity(class.attributes().len());
        Self { class, storage }
    }

    pub fn class(&self) -> &Arc<ValueClass> {
        &self.class
    }

    /// `isinstance(self, class)`.
    pub fn is_instance_of(&self, class: &ValueClass) -> bool {
        self.class.is_subclass_of(class)
    }

    fn attribute(&self, field: &str) -> Result<&TypedAttribute> {
        self.class
            .attribute(field)
            .ok_or_else(|| Error::UnknownField {
                class: self.class.name().to_string(),
                field: field.to_string(),
            })
    }

    /// Read a field.
    pub fn get(&self, field: &str) -> Result<&Value> {
        self.attribute(field)?.get(self)
    }

    /// Read a field converted to a Rust type.
    pub fn get_as<T: FieldType>(&self, field: &str) -> Result<T> {
        T::from_value(self.get(field)?)
    }

    /// Write a field. The value is kind-checked before anything is stored.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        let class = Arc::clone(&self.class);
        let attribute = class
            .attribute(field)
            .ok_or_else(|| Error::UnknownField {
                class: class.name().to_string(),
                field: field.to_string(),
            })?;
        attribute.set(self, value.into())
    }

    /// Fields in declaration order; `None` for a slot that holds nothing.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.class
            .attributes()
            .iter()
            .map(|a| (a.name(), self.storage.get(a.storage_key())))
    }

    /// Raw field storage keyed by storage key.
    pub fn storage(&self) -> &HashMap<String, Value> {
        &self.storage
    }

    /// Raw mutable field storage.
    ///
    /// Writes made here skip the kind check entirely.
    pub fn storage_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.storage
    }

    /// `Name(field=value, ...)` with values in their `repr` form.
    pub fn repr(&self) -> String {
        let fields: Vec<String> = self
            .fields()
            .map(|(name, value)| match value {
                Some(value) => format!("{}={}", name, value.repr()),
                None => format!("{}=<unset>", name),
            })
            .collect();
        format!("{}({})", self.class.name(), fields.join(", "))
    }
}

/// Same class and equal fields, in declaration order.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.class.id() == other.class.id()
            && self.class.attributes().iter().all(|a| {
                self.storage.get(a.storage_key()) == other.storage.get(a.storage_key())
            })
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class.display_hook() {
            Some(display) => display(self, f),
            None => f.write_str(&self.repr()),
        }
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}
