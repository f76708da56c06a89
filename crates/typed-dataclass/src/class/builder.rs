// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder for value classes.

use crate::class::{install, upsert_field, DisplayFn, Namespace, ValueClass};
use crate::registry::CheckerRegistry;
use crate::types::RequiredType;
use crate::value::FieldType;
use std::fmt;
use std::sync::Arc;

/// Builder for [`ValueClass`] definitions.
///
/// [`build`](Self::build) installs typed attributes using
/// [`CheckerRegistry::global`], so fields of the same type share a checker
/// across every class defined this way.
///
/// # Example
///
/// ```
/// use typed_dataclass::{Args, RequiredType, ValueClass};
///
/// let pixel = ValueClass::builder("Pixel")
///     .field("x", RequiredType::Int)
///     .field("y", RequiredType::Int)
///     .build();
///
/// let mut p = pixel.construct(Args::new().arg(3).arg(4)).unwrap();
/// assert!(p.set("x", "left").is_err());
/// assert_eq!(p.to_string(), "Pixel(x=3, y=4)");
/// ```
pub struct ClassBuilder {
    name: String,
    base: Option<Arc<ValueClass>>,
    fields: Vec<(String, RequiredType)>,
    display: Option<DisplayFn>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
            display: None,
        }
    }

    /// Add a field. Adding a name twice keeps its first position.
    pub fn field(mut self, name: impl Into<String>, required: impl Into<RequiredType>) -> Self {
        upsert_field(&mut self.fields, name.into(), required.into());
        self
    }

    /// Add a field typed after a Rust [`FieldType`].
    pub fn field_of<T: FieldType>(self, name: impl Into<String>) -> Self {
        self.field(name, T::required_type())
    }

    /// Inherit from `base`.
    pub fn extends(mut self, base: &Arc<ValueClass>) -> Self {
        self.base = Some(Arc::clone(base));
        self
    }

    /// Custom `Display` for instances (default: the `repr` form).
    pub fn display(mut self, display: DisplayFn) -> Self {
        self.display = Some(display);
        self
    }

    /// Define the class.
    pub fn build(self) -> Arc<ValueClass> {
        install(
            self.name,
            self.base,
            self.fields,
            self.display,
            CheckerRegistry::global(),
        )
    }

    /// Define the class and register it in `namespace` under its name.
    pub fn build_in(self, namespace: &mut Namespace) -> Arc<ValueClass> {
        let class = self.build();
        namespace.register(&class);
        class
    }
}

impl fmt::Debug for ClassBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassBuilder")
            .field("name", &self.name)
            .field("base", &self.base.as_ref().map(|b| b.name()))
            .field("fields", &self.fields)
            .field("display", &self.display.is_some())
            .finish()
    }
}
