// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value classes and the transformation that installs typed fields on them.
//!
//! A class starts life as a plain [`ClassDef`] (name, optional base, ordered
//! field annotations). [`attach_typed_fields`] turns it into a
//! [`ValueClass`]: generated constructor ([`ValueClass::construct`]),
//! structural equality, `repr`, and one [`TypedAttribute`] per field whose
//! checker comes from a [`CheckerRegistry`].
//!
//! [`ClassBuilder`] is the usual entry point. Every class it builds, and
//! every subclass started with [`ValueClass::subclass`], goes through the
//! transformation exactly once, at definition time.

mod builder;
mod namespace;

pub use builder::ClassBuilder;
pub use namespace::Namespace;

use crate::checker::TypedAttribute;
use crate::error::{Error, Result};
use crate::instance::{Args, Instance};
use crate::registry::CheckerRegistry;
use crate::types::{ClassId, RequiredType};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Custom `Display` implementation for the instances of a class.
pub type DisplayFn = fn(&Instance, &mut fmt::Formatter<'_>) -> fmt::Result;

/// Field annotation as written in a class definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Already-resolved type.
    Type(RequiredType),
    /// Type name, resolved through a [`Namespace`] at definition time.
    Named(String),
}

impl From<RequiredType> for Annotation {
    fn from(required: RequiredType) -> Self {
        Self::Type(required)
    }
}

impl From<&Arc<ValueClass>> for Annotation {
    fn from(class: &Arc<ValueClass>) -> Self {
        Self::Type(RequiredType::from(class))
    }
}

impl From<&str> for Annotation {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(required) => fmt::Display::fmt(required, f),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Untransformed class definition.
#[derive(Clone)]
pub struct ClassDef {
    name: String,
    base: Option<Arc<ValueClass>>,
    annotations: Vec<(String, Annotation)>,
    display: Option<DisplayFn>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            annotations: Vec::new(),
            display: None,
        }
    }

    /// Inherit fields (and the display hook) from `base`.
    pub fn extends(mut self, base: &Arc<ValueClass>) -> Self {
        self.base = Some(Arc::clone(base));
        self
    }

    /// Annotate a field. Re-annotating a name keeps its position and
    /// replaces its type.
    pub fn annotate(mut self, field: impl Into<String>, annotation: impl Into<Annotation>) -> Self {
        upsert_field(&mut self.annotations, field.into(), annotation.into());
        self
    }

    pub fn display(mut self, display: DisplayFn) -> Self {
        self.display = Some(display);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own annotations in declaration order (inherited ones excluded).
    pub fn annotations(&self) -> &[(String, Annotation)] {
        &self.annotations
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDef")
            .field("name", &self.name)
            .field("base", &self.base.as_ref().map(|b| b.name()))
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

/// Insert `(name, value)`, or replace the value in place if `name` is
/// already declared.
pub(crate) fn upsert_field<T>(fields: &mut Vec<(String, T)>, name: String, value: T) {
    match fields.iter_mut().find(|(field, _)| *field == name) {
        Some(slot) => slot.1 = value,
        None => fields.push((name, value)),
    }
}

/// Turn `def` into a value class with one typed attribute per field.
///
/// Every annotation is resolved before any checker is requested, so an
/// unresolvable annotation leaves `registry` untouched.
pub fn attach_typed_fields(
    def: ClassDef,
    namespace: &Namespace,
    registry: &CheckerRegistry,
) -> Result<Arc<ValueClass>> {
    let mut fields = Vec::with_capacity(def.annotations.len());
    for (field, annotation) in &def.annotations {
        let required =
            namespace
                .resolve(annotation)
                .ok_or_else(|| Error::UnresolvableAnnotation {
                    class: def.name.clone(),
                    field: field.clone(),
                    annotation: annotation.to_string(),
                })?;
        fields.push((field.clone(), required));
    }
    Ok(install(def.name, def.base, fields, def.display, registry))
}

/// Second half of the transformation; annotations are already resolved.
pub(crate) fn install(
    name: String,
    base: Option<Arc<ValueClass>>,
    fields: Vec<(String, RequiredType)>,
    display: Option<DisplayFn>,
    registry: &CheckerRegistry,
) -> Arc<ValueClass> {
    let mut attributes: Vec<TypedAttribute> = base
        .as_ref()
        .map(|b| b.attributes.clone())
        .unwrap_or_default();

    for (field, required) in fields {
        let checker = registry.get_or_create(&required);
        let attribute = TypedAttribute::new(name.as_str(), field, checker);
        match attributes.iter_mut().find(|a| a.name() == attribute.name()) {
            Some(inherited) => *inherited = attribute,
            None => attributes.push(attribute),
        }
    }

    let display = display.or_else(|| base.as_ref().and_then(|b| b.display));
    let class = ValueClass {
        id: ClassId::next(),
        name,
        base,
        attributes,
        display,
    };
    log::debug!(
        "[class] defined {} ({} typed field(s){})",
        class.name,
        class.attributes.len(),
        class
            .base
            .as_ref()
            .map(|b| format!(", extends {}", b.name))
            .unwrap_or_default()
    );
    Arc::new(class)
}

/// A transformed class: typed attributes plus generated constructor.
pub struct ValueClass {
    id: ClassId,
    name: String,
    base: Option<Arc<ValueClass>>,
    attributes: Vec<TypedAttribute>,
    display: Option<DisplayFn>,
}

impl ValueClass {
    /// Start defining a class.
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    /// Start defining a subclass of `self`.
    pub fn subclass(self: &Arc<Self>, name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name).extends(self)
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> Option<&Arc<ValueClass>> {
        self.base.as_ref()
    }

    /// Installed attributes, inherited first, in constructor order.
    pub fn attributes(&self) -> &[TypedAttribute] {
        &self.attributes
    }

    pub fn attribute(&self, field: &str) -> Option<&TypedAttribute> {
        self.attributes.iter().find(|a| a.name() == field)
    }

    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(TypedAttribute::name)
    }

    pub fn display_hook(&self) -> Option<DisplayFn> {
        self.display
    }

    /// Is `self` the class `other` or one of its subclasses?
    pub fn is_subclass_of(&self, other: &ValueClass) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.id == other.id {
                return true;
            }
            current = class.base.as_deref();
        }
        false
    }

    /// Generated constructor.
    ///
    /// Positional arguments bind to fields in declaration order, keyword
    /// arguments by name. Every field must be bound exactly once; values are
    /// then written through their typed attributes in declaration order and
    /// the first rejected value aborts construction.
    pub fn construct(self: &Arc<Self>, args: Args) -> Result<Instance> {
        let (positional, keyword) = args.into_parts();
        let expected = self.attributes.len();
        if positional.len() > expected {
            return Err(Error::TooManyPositional {
                class: self.name.clone(),
                expected,
                given: positional.len(),
            });
        }

        let mut slots: Vec<Option<Value>> = positional.into_iter().map(Some).collect();
        slots.resize_with(expected, || None);

        for (field, value) in keyword {
            let index = self
                .field_index(&field)
                .ok_or_else(|| Error::UnexpectedKeyword {
                    class: self.name.clone(),
                    name: field.clone(),
                })?;
            if slots[index].is_some() {
                return Err(Error::MultipleValues {
                    class: self.name.clone(),
                    name: field,
                });
            }
            slots[index] = Some(value);
        }

        let missing: Vec<String> = self
            .attributes
            .iter()
            .zip(&slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(attribute, _)| attribute.name().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingArguments {
                class: self.name.clone(),
                names: missing,
            });
        }

        let mut instance = Instance::empty(Arc::clone(self));
        for (attribute, value) in self.attributes.iter().zip(slots) {
            if let Some(value) = value {
                attribute.set(&mut instance, value)?;
            }
        }
        Ok(instance)
    }
}

impl fmt::Debug for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .attributes
            .iter()
            .map(|a| format!("{}: {}", a.name(), a.required_type()))
            .collect();
        f.debug_struct("ValueClass")
            .field("id", &self.id.get())
            .field("name", &self.name)
            .field("base", &self.base.as_ref().map(|b| b.name()))
            .field("fields", &fields)
            .finish()
    }
}
