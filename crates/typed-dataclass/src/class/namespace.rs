// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Name → type scope used to resolve [`Annotation::Named`].

use crate::class::{Annotation, ValueClass};
use crate::config;
use crate::types::RequiredType;
use std::collections::HashMap;
use std::sync::Arc;

/// Types visible to a class definition by name.
///
/// Registering a class under a name that is already bound shadows the
/// previous binding.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    types: HashMap<String, RequiredType>,
}

impl Namespace {
    /// Empty namespace (not even builtins).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace with the builtin type names bound.
    #[must_use]
    pub fn builtins() -> Self {
        let mut namespace = Self::new();
        for (name, required) in [
            (config::UNIVERSAL_TYPE_NAME, RequiredType::Any),
            (config::BOOL_TYPE_NAME, RequiredType::Bool),
            (config::INT_TYPE_NAME, RequiredType::Int),
            (config::FLOAT_TYPE_NAME, RequiredType::Float),
            (config::STR_TYPE_NAME, RequiredType::Str),
            (config::NONE_TYPE_NAME, RequiredType::NoneType),
        ] {
            namespace.insert(name, required);
        }
        namespace
    }

    pub fn insert(&mut self, name: impl Into<String>, required: RequiredType) {
        self.types.insert(name.into(), required);
    }

    /// Bind `class` under its own name.
    pub fn register(&mut self, class: &Arc<ValueClass>) {
        self.insert(class.name(), RequiredType::from(class));
    }

    pub fn lookup(&self, name: &str) -> Option<&RequiredType> {
        self.types.get(name)
    }

    pub fn resolve(&self, annotation: &Annotation) -> Option<RequiredType> {
        match annotation {
            Annotation::Type(required) => Some(required.clone()),
            Annotation::Named(name) => self.lookup(name).cloned(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
