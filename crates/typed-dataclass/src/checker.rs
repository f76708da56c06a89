// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-type checkers and the typed field accessor built on them.

use crate::config;
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::types::RequiredType;
use crate::value::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

static UNIVERSAL: OnceLock<Arc<Checker>> = OnceLock::new();

/// Kind check bound to exactly one required type.
///
/// Checkers are shared: a [`crate::CheckerRegistry`] hands out one `Arc` per
/// distinct required type, so every field declared with that type points at
/// the same checker.
pub struct Checker {
    required: RequiredType,
    name: String,
}

impl Checker {
    pub(crate) fn new(required: RequiredType) -> Self {
        let name = config::checker_name(required.name());
        Self { required, name }
    }

    /// The no-constraint checker (required type `object`).
    ///
    /// There is exactly one; it is not stored in any registry.
    pub fn universal() -> Arc<Checker> {
        UNIVERSAL
            .get_or_init(|| Arc::new(Checker::new(RequiredType::Any)))
            .clone()
    }

    pub fn required_type(&self) -> &RequiredType {
        &self.required
    }

    /// Checker name, e.g. `IntChecker`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepts(&self, value: &Value) -> bool {
        self.required.is_instance(value)
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish()
    }
}

/// Validated field accessor installed on a value class, one per field.
///
/// Reads and writes go to the instance's private storage under
/// [`storage_key`](Self::storage_key); writes are kind-checked first.
#[derive(Debug, Clone)]
pub struct TypedAttribute {
    owner: String,
    name: String,
    storage_key: String,
    checker: Arc<Checker>,
}

impl TypedAttribute {
    /// Bind `checker` to the field `name` of class `owner`.
    pub fn new(owner: impl Into<String>, name: impl Into<String>, checker: Arc<Checker>) -> Self {
        let name = name.into();
        Self {
            owner: owner.into(),
            storage_key: config::storage_key(&name),
            name,
            checker,
        }
    }

    /// Name of the class that declared this field.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn checker(&self) -> &Arc<Checker> {
        &self.checker
    }

    pub fn required_type(&self) -> &RequiredType {
        self.checker.required_type()
    }

    /// Run the kind check without storing anything.
    pub fn validate(&self, value: &Value) -> Result<()> {
        if self.checker.accepts(value) {
            Ok(())
        } else {
            Err(Error::TypeConstraint {
                class: self.owner.clone(),
                field: self.name.clone(),
                expected: self.required_type().name().to_string(),
                got: value.type_name().to_string(),
            })
        }
    }

    /// Read the field from `instance`.
    pub fn get<'a>(&self, instance: &'a Instance) -> Result<&'a Value> {
        instance
            .storage()
            .get(&self.storage_key)
            .ok_or_else(|| Error::Uninitialized {
                class: instance.class().name().to_string(),
                field: self.name.clone(),
            })
    }

    /// Check `value`, then store it in `instance`. Nothing is written on failure.
    pub fn set(&self, instance: &mut Instance, value: Value) -> Result<()> {
        self.validate(&value)?;
        instance
            .storage_mut()
            .insert(self.storage_key.clone(), value);
        Ok(())
    }
}
