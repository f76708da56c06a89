// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # typed-dataclass - runtime type-enforced value classes
//!
//! Value classes whose fields are checked against a required type on every
//! write, with one shared checker per required type.
//!
//! ## Quick Start
//!
//! ```rust
//! use typed_dataclass::{Args, RequiredType, ValueClass};
//!
//! let reading = ValueClass::builder("Reading")
//!     .field("sensor", RequiredType::Str)
//!     .field("value", RequiredType::Float)
//!     .build();
//!
//! let mut r = reading
//!     .construct(Args::new().arg("t1").kwarg("value", 21.5))
//!     .unwrap();
//! assert!(r.set("value", "hot").is_err());
//! assert_eq!(r.get_as::<f64>("value").unwrap(), 21.5);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ClassBuilder / ClassDef ---> attach_typed_fields ---> ValueClass
//!                                   |                      |
//!                                   v                      v
//!                            CheckerRegistry       TypedAttribute (per field)
//!                           (one Checker/type) ---------^  |
//!                                                          v
//!                                              Instance storage (`_field`)
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ValueClass`] | Transformed class: typed attributes + generated constructor |
//! | [`ClassBuilder`] | Explicit definition step every class goes through |
//! | [`TypedAttribute`] | Validated accessor for one field |
//! | [`CheckerRegistry`] | One [`Checker`] per required type |
//! | [`Instance`] | Field storage for one object |
//!
//! ## Modules Overview
//!
//! - [`class`] - definitions, transformation, builder
//! - [`registry`] - checker cache
//! - [`shapes`] - `Point` and `Circle` examples

// Allow the derive macro to work inside this crate's tests
extern crate self as typed_dataclass;

/// Typed attributes and per-type checkers.
pub mod checker;
/// Value-class definitions and the typed-field transformation.
pub mod class;
/// Naming constants (storage prefix, builtin type names).
pub mod config;
pub mod error;
pub mod instance;
/// Checker cache keyed by required type.
pub mod registry;
/// Example value classes.
pub mod shapes;
pub mod typed;
pub mod types;
pub mod value;

pub use checker::{Checker, TypedAttribute};
pub use class::{attach_typed_fields, Annotation, ClassBuilder, ClassDef, DisplayFn, Namespace, ValueClass};
pub use error::{Error, Result};
pub use instance::{Args, Instance};
pub use registry::CheckerRegistry;
pub use typed::TypedFields;
pub use types::{ClassId, RequiredType, TypeKey};
pub use value::{FieldType, Value};

#[cfg(feature = "derive")]
pub use typed_dataclass_codegen::TypedFields;

#[cfg(test)]
mod tests;
