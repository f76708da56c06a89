// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type shared by every typed-dataclass operation.

use thiserror::Error;

/// Result alias for typed-dataclass operations.
pub type Result<T> = std::result::Result<T, Error>;

/// typed-dataclass errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A written value failed the field's runtime kind check.
    #[error("Type constraint violated on `{class}.{field}`: expecting a {expected}, got {got}")]
    TypeConstraint {
        class: String,
        field: String,
        expected: String,
        got: String,
    },

    /// Field exists but nothing was ever stored in its slot.
    #[error("Field `{class}.{field}` read before it was assigned")]
    Uninitialized { class: String, field: String },

    #[error("`{class}` has no field `{field}`")]
    UnknownField { class: String, field: String },

    #[error("{class}() missing required argument(s): {}", .names.join(", "))]
    MissingArguments { class: String, names: Vec<String> },

    #[error("{class}() takes {expected} positional argument(s) but {given} were given")]
    TooManyPositional {
        class: String,
        expected: usize,
        given: usize,
    },

    #[error("{class}() got an unexpected keyword argument `{name}`")]
    UnexpectedKeyword { class: String, name: String },

    #[error("{class}() got multiple values for argument `{name}`")]
    MultipleValues { class: String, name: String },

    /// Annotation names a type the namespace does not know.
    #[error("Cannot resolve annotation `{annotation}` of `{class}.{field}`")]
    UnresolvableAnnotation {
        class: String,
        field: String,
        annotation: String,
    },

    /// A dynamic value could not be converted into a Rust field type.
    #[error("Conversion failed: expected {expected}, got {got}")]
    Conversion { expected: String, got: String },

    #[error("Unsupported operand type(s) for {op}: {lhs} and {rhs}")]
    UnsupportedOperand {
        op: &'static str,
        lhs: String,
        rhs: String,
    },

    #[error("Integer overflow in {lhs} {op} {rhs}")]
    Overflow {
        op: &'static str,
        lhs: i64,
        rhs: i64,
    },
}

impl Error {
    /// Is this the designed constraint-violation kind?
    pub fn is_type_constraint(&self) -> bool {
        matches!(self, Self::TypeConstraint { .. })
    }
}
