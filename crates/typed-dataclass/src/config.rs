// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Global constants - single source of truth for naming rules.
//!
//! Storage keys, builtin type names and checker names are derived here and
//! nowhere else.

/// Prefix prepended to a field name to form its storage key.
///
/// Public field names are identifiers, so a key starting with this prefix
/// never collides with the public name of the same field.
pub const STORAGE_PREFIX: char = '_';

/// Name of the universal required type (accepts every value).
pub const UNIVERSAL_TYPE_NAME: &str = "object";

/// Builtin type names, as resolved by [`crate::Namespace::builtins`].
pub const BOOL_TYPE_NAME: &str = "bool";
pub const INT_TYPE_NAME: &str = "int";
pub const FLOAT_TYPE_NAME: &str = "float";
pub const STR_TYPE_NAME: &str = "str";
pub const NONE_TYPE_NAME: &str = "NoneType";

/// Suffix of every checker name (`IntChecker`, `PointChecker`, ...).
pub const CHECKER_SUFFIX: &str = "Checker";

/// Storage key for a public field name.
///
/// # Example
///
/// ```
/// assert_eq!(typed_dataclass::config::storage_key("radius"), "_radius");
/// ```
pub fn storage_key(field: &str) -> String {
    let mut key = String::with_capacity(field.len() + 1);
    key.push(STORAGE_PREFIX);
    key.push_str(field);
    key
}

/// Checker name for a required type name.
pub(crate) fn checker_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    let mut name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    name.push_str(CHECKER_SUFFIX);
    name
}
