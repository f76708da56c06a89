// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Checker cache: one [`Checker`] per required type.
//!
//! Entries are created lazily on first use and never removed or replaced, so
//! the `Arc` returned for a type stays the same for the registry's lifetime.
//! The universal type is not cached; it always maps to
//! [`Checker::universal`].

use crate::checker::Checker;
use crate::types::{RequiredType, TypeKey};
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<CheckerRegistry> = OnceLock::new();

/// Memoized checker factory keyed by [`TypeKey`].
///
/// `DashMap::entry` makes first use of a type atomic, so concurrent class
/// definitions cannot produce two checkers for the same type.
#[derive(Debug, Default)]
pub struct CheckerRegistry {
    checkers: DashMap<TypeKey, Arc<Checker>>,
}

impl CheckerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used by [`crate::ClassBuilder`].
    pub fn global() -> &'static CheckerRegistry {
        GLOBAL.get_or_init(CheckerRegistry::new)
    }

    /// Return the checker for `required`, creating it on first use.
    pub fn get_or_create(&self, required: &RequiredType) -> Arc<Checker> {
        if required.is_universal() {
            return Checker::universal();
        }
        self.checkers
            .entry(required.key())
            .or_insert_with(|| {
                let checker = Checker::new(required.clone());
                log::debug!(
                    "[registry] created {} for required type `{}`",
                    checker.name(),
                    required
                );
                Arc::new(checker)
            })
            .clone()
    }

    /// Cached checker for `required`, if one was created already.
    pub fn get(&self, required: &RequiredType) -> Option<Arc<Checker>> {
        if required.is_universal() {
            return Some(Checker::universal());
        }
        self.checkers
            .get(&required.key())
            .map(|entry| entry.value().clone())
    }

    pub fn contains(&self, required: &RequiredType) -> bool {
        self.checkers.contains_key(&required.key())
    }

    /// Number of cached checkers (the universal checker is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueClass;
    use std::thread;

    #[test]
    fn test_same_type_same_checker() {
        let registry = CheckerRegistry::new();
        let a = registry.get_or_create(&RequiredType::Int);
        let b = registry.get_or_create(&RequiredType::Int);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_types_distinct_checkers() {
        let registry = CheckerRegistry::new();
        let int = registry.get_or_create(&RequiredType::Int);
        let float = registry.get_or_create(&RequiredType::Float);
        let string = registry.get_or_create(&RequiredType::Str);
        assert!(!Arc::ptr_eq(&int, &float));
        assert!(!Arc::ptr_eq(&float, &string));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_universal_type_is_not_cached() {
        let registry = CheckerRegistry::new();
        let any = registry.get_or_create(&RequiredType::Any);
        assert!(Arc::ptr_eq(&any, &Checker::universal()));
        assert!(registry.is_empty());
        assert!(!registry.contains(&RequiredType::Any));
    }

    #[test]
    fn test_get_does_not_create() {
        let registry = CheckerRegistry::new();
        assert!(registry.get(&RequiredType::Bool).is_none());
        let created = registry.get_or_create(&RequiredType::Bool);
        let cached = registry.get(&RequiredType::Bool).expect("cached checker");
        assert!(Arc::ptr_eq(&created, &cached));
    }

    #[test]
    fn test_class_types_keyed_by_identity() {
        let registry = CheckerRegistry::new();
        let first = ValueClass::builder("Twin").build();
        let second = ValueClass::builder("Twin").build();

        let a = registry.get_or_create(&RequiredType::from(&first));
        let again = registry.get_or_create(&RequiredType::from(&first));
        let b = registry.get_or_create(&RequiredType::from(&second));

        assert!(Arc::ptr_eq(&a, &again));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "TwinChecker");
    }

    #[test]
    fn test_concurrent_first_use_yields_one_checker() {
        let registry = Arc::new(CheckerRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.get_or_create(&RequiredType::Str))
            })
            .collect();

        let checkers: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread join"))
            .collect();
        for checker in &checkers[1..] {
            assert!(Arc::ptr_eq(&checkers[0], checker));
        }
        assert_eq!(registry.len(), 1);
    }
}
