//! # Registry
//!
//! Ordered, append-only list of borrowers. Registration always succeeds and
//! lookups are a linear scan by id; there is no loan bookkeeping here.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Borrower, BorrowerId, IdSequence};

/// Registered borrowers in registration order.
///
/// ## Example
/// ```rust
/// use lending_core::Registry;
///
/// let mut registry = Registry::new();
/// registry.register("Alice");
/// registry.register("Bob");
///
/// assert_eq!(registry.find(2).unwrap().name, "Bob");
/// assert!(registry.find(99).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    borrowers: Vec<Borrower>,
    ids: IdSequence,
}

impl Registry {
    /// Creates an empty registry with a fresh id sequence.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Registers a borrower and returns the new record.
    pub fn register(&mut self, name: impl Into<String>) -> &Borrower {
        let borrower = Borrower::new(&mut self.ids, name);
        debug!(borrower_id = %borrower.id(), "borrower registered");
        let position = self.borrowers.len();
        self.borrowers.push(borrower);
        &self.borrowers[position]
    }

    /// Looks a borrower up by id.
    ///
    /// Negative, zero, and never-issued identifiers are all reported the
    /// same way.
    pub fn find(&self, identifier: i64) -> CoreResult<&Borrower> {
        BorrowerId::try_from(identifier)
            .ok()
            .and_then(|id| self.borrowers.iter().find(|b| **b == id))
            .ok_or(CoreError::BorrowerNotFound { identifier })
    }

    /// Every borrower in registration order, or `None` when nobody is registered.
    pub fn list_all(&self) -> Option<&[Borrower]> {
        if self.borrowers.is_empty() {
            None
        } else {
            Some(self.borrowers.as_slice())
        }
    }

    /// Number of registered borrowers.
    #[inline]
    pub fn len(&self) -> usize {
        self.borrowers.len()
    }

    /// Checks if nobody is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.borrowers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_find() {
        let mut registry = Registry::new();
        assert!(registry.list_all().is_none());

        assert_eq!(registry.register("Alice").id(), BorrowerId::new(1));
        assert_eq!(registry.register("Bob").id(), BorrowerId::new(2));

        assert_eq!(registry.find(1).unwrap().name, "Alice");
        assert_eq!(registry.find(2).unwrap().name, "Bob");
        assert_eq!(
            registry.find(99),
            Err(CoreError::BorrowerNotFound { identifier: 99 })
        );
    }

    #[test]
    fn test_find_rejects_non_positive_and_extreme_ids() {
        let mut registry = Registry::new();
        registry.register("Alice");

        for identifier in [0, -1, i64::from(i32::MIN), i64::from(i32::MAX), i64::MAX] {
            assert!(matches!(
                registry.find(identifier),
                Err(CoreError::BorrowerNotFound { .. })
            ));
        }
    }

    #[test]
    fn test_find_on_empty_registry() {
        let registry = Registry::new();
        assert!(registry.find(1).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_same_name_registers_twice() {
        let mut registry = Registry::new();
        registry.register("Alice");
        registry.register("Alice");
        registry.register("");

        let names: Vec<&str> = registry
            .list_all()
            .unwrap()
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Alice", ""]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_find_returns_stored_record() {
        let mut registry = Registry::new();
        let registered = registry.register("José Müller").clone();
        let found = registry.find(1).unwrap();
        assert_eq!(*found, registered);
        assert_eq!(found.name, "José Müller");
    }
}
