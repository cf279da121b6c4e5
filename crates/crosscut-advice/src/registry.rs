//! Advice registry with composition-time eligibility resolution
//!
//! [`AdviceRegistry::resolve`] scans a service's declared operations once,
//! at composition time, and records which of them are eligible for advice.
//! Dispatch-time lookups are read-only; the registry never changes after
//! resolution.

use crate::descriptor::OperationDescriptor;
use std::collections::{HashMap, HashSet};

/// Registration-time errors.
///
/// Eligibility misses (an advice marker on an internal operation) are not
/// errors; they are silently excluded during resolution.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two declared operations share a name
    #[error("duplicate operation: {0}")]
    DuplicateOperation(String),
}

/// Immutable registry of a service's declared operation surface.
#[derive(Debug, Default, Clone)]
pub struct AdviceRegistry {
    operations: HashMap<String, OperationDescriptor>,
    eligible: HashSet<String>,
}

impl AdviceRegistry {
    /// Resolve a declared operation set into a registry.
    ///
    /// Eligibility is recorded here, once: an operation is eligible iff it
    /// is advised and exposed on the public surface. Advised internal
    /// operations are excluded without error.
    ///
    /// # Errors
    /// - `RegistryError::DuplicateOperation` if two operations share a name
    pub fn resolve(
        operations: impl IntoIterator<Item = OperationDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut resolved = HashMap::new();
        let mut eligible = HashSet::new();

        for op in operations {
            if resolved.contains_key(&op.name) {
                return Err(RegistryError::DuplicateOperation(op.name));
            }
            if op.advice_eligible() {
                eligible.insert(op.name.clone());
            }
            resolved.insert(op.name.clone(), op);
        }

        Ok(Self {
            operations: resolved,
            eligible,
        })
    }

    /// Look up a declared operation by name.
    #[inline]
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.get(name)
    }

    /// Check whether an operation is declared.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Check whether an operation was recorded as advice-eligible.
    #[inline]
    #[must_use]
    pub fn is_eligible(&self, name: &str) -> bool {
        self.eligible.contains(name)
    }

    /// Number of declared operations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the registry is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Names of all declared operations.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Iterate over all declared descriptors.
    pub fn descriptors(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }
}
