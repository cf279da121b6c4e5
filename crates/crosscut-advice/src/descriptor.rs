//! Operation descriptors and advice markers
//!
//! [`OperationDescriptor`] identifies a callable unit on a service: its
//! name, whether it carries the advice marker, and whether it is part of
//! the externally exposed surface. Descriptors are created at composition
//! time and immutable thereafter.

use serde::{Deserialize, Serialize};

/// Exposure of an operation on the proxy surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    /// Reachable through the proxy's external surface.
    #[default]
    Public,
    /// Declared on the service but not exposed through the proxy.
    Internal,
}

/// Descriptor for a single declared operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Operation name, unique within a service.
    pub name: String,
    /// Whether the operation carries the advice marker.
    pub advised: bool,
    /// Exposure on the proxy surface.
    pub visibility: Visibility,
}

impl OperationDescriptor {
    /// Create an unadvised public operation.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            advised: false,
            visibility: Visibility::Public,
        }
    }

    /// Mark the operation as advised.
    #[inline]
    #[must_use]
    pub fn advised(mut self) -> Self {
        self.advised = true;
        self
    }

    /// Set the operation's visibility.
    #[inline]
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Whether advice can ever apply to this operation.
    ///
    /// Only operations on the public surface are eligible. An advice
    /// marker on an internal operation is ignored without error; advice
    /// brackets externally initiated units of work, not every helper.
    #[inline]
    #[must_use]
    pub fn advice_eligible(&self) -> bool {
        self.advised && self.visibility == Visibility::Public
    }
}
