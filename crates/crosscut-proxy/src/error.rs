//! Dispatch errors
//!
//! The proxy raises exactly one error of its own: an operation name that
//! was never declared on the service surface. Failures from the real
//! implementation pass through unchanged inside [`DispatchError::Service`].
//! Eligibility misses and bypass misses are not errors anywhere in this
//! layer.

/// Errors surfaced by [`crate::DispatchProxy::invoke`].
#[derive(Debug, thiserror::Error)]
pub enum DispatchError<E> {
    /// Operation was never declared on the service surface
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The real implementation failed; the payload is untouched
    #[error("operation failed: {0}")]
    Service(E),
}

impl<E> DispatchError<E> {
    /// Check whether this is an unknown-operation error.
    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownOperation(_))
    }

    /// Extract the service failure, if that is what this is.
    #[inline]
    pub fn into_service(self) -> Option<E> {
        match self {
            Self::Service(error) => Some(error),
            Self::UnknownOperation(_) => None,
        }
    }
}
