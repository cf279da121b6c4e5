//! Dispatch proxy
//!
//! [`DispatchProxy`] stands in for a real service instance at every
//! external reference point. Each externally-invoked operation is looked
//! up in the registry resolved at composition time; eligible operations
//! are bracketed with advice and an active-context scope, everything else
//! delegates untouched.
//!
//! # Critical Invariant
//!
//! The proxy is a separate object from the real implementation, and the
//! real implementation never holds a reference to its own proxy. Any call
//! it makes to a sibling routine is therefore a direct call that no advice
//! observes. This bypass is intended behavior, not a defect to repair.

use crate::error::DispatchError;
use crosscut_advice::{Advice, AdviceRegistry, OperationDescriptor, RegistryError, Service, UnitOfWorkAdvice};
use crosscut_context::ActiveScope;

/// Wrapper presented to callers in place of a real service instance.
///
/// Owns exactly one underlying instance and one advice implementation;
/// constructed once at composition time.
#[derive(Debug)]
pub struct DispatchProxy<S, A = UnitOfWorkAdvice> {
    inner: S,
    registry: AdviceRegistry,
    advice: A,
}

impl<S: Service> DispatchProxy<S> {
    /// Wrap a real instance with the bundled unit-of-work advice.
    ///
    /// # Errors
    /// - `RegistryError::DuplicateOperation` if the service declares two
    ///   operations with the same name
    pub fn new(inner: S) -> Result<Self, RegistryError> {
        Self::with_advice(inner, UnitOfWorkAdvice)
    }
}

impl<S: Service, A: Advice> DispatchProxy<S, A> {
    /// Wrap a real instance with a custom advice implementation.
    ///
    /// Resolves the service's declared operation surface here, once;
    /// eligibility never changes afterwards.
    ///
    /// # Errors
    /// - `RegistryError::DuplicateOperation` if the service declares two
    ///   operations with the same name
    pub fn with_advice(inner: S, advice: A) -> Result<Self, RegistryError> {
        let registry = AdviceRegistry::resolve(inner.operations())?;
        Ok(Self {
            inner,
            registry,
            advice,
        })
    }

    /// Invoke a declared operation, applying advice if it is eligible.
    ///
    /// Arguments are forwarded unchanged. For an eligible operation the
    /// active-context flag is set for the duration of the call (and
    /// everything it calls) and restored afterwards on success and
    /// failure alike. An ineligible operation (unadvised, or advised but
    /// internal) delegates directly with no flag mutation and no advice;
    /// the marker is silently ineffective.
    ///
    /// # Errors
    /// - `DispatchError::UnknownOperation` if `operation` was never
    ///   declared
    /// - `DispatchError::Service` carrying the real implementation's
    ///   failure, unchanged
    pub fn invoke(
        &self,
        operation: &str,
        request: S::Request,
    ) -> Result<S::Response, DispatchError<S::Error>> {
        let Some(descriptor) = self.registry.descriptor(operation) else {
            return Err(DispatchError::UnknownOperation(operation.to_string()));
        };

        if self.registry.is_eligible(operation) {
            self.invoke_advised(descriptor, request)
        } else {
            tracing::debug!("dispatch without advice: {}", operation);
            self.inner
                .call(operation, request)
                .map_err(DispatchError::Service)
        }
    }

    fn invoke_advised(
        &self,
        descriptor: &OperationDescriptor,
        request: S::Request,
    ) -> Result<S::Response, DispatchError<S::Error>> {
        tracing::debug!("dispatch with advice: {}", descriptor.name);

        let _scope = ActiveScope::enter();
        self.advice.before(descriptor);
        match self.inner.call(&descriptor.name, request) {
            Ok(response) => {
                self.advice.after_success(descriptor);
                Ok(response)
            }
            Err(error) => {
                self.advice.after_failure(descriptor);
                Err(DispatchError::Service(error))
            }
        }
        // _scope drops here, restoring the prior flag value on every path
    }

    /// The wrapped real instance.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// The operation surface resolved at composition time.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &AdviceRegistry {
        &self.registry
    }

    /// Unwrap the proxy, returning the real instance.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}
