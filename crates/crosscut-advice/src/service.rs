//! The interceptable service contract
//!
//! A [`Service`] is the real instance placed behind a dispatch proxy. It
//! declares its operation surface once, at composition time, and executes
//! named operations against its own implementation. The service never
//! holds a reference to its proxy: any call it makes to a sibling routine
//! is, by construction, a direct call that no proxy observes.

use crate::descriptor::OperationDescriptor;

/// A unit exposing one or more operations, some advised and some not.
pub trait Service {
    /// Request payload, forwarded through the proxy unchanged.
    type Request;
    /// Successful operation output.
    type Response;
    /// Operation failure, re-raised to the caller unchanged.
    type Error;

    /// Declared operation surface, scanned once at composition time.
    fn operations(&self) -> Vec<OperationDescriptor>;

    /// Execute a declared operation against the real implementation.
    ///
    /// # Errors
    /// Whatever the operation itself fails with; the dispatch layer never
    /// inspects or alters the failure.
    fn call(&self, operation: &str, request: Self::Request)
        -> Result<Self::Response, Self::Error>;
}
