//! Cross-cutting advice hooks
//!
//! [`Advice`] brackets an eligible operation invoked through a dispatch
//! proxy. [`UnitOfWorkAdvice`] is the bundled implementation: it logs the
//! begin/complete/abort of a unit of work. [`NoopAdvice`] applies no
//! behavior and keeps test output quiet.

use crate::descriptor::OperationDescriptor;

/// Pre/post behavior applied around an advice-eligible operation.
///
/// The dispatch proxy sets the active-context flag before `before` runs
/// and restores it after `after_success` or `after_failure` returns, so
/// every hook observes an active context. Exactly one of the two `after_*`
/// hooks runs per invocation, matching the outcome of the real
/// implementation.
pub trait Advice: Send + Sync {
    /// Called before the real implementation runs.
    fn before(&self, _op: &OperationDescriptor) {}

    /// Called after the real implementation returns successfully.
    fn after_success(&self, _op: &OperationDescriptor) {}

    /// Called after the real implementation fails, before the failure is
    /// re-raised to the caller unchanged.
    fn after_failure(&self, _op: &OperationDescriptor) {}
}

/// Advice that applies no behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAdvice;

impl Advice for NoopAdvice {}

/// Bundled advice bracketing each eligible operation as a unit of work.
///
/// Pre-behavior stands in for resource acquisition; the post hooks stand
/// in for commit and rollback. No resources are actually held.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitOfWorkAdvice;

impl Advice for UnitOfWorkAdvice {
    fn before(&self, op: &OperationDescriptor) {
        tracing::info!("begin unit of work: {}", op.name);
    }

    fn after_success(&self, op: &OperationDescriptor) {
        tracing::info!("complete unit of work: {}", op.name);
    }

    fn after_failure(&self, op: &OperationDescriptor) {
        tracing::warn!("abort unit of work: {}", op.name);
    }
}
