//! Fixture services
//!
//! Two small services exercising the dispatch layer:
//! - [`LedgerService`]: one advised operation, one unadvised one, an
//!   advised operation that always fails, and an advised internal
//!   operation whose marker is never honored
//! - [`RelayService`]: an unadvised entry operation whose implementation
//!   calls the advised internal routine directly on `self`, bypassing any
//!   proxy in front of it
//!
//! Every operation records the advice flag it observes into a shared
//! [`CallRecorder`].

use crate::recorder::CallRecorder;
use crosscut_advice::{OperationDescriptor, Service, Visibility};
use std::sync::Arc;

/// Fixture operation failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FixtureError {
    /// Raised by the always-failing operation
    #[error("operation rejected")]
    Rejected,
    /// Operation name not handled by this fixture
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// Basic fixture: advised and unadvised operations side by side.
#[derive(Debug)]
pub struct LedgerService {
    recorder: Arc<CallRecorder>,
}

impl LedgerService {
    #[must_use]
    pub fn new(recorder: Arc<CallRecorder>) -> Self {
        Self { recorder }
    }

    fn post(&self) -> Result<(), FixtureError> {
        tracing::info!("call post");
        self.recorder.record("post");
        Ok(())
    }

    fn preview(&self) -> Result<(), FixtureError> {
        tracing::info!("call preview");
        self.recorder.record("preview");
        Ok(())
    }

    fn reject(&self) -> Result<(), FixtureError> {
        tracing::info!("call reject");
        self.recorder.record("reject");
        Err(FixtureError::Rejected)
    }

    fn audit(&self) -> Result<(), FixtureError> {
        tracing::info!("call audit");
        self.recorder.record("audit");
        Ok(())
    }
}

impl Service for LedgerService {
    type Request = ();
    type Response = ();
    type Error = FixtureError;

    fn operations(&self) -> Vec<OperationDescriptor> {
        vec![
            OperationDescriptor::new("post").advised(),
            OperationDescriptor::new("preview"),
            OperationDescriptor::new("reject").advised(),
            OperationDescriptor::new("audit")
                .advised()
                .with_visibility(Visibility::Internal),
        ]
    }

    fn call(&self, operation: &str, _request: ()) -> Result<(), FixtureError> {
        match operation {
            "post" => self.post(),
            "preview" => self.preview(),
            "reject" => self.reject(),
            "audit" => self.audit(),
            other => Err(FixtureError::Unsupported(other.to_string())),
        }
    }
}

/// Self-call fixture: `external` invokes `internal` directly on `self`.
#[derive(Debug)]
pub struct RelayService {
    recorder: Arc<CallRecorder>,
}

impl RelayService {
    #[must_use]
    pub fn new(recorder: Arc<CallRecorder>) -> Self {
        Self { recorder }
    }

    fn external(&self) -> Result<(), FixtureError> {
        tracing::info!("call external");
        self.recorder.record("external");
        // Direct self-reference: no proxy observes this call, so the
        // advice marker on `internal` has no effect here.
        self.internal()
    }

    fn internal(&self) -> Result<(), FixtureError> {
        tracing::info!("call internal");
        self.recorder.record("internal");
        Ok(())
    }
}

impl Service for RelayService {
    type Request = ();
    type Response = ();
    type Error = FixtureError;

    fn operations(&self) -> Vec<OperationDescriptor> {
        vec![
            OperationDescriptor::new("external"),
            OperationDescriptor::new("internal").advised(),
        ]
    }

    fn call(&self, operation: &str, _request: ()) -> Result<(), FixtureError> {
        match operation {
            "external" => self.external(),
            "internal" => self.internal(),
            other => Err(FixtureError::Unsupported(other.to_string())),
        }
    }
}
