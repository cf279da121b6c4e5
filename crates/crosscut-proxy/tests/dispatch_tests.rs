//! Dispatch scenario tests
//!
//! End-to-end checks of conditional interception through the proxy,
//! including the self-call bypass demonstrated by the relay fixture.

use crosscut_proxy::prelude::*;
use crosscut_test_utils::{CallRecorder, FixtureError, LedgerService, RelayService};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn ledger() -> (Arc<CallRecorder>, DispatchProxy<LedgerService>) {
    let recorder = Arc::new(CallRecorder::new());
    let proxy = DispatchProxy::new(LedgerService::new(Arc::clone(&recorder))).unwrap();
    (recorder, proxy)
}

fn relay() -> (Arc<CallRecorder>, DispatchProxy<RelayService>) {
    let recorder = Arc::new(CallRecorder::new());
    let proxy = DispatchProxy::new(RelayService::new(Arc::clone(&recorder))).unwrap();
    (recorder, proxy)
}

#[test]
fn advised_operation_observes_active_flag() {
    let (recorder, proxy) = ledger();

    proxy.invoke("post", ()).unwrap();

    assert_eq!(recorder.advice_active_for("post"), Some(true));
    assert!(!is_active());
}

#[test]
fn unadvised_operation_observes_inactive_flag() {
    let (recorder, proxy) = ledger();

    proxy.invoke("preview", ()).unwrap();

    assert_eq!(recorder.advice_active_for("preview"), Some(false));
}

#[test]
fn self_call_bypasses_advice() {
    let (recorder, proxy) = relay();

    // `external` is unadvised; its implementation calls `internal`
    // directly on itself. The marker on `internal` is silently ignored.
    proxy.invoke("external", ()).unwrap();

    let records = recorder.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].operation, "external");
    assert!(!records[0].advice_active);
    assert_eq!(records[1].operation, "internal");
    assert!(!records[1].advice_active);
}

#[test]
fn internal_operation_through_proxy_is_advised() {
    let (recorder, proxy) = relay();

    proxy.invoke("internal", ()).unwrap();

    assert_eq!(recorder.advice_active_for("internal"), Some(true));
}

#[test]
fn advised_internal_operation_delegates_without_advice() {
    let (recorder, proxy) = ledger();

    // `audit` carries the marker but is not on the public surface:
    // delegation succeeds, no advice, no error.
    proxy.invoke("audit", ()).unwrap();

    assert_eq!(recorder.advice_active_for("audit"), Some(false));
    assert!(!is_active());
}

#[test]
fn failure_restores_flag_and_passes_error_through() {
    let (recorder, proxy) = ledger();

    let err = proxy.invoke("reject", ()).unwrap_err();

    assert_eq!(err.into_service(), Some(FixtureError::Rejected));
    assert_eq!(recorder.advice_active_for("reject"), Some(true));
    assert!(!is_active());
}

#[test]
fn unknown_operation_is_a_dispatch_error() {
    let (recorder, proxy) = ledger();

    let err = proxy.invoke("nope", ()).unwrap_err();

    assert!(err.is_unknown());
    assert!(recorder.is_empty());
}

#[test]
fn flag_restored_after_every_invocation() {
    let (_recorder, proxy) = ledger();

    proxy.invoke("post", ()).unwrap();
    assert!(!is_active());
    proxy.invoke("preview", ()).unwrap();
    assert!(!is_active());
    let _ = proxy.invoke("reject", ());
    assert!(!is_active());
}

#[test]
fn proxy_reports_resolved_surface() {
    let (_recorder, proxy) = ledger();

    let registry = proxy.registry();
    assert_eq!(registry.len(), 4);
    assert!(registry.is_eligible("post"));
    assert!(registry.is_eligible("reject"));
    assert!(!registry.is_eligible("preview"));
    assert!(!registry.is_eligible("audit"));

    // The proxy is the object presented to callers; the real instance
    // stays reachable behind it.
    let _inner: &LedgerService = proxy.inner();
}

/// Advised entry point that drives a second, separately proxied service.
///
/// Nested dispatch through another proxy runs inside the enclosing
/// context: the flag stays set for unadvised downstream operations and is
/// restored to the enclosing value (not cleared) after advised ones.
struct Coordinator {
    downstream: DispatchProxy<LedgerService, NoopAdvice>,
    recorder: Arc<CallRecorder>,
}

impl Coordinator {
    fn unwrap_service(err: DispatchError<FixtureError>) -> FixtureError {
        match err {
            DispatchError::Service(inner) => inner,
            DispatchError::UnknownOperation(name) => FixtureError::Unsupported(name),
        }
    }
}

impl Service for Coordinator {
    type Request = ();
    type Response = ();
    type Error = FixtureError;

    fn operations(&self) -> Vec<OperationDescriptor> {
        vec![OperationDescriptor::new("orchestrate").advised()]
    }

    fn call(&self, operation: &str, _request: ()) -> Result<(), FixtureError> {
        match operation {
            "orchestrate" => {
                self.recorder.record("orchestrate");
                self.downstream
                    .invoke("preview", ())
                    .map_err(Self::unwrap_service)?;
                self.downstream
                    .invoke("post", ())
                    .map_err(Self::unwrap_service)?;
                self.recorder.record("after-nested");
                Ok(())
            }
            other => Err(FixtureError::Unsupported(other.to_string())),
        }
    }
}

#[test]
fn nested_dispatch_inherits_enclosing_context() {
    let recorder = Arc::new(CallRecorder::new());
    let downstream = DispatchProxy::with_advice(
        LedgerService::new(Arc::clone(&recorder)),
        NoopAdvice,
    )
    .unwrap();
    let coordinator = DispatchProxy::with_advice(
        Coordinator {
            downstream,
            recorder: Arc::clone(&recorder),
        },
        NoopAdvice,
    )
    .unwrap();

    coordinator.invoke("orchestrate", ()).unwrap();

    // Everything below the advised entry point ran in its context,
    // including the unadvised downstream operation; the nested advised
    // operation restored the flag to the enclosing value, not to false.
    assert_eq!(recorder.advice_active_for("orchestrate"), Some(true));
    assert_eq!(recorder.advice_active_for("preview"), Some(true));
    assert_eq!(recorder.advice_active_for("post"), Some(true));
    assert_eq!(recorder.advice_active_for("after-nested"), Some(true));
    assert!(!is_active());
}

/// Probes the flag on the invoking thread and on a freshly spawned one.
struct CrossThreadProbe;

impl Service for CrossThreadProbe {
    type Request = ();
    type Response = (bool, bool);
    type Error = FixtureError;

    fn operations(&self) -> Vec<OperationDescriptor> {
        vec![OperationDescriptor::new("probe").advised()]
    }

    fn call(&self, _operation: &str, _request: ()) -> Result<(bool, bool), FixtureError> {
        let here = is_active();
        let elsewhere = std::thread::spawn(is_active).join().expect("probe thread");
        Ok((here, elsewhere))
    }
}

#[test]
fn flag_is_scoped_to_the_invoking_thread() {
    let proxy = DispatchProxy::with_advice(CrossThreadProbe, NoopAdvice).unwrap();

    let (here, elsewhere) = proxy.invoke("probe", ()).unwrap();

    assert!(here);
    assert!(!elsewhere);
}

#[test]
fn concurrent_callers_have_independent_flags() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let (recorder, proxy) = ledger();
                proxy.invoke("post", ()).unwrap();
                proxy.invoke("preview", ()).unwrap();
                (
                    recorder.advice_active_for("post"),
                    recorder.advice_active_for("preview"),
                    is_active(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (post, preview, after) = handle.join().unwrap();
        assert_eq!(post, Some(true));
        assert_eq!(preview, Some(false));
        assert!(!after);
    }
}
