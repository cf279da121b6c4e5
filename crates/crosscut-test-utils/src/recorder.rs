//! Call recording for flag assertions
//!
//! Fixture operations record the advice flag they observe, so tests can
//! assert what the original log output demonstrated.

use parking_lot::Mutex;

/// One recorded operation call and the flag value observed inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub operation: String,
    pub advice_active: bool,
}

/// Append-only record of fixture calls.
#[derive(Debug, Default)]
pub struct CallRecorder {
    inner: Mutex<Vec<CallRecord>>,
}

impl CallRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call, capturing the flag as observed at the call site.
    pub fn record(&self, operation: impl Into<String>) {
        let advice_active = crosscut_context::is_active();
        tracing::info!("advice active={}", advice_active);
        self.inner.lock().push(CallRecord {
            operation: operation.into(),
            advice_active,
        });
    }

    /// Snapshot of all records, in call order.
    #[must_use]
    pub fn records(&self) -> Vec<CallRecord> {
        self.inner.lock().clone()
    }

    /// Flag observed by the most recent call of `operation`, if any.
    #[must_use]
    pub fn advice_active_for(&self, operation: &str) -> Option<bool> {
        self.inner
            .lock()
            .iter()
            .rev()
            .find(|r| r.operation == operation)
            .map(|r| r.advice_active)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
