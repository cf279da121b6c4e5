//! Execution-scoped active-context flag
//!
//! Answers "is advice currently active for this thread of execution?" from
//! anywhere on the call graph:
//! - [`is_active`]: read-only accessor, callable at any depth
//! - [`ActiveScope`]: RAII guard that sets the flag on entry and restores
//!   the prior value on every exit path
//!
//! The flag is thread-local. Concurrent callers observe independent state;
//! a scope entered on one thread is invisible on every other.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static ACTIVE: Cell<bool> = const { Cell::new(false) };
}

/// Check whether advice is active for the current thread of execution.
///
/// Returns true iff the nearest enclosing advised entry point is still
/// executing on this thread. Code reached through a direct self-reference
/// observes whatever the original entry point set, if anything.
#[inline]
#[must_use]
pub fn is_active() -> bool {
    ACTIVE.with(Cell::get)
}

/// RAII scope for the active-context flag.
///
/// Entering a scope sets the flag; dropping the scope restores the value
/// that was in effect before entry. Restoration runs on success, failure,
/// and unwind alike, so a failing advised operation never leaks an active
/// flag to its caller.
#[derive(Debug)]
#[must_use = "the prior flag value is restored when the scope is dropped"]
pub struct ActiveScope {
    prev: bool,
    // Thread-scoped by construction: the guard must be dropped on the
    // thread that entered it.
    _not_send: PhantomData<*const ()>,
}

impl ActiveScope {
    /// Enter an advised scope, setting the flag for the current thread.
    pub fn enter() -> Self {
        let prev = ACTIVE.with(|flag| flag.replace(true));
        Self {
            prev,
            _not_send: PhantomData,
        }
    }

    /// The flag value that was in effect before this scope was entered.
    #[inline]
    #[must_use]
    pub fn prior(&self) -> bool {
        self.prev
    }
}

impl Drop for ActiveScope {
    fn drop(&mut self) {
        ACTIVE.with(|flag| flag.set(self.prev));
    }
}
