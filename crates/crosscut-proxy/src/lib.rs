//! Crosscut Proxy
//!
//! Explicit-decorator interception: a [`DispatchProxy`] is presented to
//! all external callers in place of the real service instance and decides
//! per call whether to bracket the operation with cross-cutting advice.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use crosscut_proxy::prelude::*;
//!
//! let proxy = DispatchProxy::new(service)?;
//!
//! // Advised operations run with the active-context flag set
//! proxy.invoke("post", request)?;
//!
//! // Anywhere below the entry point:
//! assert!(crosscut_context::is_active());
//! ```
//!
//! Self-invocation bypasses the proxy: when the real implementation calls
//! a sibling routine directly, no advice applies and the flag is not newly
//! set, whatever the inner operation's marker says.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod dispatch;
pub mod error;

// Re-exports
pub use dispatch::DispatchProxy;
pub use error::DispatchError;

/// Re-export the dispatch surface for convenience
pub mod prelude {
    pub use crate::dispatch::DispatchProxy;
    pub use crate::error::DispatchError;
    pub use crosscut_advice::{
        Advice, AdviceRegistry, NoopAdvice, OperationDescriptor, RegistryError, Service,
        UnitOfWorkAdvice, Visibility,
    };
    pub use crosscut_context::is_active;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
