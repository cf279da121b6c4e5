//! Crosscut Advice
//!
//! Operation model for the dispatch-proxy interception layer.
//!
//! # Core Concepts
//!
//! - [`OperationDescriptor`]: a declared operation (name, advice marker,
//!   visibility); immutable after composition
//! - [`AdviceRegistry`]: composition-time eligibility resolution; only
//!   public operations are ever advice-eligible
//! - [`Advice`]: pre/post hooks bracketing an eligible operation
//! - [`UnitOfWorkAdvice`]: bundled advice logging begin/complete/abort
//! - [`Service`]: the real instance placed behind a proxy
//!
//! # Example
//!
//! ```rust,ignore
//! use crosscut_advice::{AdviceRegistry, OperationDescriptor, Visibility};
//!
//! let registry = AdviceRegistry::resolve([
//!     OperationDescriptor::new("post").advised(),
//!     OperationDescriptor::new("preview"),
//!     OperationDescriptor::new("audit").advised().with_visibility(Visibility::Internal),
//! ])?;
//!
//! assert!(registry.is_eligible("post"));
//! assert!(!registry.is_eligible("audit")); // marker silently ignored
//! ```

mod descriptor;
mod hooks;
mod registry;
mod service;

// Re-exports
pub use descriptor::{OperationDescriptor, Visibility};
pub use hooks::{Advice, NoopAdvice, UnitOfWorkAdvice};
pub use registry::{AdviceRegistry, RegistryError};
pub use service::Service;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
