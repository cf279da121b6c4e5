//! Testing utilities for the crosscut workspace
//!
//! Shared fixture services and call recording.

#![allow(missing_docs)]

mod recorder;
mod services;

pub use recorder::{CallRecord, CallRecorder};
pub use services::{FixtureError, LedgerService, RelayService};
