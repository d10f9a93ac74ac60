//! Workflow acceptance harness
//!
//! Black-box test suite for a finite-state workflow service reached over
//! HTTP: definitions, instances, actions and validation, reported as
//! pass/fail lines plus a final verdict.

pub mod api;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use api::{HttpClient, Outcome, Request, Transport};
pub use common::{Config, Error, Result};
pub use testing::{run_suite, RunReport, Verdict};
