//! Acceptance suite for the workflow service
//!
//! A fixed, ordered set of scenario groups run against the service's HTTP
//! API. Each step's answer is reduced to an [`crate::api::Outcome`] and
//! judged by the [`Recorder`]; the run ends in a [`RunReport`].

mod context;
pub mod fixtures;
mod recorder;
mod runner;
pub mod suite;

pub use context::RunContext;
pub use recorder::{Expectation, Recorder};
pub use runner::{run_suite, RunReport, Verdict};
