//! Request executor for the workflow service HTTP API

pub mod client;
pub mod protocol;

pub use client::{connect, HttpClient, Transport, Unreachable};
pub use protocol::{ApiResponse, Outcome, Request};
