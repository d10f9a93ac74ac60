//! Per-run state threaded through the scenario groups

use super::recorder::Recorder;

/// Identifiers captured so far plus the assertion counters
///
/// Created fresh for every run and dropped when the report is built.
#[derive(Debug, Default)]
pub struct RunContext {
    /// Set by a successful create-definition call
    pub definition_id: Option<String>,
    /// Set by a successful start-instance call
    pub instance_id: Option<String>,
    pub recorder: Recorder,
}

impl RunContext {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            definition_id: None,
            instance_id: None,
            recorder,
        }
    }
}
