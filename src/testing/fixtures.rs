//! Fixed payloads the suite submits

use crate::api::protocol::{ActionSpec, DefinitionSpec, StateSpec};

pub const ACTION_APPROVE: &str = "approve";
pub const ACTION_COMPLETE: &str = "complete";
/// Not part of any definition the suite creates
pub const ACTION_UNREGISTERED: &str = "invalid";
/// Never issued by the service
pub const NONEXISTENT_ID: &str = "nonexistent";

/// pending -> approved -> completed
pub fn linear_definition() -> DefinitionSpec {
    DefinitionSpec {
        name: "Test Workflow".to_string(),
        states: vec![
            StateSpec::new("pending", "Pending").initial(),
            StateSpec::new("approved", "Approved"),
            StateSpec::new("completed", "Completed").terminal(),
        ],
        actions: vec![
            ActionSpec::new(ACTION_APPROVE, "Approve", &["pending"], "approved"),
            ActionSpec::new(ACTION_COMPLETE, "Complete", &["approved"], "completed"),
        ],
    }
}

/// A single non-initial state and no actions; must be refused
pub fn definition_without_initial_state() -> DefinitionSpec {
    DefinitionSpec {
        name: "Invalid".to_string(),
        states: vec![StateSpec::new("test", "Test")],
        actions: Vec::new(),
    }
}
