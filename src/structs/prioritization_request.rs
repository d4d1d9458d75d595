use serde::{Deserialize, Serialize};
use crate::enums::priority_level::PriorityLevel;
use crate::structs::prioritization_input::PrioritizationInput;

/// A request to prioritize one client.
///
/// `calculated_priority` lets a caller override the scorer, e.g. when the
/// label was decided by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizationRequest {
    pub client_id: String,

    #[serde(flatten)]
    pub input: PrioritizationInput,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_priority: Option<PriorityLevel>,
}

impl PrioritizationRequest {
    pub fn new(client_id: &str, input: PrioritizationInput) -> Self {
        Self {
            client_id: client_id.to_string(),
            input,
            calculated_priority: None,
        }
    }

    pub fn with_priority_override(mut self, priority: PriorityLevel) -> Self {
        self.calculated_priority = Some(priority);
        self
    }
}
