use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::priority_level::PriorityLevel;
use crate::structs::prioritization_input::PrioritizationInput;

/// Persistence payload: the answers plus the label computed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrioritization {
    pub client_id: String,

    #[serde(flatten)]
    pub input: PrioritizationInput,

    pub calculated_priority: PriorityLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPrioritization {
    pub id: String,

    pub client_id: String,

    #[serde(flatten)]
    pub input: PrioritizationInput,

    pub calculated_priority: PriorityLevel,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl StoredPrioritization {
    pub fn create(new: NewPrioritization, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            client_id: new.client_id,
            input: new.input,
            calculated_priority: new.calculated_priority,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the answers and label, keeping identity and creation time.
    pub fn replace(&mut self, new: NewPrioritization, now: DateTime<Utc>) {
        self.input = new.input;
        self.calculated_priority = new.calculated_priority;
        self.updated_at = now;
    }
}

/// What callers get back after saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizationResponse {
    pub id: String,
    pub client_id: String,
    pub calculated_priority: PriorityLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StoredPrioritization> for PrioritizationResponse {
    fn from(stored: StoredPrioritization) -> Self {
        Self {
            id: stored.id,
            client_id: stored.client_id,
            calculated_priority: stored.calculated_priority,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}
