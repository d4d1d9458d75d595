use serde::{Deserialize, Serialize};
use crate::enums::priority_level::PriorityLevel;

/// Priority after each scoring stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub baseline: PriorityLevel,
    pub after_advanced: PriorityLevel,
    pub final_priority: PriorityLevel,
}
