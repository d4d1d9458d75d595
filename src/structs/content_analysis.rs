use serde::{Deserialize, Serialize};
use crate::enums::priority_level::PriorityLevel;
use crate::enums::sentiment::Sentiment;

/// Signals returned by the content analysis service for an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub priority: PriorityLevel,
    pub keywords_count: u32,
    pub sentiment: Sentiment,
}
