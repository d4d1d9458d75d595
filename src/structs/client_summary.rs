use serde::{Deserialize, Serialize};
use crate::enums::priority_level::PriorityLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub company: Option<String>,

    /// Stored priority label; anything unrecognised ranks as medium.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealSummary {
    pub id: String,

    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedClient {
    pub client: ClientSummary,
    pub deal_count: usize,
    pub priority: PriorityLevel,
}
