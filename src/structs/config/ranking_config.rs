use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    #[serde(default = "ConfigHelper::default_ranking_limit")]
    pub limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: ConfigHelper::default_ranking_limit(),
        }
    }
}
