use serde::{Deserialize, Serialize};
use crate::structs::config::analyzer_config::AnalyzerConfig;
use crate::structs::config::ranking_config::RankingConfig;
use crate::structs::config::storage_config::StorageConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub ranking: RankingConfig,
}
