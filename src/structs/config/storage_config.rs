use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "ConfigHelper::default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: ConfigHelper::default_storage_path(),
        }
    }
}
