use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_analyzer_endpoint")]
    pub endpoint: String,

    /// Name of the env var holding the bearer token, if the service needs one.
    #[serde(default)]
    pub api_key_env: Option<String>,

    #[serde(default = "ConfigHelper::default_analyzer_timeout_secs")]
    pub timeout_secs: u64,
}

impl AnalyzerConfig {
    pub fn api_key(&self) -> Option<String> {
        self.api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: ConfigHelper::default_analyzer_endpoint(),
            api_key_env: Some(ConfigHelper::default_analyzer_api_key_env()),
            timeout_secs: ConfigHelper::default_analyzer_timeout_secs(),
        }
    }
}
