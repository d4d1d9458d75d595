use crate::config::constants::{
    ANALYZER_API_KEY_ENV, CONFIG_DIR_NAME, DEFAULT_ANALYZER_ENDPOINT, DEFAULT_ANALYZER_TIMEOUT_SECS,
    DEFAULT_RANKING_LIMIT, STORE_FILE_NAME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_storage_path() -> String {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(STORE_FILE_NAME))
            .unwrap_or_else(|| STORE_FILE_NAME.into())
            .to_string_lossy()
            .to_string()
    }

    pub fn default_analyzer_endpoint() -> String {
        DEFAULT_ANALYZER_ENDPOINT.to_string()
    }

    pub fn default_analyzer_api_key_env() -> String {
        ANALYZER_API_KEY_ENV.to_string()
    }

    pub fn default_analyzer_timeout_secs() -> u64 {
        DEFAULT_ANALYZER_TIMEOUT_SECS
    }

    pub fn default_ranking_limit() -> usize {
        DEFAULT_RANKING_LIMIT
    }
}
