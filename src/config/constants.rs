use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "crm-prioritizer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_FILE_NAME: &str = "prioritizations.json";

pub const DEFAULT_ANALYZER_ENDPOINT: &str = "http://localhost:8787/analyze";
pub const DEFAULT_ANALYZER_TIMEOUT_SECS: u64 = 30;
pub const ANALYZER_API_KEY_ENV: &str = "CONTENT_ANALYZER_API_KEY";

/// Size of the dashboard's "priority clients" list.
pub const DEFAULT_RANKING_LIMIT: usize = 5;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
