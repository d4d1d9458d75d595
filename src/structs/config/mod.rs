pub mod analyzer_config;
pub mod config;
pub mod ranking_config;
pub mod storage_config;
