use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{PrioritizerError, PrioritizerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> PrioritizerResult<Config> {
        let path = path.map_or_else(Self::default_config_path, Path::to_path_buf);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> PrioritizerResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| PrioritizerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| PrioritizerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> PrioritizerResult<()> {
        if path.exists() {
            return Err(PrioritizerError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} directly or remove it first", path.display())),
            ));
        }

        let storage_path = Config::default().storage.path;
        let sample_config = format!(
            r#"# CRM Prioritizer Configuration

[storage]
# JSON file holding one prioritization per client
path = "{}"

[analyzer]
# Send uploaded images to a content analysis service before scoring
enabled = false
endpoint = "http://localhost:8787/analyze"
# Env var holding the bearer token for the service
api_key_env = "CONTENT_ANALYZER_API_KEY"
timeout_secs = 30

[ranking]
# Number of clients shown in the priority clients view
limit = 5
"#,
            storage_path.replace('\\', "\\\\")
        );

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.storage.path.trim().is_empty() {
            errors.push("storage.path must not be empty".to_string());
        }

        if config.analyzer.enabled {
            let endpoint = config.analyzer.endpoint.trim();
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                errors.push(format!("analyzer.endpoint must be an http(s) URL: '{endpoint}'"));
            }
            if config.analyzer.timeout_secs == 0 {
                errors.push("analyzer.timeout_secs must be greater than 0".to_string());
            }
        }

        if config.ranking.limit == 0 {
            errors.push("ranking.limit must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ranking.limit, 5);
        assert!(!config.analyzer.enabled);
    }

    #[test]
    fn test_sample_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ConfigManager::create_sample_config(&path).unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.analyzer.api_key_env.as_deref(), Some("CONTENT_ANALYZER_API_KEY"));

        assert!(ConfigManager::create_sample_config(&path).is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ranking]\nlimit = 3\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.ranking.limit, 3);
        assert_eq!(config.analyzer.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml_is_config_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ranking\nlimit = ").unwrap();

        let err = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(err, PrioritizerError::ConfigurationFileError { .. }));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = Config::default();
        config.analyzer.enabled = true;
        config.analyzer.endpoint = "localhost:8787".to_string();
        config.analyzer.timeout_secs = 0;
        config.ranking.limit = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
