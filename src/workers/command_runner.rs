use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use serde::de::DeserializeOwned;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::priority_level::PriorityLevel;
use crate::errors::{PrioritizerError, PrioritizerResult};
use crate::logger::priority_report_logger::PriorityReportLogger;
use crate::services::client_ranker::ClientRanker;
use crate::services::http_content_analyzer::HttpContentAnalyzer;
use crate::services::json_file_store::JsonFileStore;
use crate::services::prioritization_service::PrioritizationService;
use crate::services::priority_scorer::PriorityScorer;
use crate::structs::client_summary::{ClientSummary, DealSummary};
use crate::structs::config::config::Config;
use crate::structs::image_upload::ImageUpload;
use crate::structs::prioritization_request::PrioritizationRequest;
use crate::structs::signal_args::SignalArgs;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> PrioritizerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Score { signals, explain, json } => self.score_command(signals, explain, json),
            Commands::Prioritize { client_id, signals, image, priority_override, force } => {
                self.prioritize_command(client_id, signals, image, priority_override, force).await
            }
            Commands::List => self.list_command(),
            Commands::Rank { clients, deals, limit } => self.rank_command(&clients, deals.as_deref(), limit),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.3}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> PrioritizerResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config).map_err(|errors| {
            PrioritizerError::config_error(
                &errors.join("; "),
                None,
                Some("Run 'crm-prioritizer validate' for details"),
            )
        })?;
        Ok(config)
    }

    fn init_command(&self) -> PrioritizerResult<()> {
        log::info!("🚀 Initializing crm-prioritizer configuration...");
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(ConfigManager::default_config_path);
        ConfigManager::create_sample_config(&path)?;
        log::info!("🔧 Run 'crm-prioritizer validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> PrioritizerResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = ConfigManager::load(self.config_path.as_deref())?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!("   💾 Storage: {}", config.storage.path);
                if config.analyzer.enabled {
                    println!("   🖼️ Analyzer: {}", config.analyzer.endpoint);
                } else {
                    println!("   🖼️ Analyzer: disabled");
                }
                println!("   🔥 Ranking limit: {}", config.ranking.limit);
                Ok(())
            }
            Err(errors) => {
                println!("❌ Issues found:");
                for error in &errors {
                    println!("   - {error}");
                }
                Err(PrioritizerError::config_error(
                    &format!("{} configuration issue(s)", errors.len()),
                    None,
                    None,
                ))
            }
        }
    }

    fn score_command(&self, signals: SignalArgs, explain: bool, json: bool) -> PrioritizerResult<()> {
        let input = signals.into_input()?;
        let validation = input.validate();
        // Invalid input is reported once, through the returned error.
        if validation.is_valid() && !validation.warnings.is_empty() {
            validation.print_summary();
        }
        validation.into_result("input")?;

        let breakdown = PriorityScorer::explain(&input);

        if json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else if explain {
            PriorityReportLogger::print_breakdown(&input, &breakdown);
        } else {
            PriorityReportLogger::print_score(&breakdown);
        }
        Ok(())
    }

    async fn prioritize_command(
        &self,
        client_id: String,
        signals: SignalArgs,
        image: Option<PathBuf>,
        priority_override: Option<PriorityLevel>,
        force: bool,
    ) -> PrioritizerResult<()> {
        let config = self.load_config()?;
        let input = signals.into_input()?;

        let mut request = PrioritizationRequest::new(&client_id, input);
        if let Some(priority) = priority_override {
            request = request.with_priority_override(priority);
        }

        let image = image.as_deref().map(ImageUpload::from_path).transpose()?;

        let store = Arc::new(JsonFileStore::new(&config.storage.path));
        let mut service = PrioritizationService::new(store);
        if config.analyzer.enabled {
            service = service.with_analyzer(Arc::new(HttpContentAnalyzer::from_config(&config.analyzer)?));
        }

        let response = service.create(request, image, force).await?;
        PriorityReportLogger::print_saved(&response);
        Ok(())
    }

    fn list_command(&self) -> PrioritizerResult<()> {
        let config = self.load_config()?;
        let service = PrioritizationService::new(Arc::new(JsonFileStore::new(&config.storage.path)));
        PriorityReportLogger::print_prioritizations(&service.list()?);
        Ok(())
    }

    fn rank_command(&self, clients_path: &Path, deals_path: Option<&Path>, limit: Option<usize>) -> PrioritizerResult<()> {
        let config = self.load_config()?;
        let limit = Self::ranking_limit(limit, config.ranking.limit)?;
        let clients: Vec<ClientSummary> = Self::read_json(clients_path)?;
        let deals: Vec<DealSummary> = match deals_path {
            Some(path) => Self::read_json(path)?,
            None => Vec::new(),
        };

        let ranked = ClientRanker::rank(&clients, &deals, limit);
        PriorityReportLogger::print_ranking(&ranked);
        Ok(())
    }

    /// The configured limit is already checked by `load_config`; an explicit
    /// `--limit` must meet the same bound.
    fn ranking_limit(requested: Option<usize>, configured: usize) -> PrioritizerResult<usize> {
        match requested {
            Some(0) => Err(PrioritizerError::validation_error(
                "limit",
                "0",
                "greater than 0",
                Some("Pass --limit 1 or more, or omit it to use ranking.limit"),
            )),
            Some(limit) => Ok(limit),
            None => Ok(configured),
        }
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> PrioritizerResult<T> {
        let content = fs::read_to_string(path).map_err(|e| {
            PrioritizerError::system_error(&format!("reading {}", path.display()), &e.to_string())
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner_in(dir: &tempfile::TempDir) -> CommandRunner {
        CommandRunner::new(Some(dir.path().join("config.toml")))
    }

    #[test]
    fn test_ranking_limit_falls_back_to_config() {
        assert_eq!(CommandRunner::ranking_limit(None, 5).unwrap(), 5);
        assert_eq!(CommandRunner::ranking_limit(Some(2), 5).unwrap(), 2);
    }

    #[test]
    fn test_zero_rank_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner_in(&dir);

        let err = runner
            .rank_command(&dir.path().join("clients.json"), None, Some(0))
            .unwrap_err();
        assert!(matches!(err, PrioritizerError::ValidationError { ref field, .. } if field == "limit"));
    }

    #[test]
    fn test_rank_reads_clients_with_explicit_limit() {
        let dir = tempfile::tempdir().unwrap();
        let clients = dir.path().join("clients.json");
        fs::write(
            &clients,
            r#"[{"id":"a","name":"Acme","status":"high"},{"id":"b","name":"Beta","status":"low"}]"#,
        )
        .unwrap();

        runner_in(&dir).rank_command(&clients, None, Some(1)).unwrap();
    }

    #[test]
    fn test_score_without_mandatory_answers_is_validation_error() {
        let runner = CommandRunner::new(None);
        let err = runner.score_command(SignalArgs::default(), false, false).unwrap_err();
        assert!(matches!(err, PrioritizerError::ValidationError { ref field, .. } if field == "input"));
    }
}
