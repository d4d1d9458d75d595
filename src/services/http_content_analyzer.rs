use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_duration;
use crate::errors::{PrioritizerError, PrioritizerResult};
use crate::structs::config::analyzer_config::AnalyzerConfig;
use crate::structs::content_analysis::ContentAnalysis;
use crate::structs::image_upload::ImageUpload;
use crate::traits::content_analyzer::ContentAnalyzer;

/// Posts raw image bytes to the content analysis service and reads back
/// `{ priority, keywordsCount, sentiment }`.
#[derive(Clone)]
pub struct HttpContentAnalyzer {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpContentAnalyzer {
    pub fn new(endpoint: String, api_key: Option<String>, timeout_secs: u64) -> PrioritizerResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(timeout_secs))
            .build()?;

        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    pub fn from_config(config: &AnalyzerConfig) -> PrioritizerResult<Self> {
        let api_key = config.api_key();
        if api_key.is_none() {
            if let Some(env) = &config.api_key_env {
                log::warn!("⚠️ {env} is not set, calling the analyzer without credentials");
            }
        }
        Self::new(config.endpoint.clone(), api_key, config.timeout_secs)
    }
}

#[async_trait]
impl ContentAnalyzer for HttpContentAnalyzer {
    async fn analyze(&self, image: ImageUpload) -> PrioritizerResult<ContentAnalysis> {
        log::info!("🖼️ Analyzing {} ({} bytes)", image.file_name, image.bytes.len());

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", image.content_type.as_str())
            .header("Accept", "application/json")
            .header("X-File-Name", image.file_name.as_str())
            .body(image.bytes);

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PrioritizerError::analysis_error(
                &format!("service responded with {status}: {}", body.trim()),
                Some(status.as_u16()),
            ));
        }

        let body = response.text().await?;
        let analysis: ContentAnalysis = serde_json::from_str(&body)?;

        log::debug!(
            "Analysis result: priority={}, keywords={}, sentiment={}",
            analysis.priority,
            analysis.keywords_count,
            analysis.sentiment
        );
        Ok(analysis)
    }
}
