use std::sync::Arc;
use crate::errors::{PrioritizerError, PrioritizerResult};
use crate::services::priority_scorer::PriorityScorer;
use crate::structs::image_upload::ImageUpload;
use crate::structs::prioritization_input::PrioritizationInput;
use crate::structs::prioritization_request::PrioritizationRequest;
use crate::structs::stored_prioritization::{NewPrioritization, PrioritizationResponse, StoredPrioritization};
use crate::traits::content_analyzer::ContentAnalyzer;
use crate::traits::prioritization_store::PrioritizationStore;

pub struct PrioritizationService {
    store: Arc<dyn PrioritizationStore>,
    analyzer: Option<Arc<dyn ContentAnalyzer>>,
}

impl PrioritizationService {
    pub fn new(store: Arc<dyn PrioritizationStore>) -> Self {
        Self {
            store,
            analyzer: None,
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Validates, optionally enriches with image analysis, scores and saves.
    pub async fn create(
        &self,
        request: PrioritizationRequest,
        image: Option<ImageUpload>,
        replace: bool,
    ) -> PrioritizerResult<PrioritizationResponse> {
        if request.client_id.trim().is_empty() {
            return Err(PrioritizerError::validation_error(
                "client_id",
                &request.client_id,
                "non-empty client identifier",
                None,
            ));
        }

        for warning in request.input.validate().into_result("input")? {
            log::warn!("⚠️ {warning}");
        }

        let input = match image {
            Some(image) => self.enrich_with_analysis(request.input, image).await,
            None => request.input,
        };

        let calculated_priority = match request.calculated_priority {
            Some(priority) => {
                log::info!("Using caller-supplied priority '{priority}' for client {}", request.client_id);
                priority
            }
            None => PriorityScorer::score(&input),
        };

        let stored = self.store.save(
            NewPrioritization {
                client_id: request.client_id,
                input,
                calculated_priority,
            },
            replace,
        )?;

        log::info!(
            "✅ Prioritization {} saved for client {}: {}",
            stored.id,
            stored.client_id,
            stored.calculated_priority
        );
        Ok(stored.into())
    }

    pub fn list(&self) -> PrioritizerResult<Vec<StoredPrioritization>> {
        self.store.list()
    }

    /// Analysis failures never block a prioritization; the input is scored
    /// without external signals instead.
    async fn enrich_with_analysis(&self, input: PrioritizationInput, image: ImageUpload) -> PrioritizationInput {
        let Some(analyzer) = &self.analyzer else {
            log::warn!("⚠️ Image {} supplied but no content analyzer is configured, ignoring it", image.file_name);
            return input;
        };

        let file_name = image.file_name.clone();
        match analyzer.analyze(image).await {
            Ok(analysis) => {
                log::info!(
                    "🖼️ Image analyzed: {} keywords, sentiment {}, priority {}",
                    analysis.keywords_count,
                    analysis.sentiment,
                    analysis.priority
                );
                input.with_content_analysis(&analysis)
            }
            Err(e) => {
                log::warn!("⚠️ Could not analyze {file_name}: {e}. Continuing without image analysis.");
                input
            }
        }
    }
}
