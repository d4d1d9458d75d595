use async_trait::async_trait;
use crate::errors::PrioritizerResult;
use crate::structs::content_analysis::ContentAnalysis;
use crate::structs::image_upload::ImageUpload;

#[async_trait]
pub trait ContentAnalyzer: Send + Sync {

    async fn analyze(&self, image: ImageUpload) -> PrioritizerResult<ContentAnalysis>;
}
