use std::fs;
use std::path::Path;
use crate::errors::{PrioritizerError, PrioritizerResult};

const SUPPORTED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: &str, bytes: Vec<u8>) -> PrioritizerResult<Self> {
        let content_type = Self::content_type_for(file_name)?;
        Ok(Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        })
    }

    pub fn from_path(path: &Path) -> PrioritizerResult<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        // Check the extension before reading so unsupported files fail fast.
        Self::content_type_for(&file_name)?;
        let bytes = fs::read(path)?;
        Self::new(&file_name, bytes)
    }

    fn content_type_for(file_name: &str) -> PrioritizerResult<&'static str> {
        let extension = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        SUPPORTED_IMAGE_TYPES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, content_type)| *content_type)
            .ok_or_else(|| {
                PrioritizerError::validation_error(
                    "image",
                    file_name,
                    "supported image type",
                    Some("Use a png, jpg, webp or gif file"),
                )
            })
    }
}
