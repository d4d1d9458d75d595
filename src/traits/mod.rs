pub mod content_analyzer;
pub mod prioritization_store;
