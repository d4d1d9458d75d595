pub mod client_ranker;
pub mod http_content_analyzer;
pub mod json_file_store;
pub mod prioritization_service;
pub mod priority_scorer;
