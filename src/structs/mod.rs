pub mod cli;
pub mod client_summary;
pub mod config;
pub mod content_analysis;
pub mod image_upload;
pub mod prioritization_input;
pub mod prioritization_request;
pub mod score_breakdown;
pub mod signal_args;
pub mod stored_prioritization;
pub mod validation_result;
