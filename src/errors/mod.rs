use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrioritizerError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Input errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Persistence errors
    #[error("Storage error during {operation}: {reason}")]
    StorageError {
        operation: String,
        reason: String,
    },
    #[error("Client '{client_id}' already has a prioritization ({existing_id})")]
    DuplicatePrioritization {
        client_id: String,
        existing_id: String,
    },

    // Content analysis / network errors
    #[error("Content analysis failed: {reason}")]
    AnalysisError {
        reason: String,
        status_code: Option<u16>,
    },
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl PrioritizerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn storage_error(operation: &str, reason: &str) -> Self {
        Self::StorageError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn analysis_error(reason: &str, status_code: Option<u16>) -> Self {
        Self::AnalysisError {
            reason: reason.to_string(),
            status_code,
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::AnalysisError { .. } => true,
            Self::NetworkError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::DuplicatePrioritization { .. } => true,
            Self::ParseError { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::StorageError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::StorageError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::AnalysisError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::DuplicatePrioritization { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    /// Display text plus whatever hint helps the user fix the problem.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { .. } => {
                format!("{self}\n💡 Check file permissions and syntax")
            }
            Self::ValidationError { suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ParseError { line_number, .. } => {
                let mut msg = self.to_string();
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::StorageError { .. } => {
                format!("{self}\n💡 Check the storage path in your configuration")
            }
            Self::DuplicatePrioritization { .. } => {
                format!("{self}\n💡 Re-run with --force to replace the existing prioritization")
            }
            Self::AnalysisError { status_code, .. } => {
                let mut msg = self.to_string();
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg
            }
            Self::NetworkError { url, status_code, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check your connection and the analyzer endpoint");
                msg
            }
            Self::SystemError { .. } => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for prioritizer operations
pub type PrioritizerResult<T> = Result<T, PrioritizerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &PrioritizerError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - fix the input and retry");
        }
    }
}

impl From<std::io::Error> for PrioritizerError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PrioritizerError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for PrioritizerError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_suggests_force() {
        let err = PrioritizerError::DuplicatePrioritization {
            client_id: "c-1".to_string(),
            existing_id: "p-9".to_string(),
        };
        assert!(err.user_message().contains("--force"));
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::High);
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
    }

    #[test]
    fn test_json_error_maps_to_parse_error() {
        let err: PrioritizerError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PrioritizerError::ParseError { ref content_type, .. } if content_type == "JSON"));
    }
}
