use crate::errors::PrioritizerError;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: &str) {
        self.errors.push(error.to_string());
    }

    pub fn add_warning(&mut self, warning: &str) {
        self.warnings.push(warning.to_string());
    }

    /// Collapses the collected errors into a single validation error.
    pub fn into_result(self, field: &str) -> Result<Vec<String>, PrioritizerError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }
        Err(PrioritizerError::validation_error(
            field,
            &self.errors.join("; "),
            "all mandatory questions answered",
            Some("Answer at least one active_deals and one interaction_frequency option"),
        ))
    }

    pub fn print_summary(&self) {
        if self.is_valid() {
            println!("✅ Validation passed");
        } else {
            println!("❌ Validation failed with {} errors", self.errors.len());
        }

        if !self.warnings.is_empty() {
            println!("⚠️ {} warnings found", self.warnings.len());
        }

        for error in &self.errors {
            println!("   ❌ {error}");
        }

        for warning in &self.warnings {
            println!("   ⚠️ {warning}");
        }
    }
}
