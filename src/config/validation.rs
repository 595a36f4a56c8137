//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject module paths that would create unnamed modules
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ModularConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::ModularConfig;
use crate::tree::path::SEPARATOR;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("module path is empty")]
    EmptyModulePath,
    #[error("module path {0:?} contains an empty segment")]
    EmptySegment(String),
    #[error("module field {0:?} contains whitespace")]
    ModuleFieldWhitespace(String),
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &ModularConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.module_field.chars().any(char::is_whitespace) {
        errors.push(ValidationError::ModuleFieldWhitespace(config.module_field.clone()));
    }

    for path in config.modules.keys() {
        if path.is_empty() {
            errors.push(ValidationError::EmptyModulePath);
        } else if path.split(SEPARATOR).any(str::is_empty) {
            errors.push(ValidationError::EmptySegment(path.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
