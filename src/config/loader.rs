//! Configuration parsing from TOML text.
//!
//! Reading the text is left to the caller.

use crate::config::schema::ModularConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a TOML configuration.
pub fn parse_config(content: &str) -> Result<ModularConfig, ConfigError> {
    let config: ModularConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
