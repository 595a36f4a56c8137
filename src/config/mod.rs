//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! TOML text (read by the caller)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ModularConfig (validated)
//!     → apply() / RootLogger::from_config()
//!         → root threshold, module field, per-module thresholds
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Applying is idempotent and may be repeated on a live namespace

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, ConfigError};
pub use schema::ModularConfig;
pub use validation::{validate_config, ValidationError};
