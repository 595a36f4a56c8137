//! Structured records handed to sinks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::emit::Level;

/// Structured fields attached to a record, keyed by field name.
pub type Fields = BTreeMap<String, Value>;

/// Field name used by `Logger::with_error`.
pub const ERROR_KEY: &str = "error";

/// A single log record that passed its module's threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub fields: Fields,
}

impl Record {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
