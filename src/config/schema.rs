//! Configuration schema definitions.
//!
//! All types derive Serde traits so a configuration can come from any
//! serde format; `loader.rs` handles TOML text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::emit::{Level, Sink};
use crate::tree::{RootLogger, DEFAULT_MODULE_FIELD};

/// Root configuration for a module namespace.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModularConfig {
    /// Threshold of the root module.
    pub level: Level,

    /// Field under which records carry their module name.
    pub module_field: String,

    /// Module path -> threshold. Applied in path order, so a parent entry
    /// never overrides a more specific one.
    pub modules: BTreeMap<String, Level>,
}

impl Default for ModularConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            module_field: DEFAULT_MODULE_FIELD.to_string(),
            modules: BTreeMap::new(),
        }
    }
}

impl ModularConfig {
    /// Apply this configuration to an existing namespace.
    ///
    /// Resets the root threshold (and so every existing module), then
    /// creates or updates each configured module.
    pub fn apply(&self, root: &RootLogger) {
        root.set_threshold(self.level);
        root.set_module_field(self.module_field.as_str());

        for (path, level) in &self.modules {
            let module = root.get_or_create(path, *level);
            module.set_threshold(*level);
        }

        tracing::debug!(
            level = %self.level,
            module_field = %self.module_field,
            modules = self.modules.len(),
            "Configuration applied"
        );
    }
}

impl RootLogger {
    /// Build a namespace writing to `sink` and configured by `config`.
    pub fn from_config<S: Sink + 'static>(sink: S, config: &ModularConfig) -> Self {
        let root = RootLogger::new(sink, config.level);
        config.apply(&root);
        root
    }
}
