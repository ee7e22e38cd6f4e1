use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::labels::{self, LabelTable};
use crate::operation::DatabaseError;

/// Configuration for the error classification tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extra labels merged on top of the built-in label table
    #[serde(default)]
    pub labels: BTreeMap<String, Vec<i32>>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            labels: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DatabaseError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            DatabaseError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(
            "Loaded configuration from {} with {} extra labels",
            path.display(),
            config.labels.len()
        );

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DatabaseError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DatabaseError::Configuration(format!("Failed to encode configuration: {}", e)))?;
        std::fs::write(path, contents).map_err(|e| {
            DatabaseError::Configuration(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Built-in labels plus the configured ones.
    ///
    /// Configured labels may only add new names; built-in labels keep their
    /// fixed codes.
    pub fn label_table(&self) -> Result<LabelTable, DatabaseError> {
        let mut table = LabelTable::builtin();

        for (label, codes) in &self.labels {
            if labels::is_builtin_label(label) {
                warn!("Rejecting configured codes {:?} for built-in label {}", codes, label);
                return Err(DatabaseError::Configuration(format!(
                    "Label {} is built in and cannot be configured",
                    label
                )));
            }
            table = table.with_label(label.as_str(), codes.iter().copied());
        }

        Ok(table)
    }
}
