/// Configuration for checking sessions and reports
use crate::encoding::Encoding;
use crate::writer::SaveOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    /// List the already-translated entries too, not just the ones needing work
    #[serde(default)]
    pub show_translated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Encoding used when the translated file is written back
    #[serde(default)]
    pub encoding: Encoding,
    #[serde(default = "default_true")]
    pub atomic_save: bool,
    #[serde(default)]
    pub report: ReportOptions,
}

fn default_true() -> bool {
    true
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            atomic_save: true,
            report: ReportOptions::default(),
        }
    }
}

impl CheckerConfig {
    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            encoding: self.encoding,
            atomic: self.atomic_save,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_json(&content)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let content = self.to_json()?;

        fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON config: {}", e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e))
    }
}
