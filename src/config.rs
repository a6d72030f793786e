use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings file looked up in the working directory
pub const CONFIG_FILE: &str = "table-entry.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTML page holding the code table
    pub document_path: PathBuf,
    /// `id` attribute of the table rows are appended to
    pub table_id: String,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from("test3.html"),
            table_id: "codeTable".to_string(),
            window_title: "Add Entry to HTML".to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from `path`, or the defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        Ok(config)
    }
}
