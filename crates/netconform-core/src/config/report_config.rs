//! Report output configuration.

use serde::{Deserialize, Serialize};

/// Configuration for rendering outlier reports.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format name (`text` or `json`). Default: `text`.
    pub format: Option<String>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }
}
