//! Plan export.
//!
//! Serializes a [`PitchPlan`] as Markdown, JSON, or a plain-text summary and
//! writes the result to disk.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::planner::{to_markdown, to_summary, PitchPlan};

/// Default file name for JSON exports.
pub const DEFAULT_JSON_FILE: &str = "pitch_plan.json";

/// Default file name for Markdown exports.
pub const DEFAULT_MARKDOWN_FILE: &str = "pitch_plan.md";

/// Output format for a rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Markdown report
    #[default]
    Markdown,
    /// Full plan as JSON
    Json,
    /// Plain-text summary
    Text,
}

impl ExportFormat {
    /// Parse a format name. Accepts a few common aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "text" | "txt" | "summary" => Some(Self::Text),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Text => "text",
        }
    }

    /// Default file name for this format.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Markdown => DEFAULT_MARKDOWN_FILE,
            Self::Json => DEFAULT_JSON_FILE,
            Self::Text => "pitch_plan.txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a plan in the given format.
pub fn render(plan: &PitchPlan, format: ExportFormat, pretty_json: bool) -> anyhow::Result<String> {
    let rendered = match format {
        ExportFormat::Markdown => to_markdown(plan),
        ExportFormat::Text => to_summary(plan),
        ExportFormat::Json if pretty_json => serde_json::to_string_pretty(plan)?,
        ExportFormat::Json => serde_json::to_string(plan)?,
    };
    Ok(rendered)
}

/// Write rendered output to a file, creating parent directories.
pub fn write_export(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote export");
    Ok(())
}
