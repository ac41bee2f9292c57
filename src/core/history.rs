//! Prompt history management.
//!
//! Keeps a short, recency-ordered list of prompts that have been turned into
//! plans. Re-submitting a prompt moves it to the front instead of adding a
//! duplicate.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Default number of prompts to keep.
pub const DEFAULT_MAX_ENTRIES: usize = 8;

/// History file name inside the data directory.
pub const HISTORY_FILE: &str = "history.json";

/// Prompts longer than this are shortened for display.
const DISPLAY_LIMIT: usize = 120;

/// Prompt history manager.
#[derive(Debug)]
pub struct PromptHistory {
    /// Path to the history file
    history_path: PathBuf,
    /// Entries, newest first
    entries: Vec<HistoryEntry>,
    /// Maximum number of entries to keep
    max_entries: usize,
}

/// A single remembered prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The prompt as submitted
    pub prompt: String,
    /// When the prompt was last submitted
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::at(prompt, Utc::now())
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(prompt: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self { prompt: prompt.into(), created_at }
    }

    /// Prompt shortened to at most 120 characters for display.
    pub fn short_prompt(&self) -> String {
        if self.prompt.chars().count() > DISPLAY_LIMIT {
            let head: String = self.prompt.chars().take(DISPLAY_LIMIT - 3).collect();
            format!("{head}...")
        } else {
            self.prompt.clone()
        }
    }

    /// Creation time in the local timezone.
    pub fn created_display(&self) -> String {
        self.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    }
}

impl PromptHistory {
    /// Create a history manager stored in `data_dir`.
    pub fn in_dir(data_dir: &Path, max_entries: usize) -> Self {
        Self::with_path(data_dir.join(HISTORY_FILE), max_entries)
    }

    /// Create a history manager with a custom file path.
    ///
    /// A missing or unreadable file yields an empty history.
    pub fn with_path(path: PathBuf, max_entries: usize) -> Self {
        let mut entries = Self::load_history(&path);
        entries.truncate(max_entries);

        Self { history_path: path, entries, max_entries }
    }

    /// Load history from file, treating anything unparsable as empty.
    fn load_history(path: &Path) -> Vec<HistoryEntry> {
        if !path.exists() {
            return Vec::new();
        }

        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| {
                serde_json::from_str::<Vec<HistoryEntry>>(&content).map_err(Into::into)
            });

        match parsed {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable history");
                Vec::new()
            }
        }
    }

    /// Save history to file.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;

        // Ensure parent directory exists
        if let Some(parent) = self.history_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.history_path, content)?;
        Ok(())
    }

    /// Record a prompt submitted now.
    pub fn record(&mut self, prompt: &str) {
        self.record_entry(HistoryEntry::new(prompt));
    }

    /// Record an entry: drop any older entry with the same prompt, put the
    /// new one first, and trim to the size limit.
    pub fn record_entry(&mut self, entry: HistoryEntry) {
        self.entries.retain(|existing| existing.prompt != entry.prompt);
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
        tracing::debug!(entries = self.entries.len(), "Recorded prompt in history");
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if history has any entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.history_path
    }
}
