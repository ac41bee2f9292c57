//! Front-end support for pitchplan.
//!
//! Everything the planning engine deliberately leaves to its host:
//! configuration, prompt history, and exporting rendered plans.

mod config;
mod export;
mod history;

pub use config::{Config, GeneralConfig, OutputConfig, CONFIG_ENV, LOCAL_CONFIG_FILE};
pub use export::{
    render, write_export, ExportFormat, DEFAULT_JSON_FILE, DEFAULT_MARKDOWN_FILE,
};
pub use history::{HistoryEntry, PromptHistory, DEFAULT_MAX_ENTRIES, HISTORY_FILE};
