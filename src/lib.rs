//! # pitchplan
//!
//! Turn a one-sentence product idea into a structured pitch plan.
//!
//! pitchplan classifies an idea by keyword, then fills in an interpretation,
//! target audience, feature list, MVP scope, risks, and a timed execution
//! plan. Generation is deterministic: the same sentence always produces the
//! same plan.
//!
//! ## Features
//!
//! - **Rule-based planning**: four keyword categories plus a general fallback
//! - **Markdown and JSON export**: copy-ready reports or machine-readable plans
//! - **Prompt history**: the last few ideas, de-duplicated and replayable
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate a plan
//! pitchplan generate "Build a NEAR analytics dashboard for founders"
//!
//! # Or use the short name and export JSON
//! pitch generate -f json -o pitch_plan.json "Telegram alert bot for DeFi traders"
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::format_push_string)]
#![allow(clippy::unnecessary_map_or)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod core;
pub mod planner;

// Re-export commonly used types
pub use crate::core::{Config, ExportFormat, HistoryEntry, PromptHistory};
pub use crate::planner::{generate_pitch_plan, to_markdown, PitchPlan, PlanError, PlanResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "pitchplan";
