//! The planning engine.
//!
//! Turns a one-sentence product idea into a [`PitchPlan`] using a fixed
//! keyword rule table. Every function here is pure: no clock, no I/O, no
//! randomness, so the same prompt always yields the same plan.
//!
//! ```
//! use pitchplan::planner::{generate_pitch_plan, to_markdown};
//!
//! let plan = generate_pitch_plan("Build a NEAR dashboard").unwrap();
//! assert!(plan.features_implemented.iter().any(|f| f.contains("NEAR-specific")));
//! assert!(to_markdown(&plan).contains("## Execution Plan"));
//! ```

mod assembly;
mod classify;
mod error;
mod plan;
mod render;
mod rules;
mod tokenize;

pub use assembly::{
    build_execution_plan, build_features, build_mvp_scope, total_minutes, MAX_FEATURES,
    MAX_IN_SCOPE, OUT_OF_SCOPE,
};
pub use classify::{
    classify, infer_audience, score_categories, CategoryScore, DEFAULT_AUDIENCE,
};
pub use error::{PlanError, PlanResult};
pub use plan::{
    generate_pitch_plan, Checkpoint, Milestones, MvpScope, PitchPlan, DELIVERABLE_TYPE,
    SAMPLE_PROMPT,
};
pub use render::{to_markdown, to_summary};
pub use rules::{all_categories, CategoryRule, CATEGORY_RULES, GENERAL_PRODUCT};
pub use tokenize::{tokenize, TokenSet};
