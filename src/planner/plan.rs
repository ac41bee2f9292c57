//! Pitch plan data structures and the plan generator.

use serde::{Deserialize, Serialize};

use super::assembly::{build_execution_plan, build_features_tokens, build_mvp_scope};
use super::classify::{classify_tokens, infer_audience_tokens};
use super::error::{PlanError, PlanResult};
use super::tokenize::TokenSet;

/// Deliverable type shared by every plan.
pub const DELIVERABLE_TYPE: &str = "working web prototype";

/// Prompt offered when the user has nothing in mind yet.
pub const SAMPLE_PROMPT: &str = "Build a lightweight NEAR launch co-pilot that turns one product idea into MVP scope, execution plan, and risk checklist.";

/// A generated plan for a one-sentence product idea.
///
/// Field order matches the exported JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchPlan {
    /// The trimmed prompt
    pub original_prompt: String,
    /// Reading of the idea, from the matched category
    pub interpretation: String,
    /// Who the product is for
    pub target_audience: String,
    /// Always [`DELIVERABLE_TYPE`]
    pub deliverable_type: String,
    /// Suggested stack
    pub tech_stack: Vec<String>,
    /// Between one and six features
    pub features_implemented: Vec<String>,
    /// MVP in/out boundary
    pub mvp_scope: MvpScope,
    /// Category risks
    pub risks: Vec<String>,
    /// Four timed checkpoints
    pub execution_plan: Vec<Checkpoint>,
    /// e.g. "34 minutes"
    pub time_to_first_working_version: String,
}

/// Features the MVP covers and what it deliberately leaves out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvpScope {
    pub in_scope: Vec<String>,
    pub out_of_scope: Vec<String>,
}

/// A named milestone at a target minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub name: String,
    pub minute: u32,
}

impl Checkpoint {
    /// Create a new checkpoint.
    pub fn new(name: impl Into<String>, minute: u32) -> Self {
        Self { name: name.into(), minute }
    }
}

/// Time estimate plus the checkpoints leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestones {
    pub time_to_first_working_version: String,
    pub checkpoints: Vec<Checkpoint>,
}

/// Generate a pitch plan from a one-sentence idea.
///
/// Returns [`PlanError::InvalidInput`] when the prompt is empty after
/// trimming. The same prompt always produces the same plan.
pub fn generate_pitch_plan(prompt: &str) -> PlanResult<PitchPlan> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(PlanError::InvalidInput);
    }

    let tokens = TokenSet::from_sentence(prompt);
    let category = classify_tokens(&tokens);
    let audience = infer_audience_tokens(&tokens);
    let features = build_features_tokens(&tokens, category);
    let milestones = build_execution_plan(features.len());

    tracing::debug!(
        category = category.name,
        features = features.len(),
        estimate = %milestones.time_to_first_working_version,
        "Generated pitch plan"
    );

    Ok(PitchPlan {
        original_prompt: prompt.to_string(),
        interpretation: category.interpretation.to_string(),
        target_audience: audience.to_string(),
        deliverable_type: DELIVERABLE_TYPE.to_string(),
        tech_stack: to_strings(category.stack),
        mvp_scope: build_mvp_scope(&features),
        features_implemented: features,
        risks: to_strings(category.risks),
        execution_plan: milestones.checkpoints,
        time_to_first_working_version: milestones.time_to_first_working_version,
    })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str =
        "Build a NEAR analytics dashboard for founders to track weekly growth and risks.";

    #[test]
    fn test_empty_prompt_rejected() {
        assert_eq!(generate_pitch_plan(""), Err(PlanError::InvalidInput));
        assert_eq!(generate_pitch_plan("   "), Err(PlanError::InvalidInput));
        assert_eq!(generate_pitch_plan("\n\t "), Err(PlanError::InvalidInput));
    }

    #[test]
    fn test_example_prompt() {
        let plan = generate_pitch_plan(EXAMPLE).unwrap();

        assert_eq!(plan.original_prompt, EXAMPLE);
        assert!(plan.interpretation.starts_with("An analytics surface"));
        assert_eq!(plan.target_audience, "Builders and operators who need structured execution");
        assert_eq!(plan.deliverable_type, "working web prototype");
        assert_eq!(plan.tech_stack.last().map(String::as_str), Some("Chart.js (optional)"));
        assert_eq!(plan.features_implemented.len(), 5);
        assert!(plan.features_implemented.iter().any(|f| f.contains("NEAR-specific")));
        assert_eq!(plan.time_to_first_working_version, "38 minutes");
        assert_eq!(plan.execution_plan.len(), 4);
        assert_eq!(plan.execution_plan[3].minute, 38);
    }

    #[test]
    fn test_prompt_is_trimmed() {
        let plan = generate_pitch_plan("  Create a developer tool for shipping faster.  ").unwrap();
        assert_eq!(plan.original_prompt, "Create a developer tool for shipping faster.");
        assert_eq!(plan.target_audience, "Developers who want faster implementation cycles");
        assert!(plan.interpretation.starts_with("A developer utility"));
    }

    #[test]
    fn test_symbol_only_prompt_uses_fallback() {
        let plan = generate_pitch_plan("???").unwrap();
        assert!(plan.interpretation.contains("practical productized workflow"));
        assert_eq!(plan.features_implemented.len(), 4);
        assert_eq!(plan.time_to_first_working_version, "34 minutes");
    }

    #[test]
    fn test_in_scope_is_prefix() {
        let plan = generate_pitch_plan("security alert bot for telegram with api feed on near")
            .unwrap();
        assert_eq!(plan.features_implemented.len(), 6);
        assert_eq!(plan.mvp_scope.in_scope.len(), 4);
        assert_eq!(&plan.features_implemented[..4], plan.mvp_scope.in_scope.as_slice());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_pitch_plan(EXAMPLE), generate_pitch_plan(EXAMPLE));
    }

    #[test]
    fn test_json_field_order() {
        let plan = generate_pitch_plan("Make something great").unwrap();
        let json = serde_json::to_string(&plan).unwrap();

        let fields = [
            "\"original_prompt\"",
            "\"interpretation\"",
            "\"target_audience\"",
            "\"deliverable_type\"",
            "\"tech_stack\"",
            "\"features_implemented\"",
            "\"mvp_scope\"",
            "\"risks\"",
            "\"execution_plan\"",
            "\"time_to_first_working_version\"",
        ];
        let positions: Vec<_> = fields.iter().map(|f| json.find(f).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("{\"name\":\"Skeleton UI + routing\",\"minute\":8}"));
    }

    #[test]
    fn test_json_roundtrip() {
        let plan = generate_pitch_plan(SAMPLE_PROMPT).unwrap();
        let json = serde_json::to_string_pretty(&plan).unwrap();
        let parsed: PitchPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }
}
