//! Feature list, milestone, and MVP scope assembly.

use super::plan::{Checkpoint, Milestones, MvpScope};
use super::rules::CategoryRule;
use super::tokenize::TokenSet;

/// Maximum number of features in a plan.
pub const MAX_FEATURES: usize = 6;

/// Maximum number of features listed as in scope for the MVP.
pub const MAX_IN_SCOPE: usize = 4;

/// Base minutes before per-feature time is added.
const BASE_MINUTES: u32 = 18;

/// Minutes added per feature.
const MINUTES_PER_FEATURE: u32 = 4;

/// Bounds for the total estimate.
const MIN_TOTAL_MINUTES: u32 = 24;
const MAX_TOTAL_MINUTES: u32 = 46;

/// Conditional features, appended in this order when a trigger token is present.
const BONUS_FEATURES: [(&[&str], &str); 3] = [
    (&["near", "nearai", "nearcon"], "NEAR-specific examples and terminology mapping"),
    (&["api", "feed"], "External API health state indicator"),
    (&["mobile", "telegram"], "Mobile-first output formatting"),
];

/// Things every MVP explicitly leaves out.
pub const OUT_OF_SCOPE: [&str; 4] = [
    "Authentication and user accounts",
    "Backend database",
    "Paid third-party APIs",
    "Complex role permissions",
];

/// Build the feature list for a sentence in a given category.
pub fn build_features(sentence: &str, category: &CategoryRule) -> Vec<String> {
    build_features_tokens(&TokenSet::from_sentence(sentence), category)
}

/// Build the feature list from an already tokenized sentence.
///
/// Base features come first, so bonus features are the ones dropped when
/// the list exceeds [`MAX_FEATURES`].
pub fn build_features_tokens(tokens: &TokenSet, category: &CategoryRule) -> Vec<String> {
    let mut features: Vec<String> =
        category.base_features.iter().map(|feature| (*feature).to_string()).collect();

    for (triggers, feature) in &BONUS_FEATURES {
        if tokens.contains_any(triggers) {
            features.push((*feature).to_string());
        }
    }

    features.truncate(MAX_FEATURES);
    features
}

/// Estimated total minutes for a plan with `feature_count` features.
pub fn total_minutes(feature_count: usize) -> u32 {
    let count = u32::try_from(feature_count).unwrap_or(u32::MAX);
    BASE_MINUTES
        .saturating_add(count.saturating_mul(MINUTES_PER_FEATURE))
        .clamp(MIN_TOTAL_MINUTES, MAX_TOTAL_MINUTES)
}

/// Build the four-checkpoint execution plan.
///
/// The third checkpoint is always at minute 24, even when the total is 24
/// and the last two checkpoints share a minute.
pub fn build_execution_plan(feature_count: usize) -> Milestones {
    let total = total_minutes(feature_count);

    Milestones {
        time_to_first_working_version: format!("{total} minutes"),
        checkpoints: vec![
            Checkpoint::new("Skeleton UI + routing", 8),
            Checkpoint::new("Core generation engine", 16),
            Checkpoint::new("Export + persistence", 24),
            Checkpoint::new("Polish + QA", total),
        ],
    }
}

/// Split features into the MVP in/out scope.
pub fn build_mvp_scope(features: &[String]) -> MvpScope {
    MvpScope {
        in_scope: features.iter().take(MAX_IN_SCOPE).cloned().collect(),
        out_of_scope: OUT_OF_SCOPE.iter().map(|item| (*item).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::rules::{CATEGORY_RULES, GENERAL_PRODUCT};

    fn analytics() -> &'static CategoryRule {
        &CATEGORY_RULES[1]
    }

    #[test]
    fn test_base_features_only() {
        let features = build_features("plain idea", analytics());
        assert_eq!(features, analytics().base_features.to_vec());
    }

    #[test]
    fn test_near_feature() {
        let features = build_features("for NEARCON attendees", &GENERAL_PRODUCT);
        assert_eq!(features.len(), 5);
        assert_eq!(features[4], "NEAR-specific examples and terminology mapping");
    }

    #[test]
    fn test_bonus_order_is_fixed() {
        let features = build_features("telegram feed", &GENERAL_PRODUCT);
        assert_eq!(
            &features[4..],
            &["External API health state indicator", "Mobile-first output formatting"]
        );
    }

    #[test]
    fn test_truncates_to_six() {
        let features = build_features("mobile api near", analytics());
        assert_eq!(features.len(), MAX_FEATURES);
        assert_eq!(features[4], "NEAR-specific examples and terminology mapping");
        assert_eq!(features[5], "External API health state indicator");
        assert!(!features.iter().any(|f| f == "Mobile-first output formatting"));
    }

    #[test]
    fn test_total_minutes_formula() {
        for count in 1..=6 {
            let expected = (18 + 4 * count as u32).clamp(24, 46);
            assert_eq!(total_minutes(count), expected);
        }
        assert_eq!(total_minutes(0), 24);
        assert_eq!(total_minutes(4), 34);
        assert_eq!(total_minutes(7), 46);
        assert_eq!(total_minutes(usize::MAX), 46);
    }

    #[test]
    fn test_execution_plan_shape() {
        let plan = build_execution_plan(5);
        assert_eq!(plan.time_to_first_working_version, "38 minutes");
        let minutes: Vec<_> = plan.checkpoints.iter().map(|c| c.minute).collect();
        assert_eq!(minutes, vec![8, 16, 24, 38]);
        assert_eq!(plan.checkpoints[0].name, "Skeleton UI + routing");
        assert_eq!(plan.checkpoints[3].name, "Polish + QA");
    }

    #[test]
    fn test_execution_plan_third_checkpoint_is_fixed() {
        let plan = build_execution_plan(1);
        let minutes: Vec<_> = plan.checkpoints.iter().map(|c| c.minute).collect();
        assert_eq!(minutes, vec![8, 16, 24, 24]);
        assert_eq!(plan.time_to_first_working_version, "24 minutes");
    }

    #[test]
    fn test_mvp_scope() {
        let features: Vec<String> = (1..=6).map(|i| format!("f{i}")).collect();
        let scope = build_mvp_scope(&features);
        assert_eq!(scope.in_scope, vec!["f1", "f2", "f3", "f4"]);
        assert_eq!(scope.out_of_scope.len(), 4);
        assert_eq!(scope.out_of_scope[1], "Backend database");

        let short = build_mvp_scope(&features[..2]);
        assert_eq!(short.in_scope, vec!["f1", "f2"]);
    }
}
