//! Keyword classification and audience inference.

use serde::Serialize;

use super::rules::{CategoryRule, CATEGORY_RULES, GENERAL_PRODUCT};
use super::tokenize::TokenSet;

/// Audience used when no audience group matches.
pub const DEFAULT_AUDIENCE: &str = "Builders and operators who need structured execution";

/// Audience groups in priority order; the first group with a present token wins.
const AUDIENCE_GROUPS: [(&[&str], &str); 3] = [
    (&["founder", "startup", "entrepreneur"], "Founders validating and shipping quickly"),
    (&["developer", "engineer", "builder"], "Developers who want faster implementation cycles"),
    (&["trader", "investor", "defi"], "On-chain users making time-sensitive decisions"),
];

/// How strongly a prompt matched one scored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    /// Category name
    pub name: &'static str,
    /// Number of distinct keywords present
    pub score: usize,
    /// The keywords that matched, in rule order
    pub matched: Vec<&'static str>,
}

/// Classify a sentence into a category.
pub fn classify(sentence: &str) -> &'static CategoryRule {
    classify_tokens(&TokenSet::from_sentence(sentence))
}

/// Classify an already tokenized sentence.
///
/// Scans the rules once, replacing the current best only on a strictly
/// higher score, so ties go to the earlier rule. Falls back to
/// `general-product` when no keyword matched at all.
pub fn classify_tokens(tokens: &TokenSet) -> &'static CategoryRule {
    let mut best = &CATEGORY_RULES[0];
    // None plays the role of a -1 starting score.
    let mut best_score: Option<usize> = None;

    for rule in &CATEGORY_RULES {
        let score = tokens.matching(rule.keywords).len();
        if best_score.map_or(true, |current| score > current) {
            best = rule;
            best_score = Some(score);
        }
    }

    let score = best_score.unwrap_or(0);
    if score == 0 {
        tracing::debug!(category = GENERAL_PRODUCT.name, "No category keywords matched");
        return &GENERAL_PRODUCT;
    }

    tracing::debug!(category = best.name, score, "Classified prompt");
    best
}

/// Per-rule scores for a sentence, in tie-break order.
pub fn score_categories(sentence: &str) -> Vec<CategoryScore> {
    let tokens = TokenSet::from_sentence(sentence);
    CATEGORY_RULES
        .iter()
        .map(|rule| {
            let matched = tokens.matching(rule.keywords);
            CategoryScore { name: rule.name, score: matched.len(), matched }
        })
        .collect()
}

/// Infer who the product is for.
pub fn infer_audience(sentence: &str) -> &'static str {
    infer_audience_tokens(&TokenSet::from_sentence(sentence))
}

/// Infer the audience from an already tokenized sentence.
pub fn infer_audience_tokens(tokens: &TokenSet) -> &'static str {
    AUDIENCE_GROUPS
        .iter()
        .find(|(triggers, _)| tokens.contains_any(triggers))
        .map(|(_, audience)| *audience)
        .unwrap_or(DEFAULT_AUDIENCE)
}
