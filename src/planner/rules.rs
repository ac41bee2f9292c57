//! Category rule table.
//!
//! The four scored categories are checked in declaration order; earlier
//! entries win ties. The `general-product` rule is only used when nothing
//! else matched and never takes part in scoring.

/// A product archetype and the template content it contributes to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// Stable identifier (e.g. `analytics`)
    pub name: &'static str,
    /// Trigger tokens, matched exactly against the prompt's tokens
    pub keywords: &'static [&'static str],
    /// One-sentence reading of the idea
    pub interpretation: &'static str,
    /// Features always included; truncation keeps a prefix
    pub base_features: &'static [&'static str],
    /// Suggested technology stack
    pub stack: &'static [&'static str],
    /// Known risks for this kind of product
    pub risks: &'static [&'static str],
}

impl CategoryRule {
    /// Whether this is the fallback used when no keyword matched.
    pub fn is_fallback(&self) -> bool {
        self.name == GENERAL_PRODUCT.name
    }

    /// Look up a rule (including the fallback) by name.
    pub fn find(name: &str) -> Option<&'static Self> {
        all_categories().find(|rule| rule.name == name)
    }
}

/// Scored categories, in tie-break order.
pub static CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        name: "security",
        keywords: &["security", "phishing", "hack", "wallet", "risk", "fraud", "alert"],
        interpretation: "A security-focused product that continuously surfaces risks, explains impact, and gives immediate mitigation steps.",
        base_features: &[
            "Risk scanner with severity labels",
            "Action checklist with step-by-step fixes",
            "Historical incident timeline",
            "Copy-ready security report",
        ],
        stack: &["HTML", "CSS", "Vanilla JavaScript"],
        risks: &[
            "False positives may reduce trust if wording is too aggressive.",
            "Security guidance must stay precise and non-ambiguous.",
        ],
    },
    CategoryRule {
        name: "analytics",
        keywords: &["analytics", "dashboard", "metrics", "insights", "report", "monitor", "trend"],
        interpretation: "An analytics surface that converts raw activity into plain-language trends, outliers, and next actions.",
        base_features: &[
            "Live KPI panel",
            "Trend and anomaly summary",
            "Period-over-period comparison",
            "Export to JSON and Markdown",
        ],
        stack: &["HTML", "CSS", "Vanilla JavaScript", "Chart.js (optional)"],
        risks: &[
            "Metric definitions can drift if assumptions are undocumented.",
            "Visual clutter can hide the most important signals.",
        ],
    },
    CategoryRule {
        name: "content",
        keywords: &["content", "thread", "post", "tweet", "marketing", "creator", "campaign"],
        interpretation: "A content workflow tool that transforms one idea into structured drafts for multiple channels.",
        base_features: &[
            "Multi-format draft generator",
            "Tone presets (educational, bold, concise)",
            "Call-to-action suggestions",
            "Revision history in local storage",
        ],
        stack: &["HTML", "CSS", "Vanilla JavaScript"],
        risks: &[
            "Generated copy can become repetitive without variation rules.",
            "Tone may drift from brand voice if constraints are unclear.",
        ],
    },
    CategoryRule {
        name: "developer-tool",
        keywords: &["dev", "developer", "code", "sdk", "cli", "extension", "tool"],
        interpretation: "A developer utility that accelerates delivery by automating repetitive setup, validation, and output formatting.",
        base_features: &[
            "Input validator and auto-fixes",
            "Command preview with copy buttons",
            "Template output generator",
            "Run summary with next steps",
        ],
        stack: &["HTML", "CSS", "Vanilla JavaScript", "Node.js (optional CLI layer)"],
        risks: &[
            "Over-automation can hide important edge cases.",
            "Command output can break across OS environments.",
        ],
    },
];

/// Fallback for prompts that match no keyword.
pub static GENERAL_PRODUCT: CategoryRule = CategoryRule {
    name: "general-product",
    keywords: &[],
    interpretation: "A practical productized workflow that turns a broad idea into a testable MVP with clear user value.",
    base_features: &[
        "Clear value proposition summary",
        "MVP scope with strict non-goals",
        "Execution checklist",
        "Exportable delivery brief",
    ],
    stack: &["HTML", "CSS", "Vanilla JavaScript"],
    risks: &[
        "Scope can expand without clear non-goals.",
        "Ambiguous outcomes can block prioritization.",
    ],
};

/// Every category, scored rules first and the fallback last.
pub fn all_categories() -> impl Iterator<Item = &'static CategoryRule> {
    CATEGORY_RULES.iter().chain(std::iter::once(&GENERAL_PRODUCT))
}
