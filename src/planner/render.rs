//! Text renderings of a pitch plan.

use super::plan::{Checkpoint, PitchPlan};

/// Render a plan as Markdown.
///
/// Sections appear in a fixed order and the output has no trailing newline.
pub fn to_markdown(plan: &PitchPlan) -> String {
    let mut lines = vec![
        format!("# {}", plan.original_prompt),
        String::new(),
        format!("**Interpretation:** {}", plan.interpretation),
        format!("**Target audience:** {}", plan.target_audience),
        format!("**Tech stack:** {}", plan.tech_stack.join(", ")),
        format!("**Time to first working version:** {}", plan.time_to_first_working_version),
    ];

    let steps: Vec<String> = plan.execution_plan.iter().map(format_checkpoint).collect();
    let sections = [
        ("Features Implemented", plan.features_implemented.as_slice()),
        ("MVP Scope (In)", plan.mvp_scope.in_scope.as_slice()),
        ("MVP Scope (Out)", plan.mvp_scope.out_of_scope.as_slice()),
        ("Risks", plan.risks.as_slice()),
        ("Execution Plan", steps.as_slice()),
    ];

    for (heading, items) in sections {
        lines.push(String::new());
        lines.push(format!("## {heading}"));
        lines.extend(items.iter().map(|item| format!("- {item}")));
    }

    lines.join("\n")
}

/// Render a plan as a plain-text summary for the terminal.
pub fn to_summary(plan: &PitchPlan) -> String {
    let mut out = String::new();

    for (label, value) in [
        ("Original Prompt", plan.original_prompt.clone()),
        ("Interpretation", plan.interpretation.clone()),
        ("Target Audience", plan.target_audience.clone()),
        ("Tech Stack", plan.tech_stack.join(", ")),
        ("Time", plan.time_to_first_working_version.clone()),
    ] {
        out.push_str(&format!("{label}: {value}\n"));
    }

    let steps: Vec<String> = plan.execution_plan.iter().map(format_checkpoint).collect();
    for (heading, items) in [
        ("Features Implemented", plan.features_implemented.as_slice()),
        ("MVP Scope (In)", plan.mvp_scope.in_scope.as_slice()),
        ("MVP Scope (Out)", plan.mvp_scope.out_of_scope.as_slice()),
        ("Execution Plan", steps.as_slice()),
        ("Risks", plan.risks.as_slice()),
    ] {
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        for item in items {
            out.push_str(&format!("  * {item}\n"));
        }
    }

    out
}

fn format_checkpoint(step: &Checkpoint) -> String {
    format!("{}m: {}", step.minute, step.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::generate_pitch_plan;

    #[test]
    fn test_markdown_exact_output() {
        let plan = generate_pitch_plan("Create a developer tool for shipping faster.").unwrap();
        let expected = "\
# Create a developer tool for shipping faster.

**Interpretation:** A developer utility that accelerates delivery by automating repetitive setup, validation, and output formatting.
**Target audience:** Developers who want faster implementation cycles
**Tech stack:** HTML, CSS, Vanilla JavaScript, Node.js (optional CLI layer)
**Time to first working version:** 34 minutes

## Features Implemented
- Input validator and auto-fixes
- Command preview with copy buttons
- Template output generator
- Run summary with next steps

## MVP Scope (In)
- Input validator and auto-fixes
- Command preview with copy buttons
- Template output generator
- Run summary with next steps

## MVP Scope (Out)
- Authentication and user accounts
- Backend database
- Paid third-party APIs
- Complex role permissions

## Risks
- Over-automation can hide important edge cases.
- Command output can break across OS environments.

## Execution Plan
- 8m: Skeleton UI + routing
- 16m: Core generation engine
- 24m: Export + persistence
- 34m: Polish + QA";

        assert_eq!(to_markdown(&plan), expected);
    }

    #[test]
    fn test_markdown_section_order() {
        let plan = generate_pitch_plan("Make something great").unwrap();
        let md = to_markdown(&plan);

        let headings = [
            "## Features Implemented",
            "## MVP Scope (In)",
            "## MVP Scope (Out)",
            "## Risks",
            "## Execution Plan",
        ];
        let positions: Vec<_> = headings.iter().map(|h| md.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(md.starts_with("# Make something great\n"));
        assert!(!md.ends_with('\n'));
    }

    #[test]
    fn test_summary_contains_meta_and_sections() {
        let plan = generate_pitch_plan("Telegram bot for DeFi traders").unwrap();
        let summary = to_summary(&plan);

        assert!(summary.starts_with("Original Prompt: Telegram bot for DeFi traders\n"));
        assert!(summary.contains("Target Audience: On-chain users making time-sensitive decisions"));
        assert!(summary.contains("  * Mobile-first output formatting\n"));
        assert!(summary.contains("  * 38m: Polish + QA\n"));
        let plan_at = summary.find("Execution Plan").unwrap();
        let risks_at = summary.find("\nRisks\n").unwrap();
        assert!(plan_at < risks_at);
    }
}
