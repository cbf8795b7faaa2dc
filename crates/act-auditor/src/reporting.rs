//! Markdown assessment reports.
//!
//! The generator re-runs classification rather than accepting a caller-passed
//! verdict, so a rendered report can never disagree with what `/assess` would
//! return for the same input.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::articles;
use crate::checklist;
use crate::classification::{ClassificationEngine, SystemProfile, Verdict};

pub struct ReportGenerator {
    engine: Arc<ClassificationEngine>,
}

impl ReportGenerator {
    pub fn new(engine: Arc<ClassificationEngine>) -> Self {
        Self { engine }
    }

    /// Classify `profile` and render the verdict as a Markdown document.
    pub fn markdown(&self, profile: &SystemProfile) -> String {
        let verdict = self.engine.classify(profile);
        render(profile, &verdict, Utc::now())
    }
}

fn render(profile: &SystemProfile, verdict: &Verdict, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let push_line = |out: &mut String, line: &str| {
        out.push_str(line);
        out.push('\n');
    };

    push_line(&mut out, "# AI Act Risk Assessment Report");
    push_line(&mut out, "");
    push_line(
        &mut out,
        &format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
    );
    push_line(&mut out, "");

    push_line(&mut out, "## System");
    push_line(&mut out, "");
    push_line(&mut out, &format!("- **Name**: {}", profile.name));
    push_line(&mut out, &format!("- **Description**: {}", profile.description));
    push_line(
        &mut out,
        &format!("- **Intended purpose**: {}", profile.intended_purpose),
    );
    if let Some(domain) = &profile.domain {
        push_line(&mut out, &format!("- **Domain**: {domain}"));
    }
    push_line(&mut out, "");

    push_line(&mut out, "## Verdict");
    push_line(&mut out, "");
    push_line(
        &mut out,
        &format!(
            "- **Risk tier**: {} (confidence {:.2})",
            verdict.tier_label, verdict.confidence
        ),
    );
    push_line(&mut out, "");
    for line in &verdict.justification {
        push_line(&mut out, &format!("> {line}"));
    }
    push_line(&mut out, "");

    if !verdict.matched_rules.is_empty() {
        push_line(&mut out, "## Matched rules");
        push_line(&mut out, "");
        push_line(&mut out, "| Rule | Category | Reason | Reference |");
        push_line(&mut out, "| --- | --- | --- | --- |");
        for rule in &verdict.matched_rules {
            push_line(
                &mut out,
                &format!(
                    "| {} | {} | {} | {} |",
                    rule.rule_id, rule.category, rule.reason, rule.reference
                ),
            );
        }
        push_line(&mut out, "");
    }

    push_line(&mut out, "## Obligations");
    push_line(&mut out, "");
    for obligation in &verdict.obligations {
        push_line(&mut out, &format!("- {obligation}"));
    }
    push_line(&mut out, "");

    push_line(&mut out, "## Next steps");
    push_line(&mut out, "");
    for step in &verdict.next_steps {
        push_line(&mut out, &format!("- {step}"));
    }
    push_line(&mut out, "");

    push_line(&mut out, "## Compliance checklist");
    push_line(&mut out, "");
    for item in checklist::checklist_for(verdict.tier) {
        push_line(
            &mut out,
            &format!("- [ ] **{}** ({}): {}", item.title, item.article, item.description),
        );
    }
    push_line(&mut out, "");

    let relevant = articles::relevant(verdict.tier);
    if !relevant.is_empty() {
        push_line(&mut out, "## Relevant articles");
        push_line(&mut out, "");
        for article in relevant {
            push_line(
                &mut out,
                &format!(
                    "- **Article {}, {}**: {}",
                    article.number, article.title, article.summary
                ),
            );
        }
        push_line(&mut out, "");
    }

    out
}
