use std::sync::Arc;

use act_auditor::articles;
use act_auditor::checklist;
use act_auditor::classification::{
    ClassificationEngine, RiskTier, RuleCatalog, SystemProfile,
};
use act_auditor::reporting::ReportGenerator;

fn engine() -> Arc<ClassificationEngine> {
    let catalog = Arc::new(RuleCatalog::builtin());
    Arc::new(ClassificationEngine::new(catalog).expect("builtin locales validate"))
}

#[test]
fn end_to_end_tiers_match_the_regulation_cascade() {
    let engine = engine();

    let scenarios = [
        (
            SystemProfile::from_text(
                "CivScore",
                "A social scoring platform for municipalities",
                "Rank citizens by behavior",
            ),
            RiskTier::Prohibited,
        ),
        (
            SystemProfile::from_text(
                "Screening Bot",
                "Automated recruitment system screening resumes",
                "Rank candidates",
            ),
            RiskTier::High,
        ),
        (
            SystemProfile::from_text(
                "Helpdesk Bot",
                "A customer support chatbot",
                "Answer product questions",
            ),
            RiskTier::Limited,
        ),
        (
            SystemProfile::from_text("Spam Filter", "email spam filter", "block unwanted mail"),
            RiskTier::Minimal,
        ),
    ];

    for (profile, expected) in scenarios {
        let verdict = engine.classify(&profile);
        assert_eq!(verdict.tier, expected, "profile {}", profile.name);
        assert!(!verdict.justification.is_empty());
        assert!(!verdict.obligations.is_empty());
        assert!(!verdict.next_steps.is_empty());
    }
}

#[test]
fn confidence_is_monotone_with_evidence_strength() {
    let engine = engine();

    let keyword_only = engine.classify(&SystemProfile::from_text(
        "Hiring Assistant",
        "Handles recruitment campaigns",
        "Shortlist applicants",
    ));

    let mut flagged = SystemProfile::from_text(
        "Hiring Assistant",
        "Handles recruitment campaigns",
        "Shortlist applicants",
    );
    flagged.affects_rights = true;
    let keyword_and_flag = engine.classify(&flagged);

    assert_eq!(keyword_only.tier, RiskTier::High);
    assert_eq!(keyword_and_flag.tier, RiskTier::High);
    assert!(keyword_and_flag.confidence > keyword_only.confidence);
}

#[test]
fn classification_is_deterministic_across_repeated_runs() {
    let engine = engine();
    let profile = SystemProfile::from_text(
        "Gatekeeper",
        "Performs recruitment screening and credit scoring of applicants",
        "Decide employment outcomes",
    );

    let first = engine.classify(&profile);
    for _ in 0..5 {
        assert_eq!(engine.classify(&profile), first);
    }
}

#[test]
fn reports_checklists_and_articles_agree_on_the_tier() {
    let engine = engine();
    let profile = SystemProfile::from_text(
        "Screening Bot",
        "Automated recruitment system screening resumes",
        "Rank candidates",
    );

    let verdict = engine.classify(&profile);
    assert_eq!(verdict.tier, RiskTier::High);

    let report = ReportGenerator::new(engine).markdown(&profile);
    for item in checklist::checklist_for(verdict.tier) {
        assert!(report.contains(item.title), "missing checklist item: {}", item.title);
    }
    for article in articles::relevant(verdict.tier) {
        assert!(
            report.contains(article.title),
            "missing article excerpt: {}",
            article.title
        );
    }
}

#[test]
fn wire_format_round_trips_through_json() {
    let engine = engine();
    let raw = r#"{
        "name": "Triage AI",
        "description": "Provides medical diagnosis suggestions to clinicians",
        "intended_purpose": "Support emergency triage",
        "health_domain": true,
        "influences_diagnosis": true,
        "language": "en"
    }"#;

    let profile: SystemProfile = serde_json::from_str(raw).expect("profile deserializes");
    let verdict = engine.classify(&profile);

    let json = serde_json::to_value(&verdict).expect("verdict serializes");
    assert_eq!(
        json.get("risk_level").and_then(serde_json::Value::as_str),
        Some("High Risk")
    );
    assert!(json.get("risk_score").and_then(serde_json::Value::as_f64).is_some());
    assert!(json
        .get("matched_rules")
        .and_then(serde_json::Value::as_array)
        .map(|rules| !rules.is_empty())
        .unwrap_or(false));
}
