use super::common::*;
use crate::classification::RiskTier;

#[test]
fn foundation_models_are_high_risk_with_provider_obligations() {
    let profile = text_profile(
        "Atlas",
        "A foundation model served through an API",
        "General text generation for downstream products",
    );

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.70);
    assert_eq!(verdict.matched_rules.len(), 1);
    assert_eq!(verdict.matched_rules[0].rule_id, "GPAI_STANDARD");
    assert_eq!(verdict.matched_rules[0].reference, "Article 52");
    assert!(verdict
        .justification
        .iter()
        .any(|line| line.contains("Article 52")));
}

#[test]
fn compute_markers_flag_systemic_risk() {
    let profile = text_profile(
        "Atlas XL",
        "A foundation model trained with more than 10^25 FLOPs",
        "General text generation",
    );

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.matched_rules[0].rule_id, "GPAI_SYSTEMIC");
    assert_eq!(verdict.matched_rules[0].reference, "Article 52, 55");
    assert!(verdict
        .justification
        .iter()
        .any(|line| line.contains("systemic risk")));
}

#[test]
fn systemic_keywords_work_without_compute_markers() {
    let profile = text_profile(
        "Atlas Frontier",
        "A large language model presenting systemic risk",
        "Broad multi-task capabilities",
    );

    let verdict = classify(&profile);

    assert_eq!(verdict.matched_rules[0].rule_id, "GPAI_SYSTEMIC");
}

#[test]
fn gpai_upgrades_a_limited_verdict_to_high() {
    let profile = text_profile(
        "Concierge",
        "A chatbot built on a large language model",
        "Conversational assistance",
    );

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    let ids: Vec<&str> = verdict
        .matched_rules
        .iter()
        .map(|rule| rule.rule_id.as_str())
        .collect();
    assert!(ids.contains(&"art50_chatbot"));
    assert!(ids.contains(&"GPAI_STANDARD"));
}

#[test]
fn prohibited_always_beats_gpai() {
    let profile = text_profile(
        "ScoreNet",
        "A foundation model used for social scoring",
        "Score citizens at national scale",
    );

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::Prohibited);
    assert_eq!(verdict.matched_rules.len(), 1);
    assert_eq!(verdict.matched_rules[0].rule_id, "art5_social_scoring");
}
