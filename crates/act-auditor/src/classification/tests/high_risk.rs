use super::common::*;
use crate::classification::RiskTier;

#[test]
fn recruitment_keywords_classify_as_high_risk() {
    let profile = text_profile(
        "Screening Bot",
        "Automated recruitment system screening resumes",
        "Rank candidates for interviews",
    );

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.tier_label, "High Risk");
    assert_eq!(verdict.confidence, 0.70);
    assert_eq!(verdict.matched_rules.len(), 1);
    assert_eq!(verdict.matched_rules[0].rule_id, "annex3_employment");
    assert_eq!(verdict.matched_rules[0].category, "Employment");
    assert!(verdict
        .justification
        .iter()
        .any(|line| line.contains("Annex III, 4")));
}

#[test]
fn a_single_declared_flag_scores_higher_than_a_single_keyword() {
    let mut profile = neutral_profile();
    profile.is_biometric = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.75);
    assert_eq!(verdict.matched_rules.len(), 1);
    assert_eq!(verdict.matched_rules[0].rule_id, "MANUAL_BIO");
    assert_eq!(verdict.matched_rules[0].reference, "Annex III, 1");
}

#[test]
fn two_declared_flags_score_080() {
    let mut profile = neutral_profile();
    profile.is_critical_infrastructure = true;
    profile.is_safety_component = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.80);
    let ids: Vec<&str> = verdict
        .matched_rules
        .iter()
        .map(|rule| rule.rule_id.as_str())
        .collect();
    assert_eq!(ids, vec!["MANUAL_CRIT", "MANUAL_SAFE"]);
}

#[test]
fn keyword_plus_flag_scores_085() {
    let mut profile = text_profile(
        "Hiring Assistant",
        "Handles recruitment for a staffing agency",
        "Shortlist applicants",
    );
    profile.affects_rights = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.85);
}

#[test]
fn two_keywords_plus_flag_scores_095() {
    let mut profile = text_profile(
        "Gatekeeper",
        "Performs recruitment screening and credit scoring of applicants",
        "Decide tenancy and employment outcomes",
    );
    profile.affects_rights = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.95);
}

#[test]
fn health_keyword_and_declared_diagnosis_deduplicate() {
    let mut profile = text_profile(
        "Triage AI",
        "Provides medical diagnosis suggestions to clinicians",
        "Support emergency triage",
    );
    profile.health_domain = true;
    profile.influences_diagnosis = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    let health_hits = verdict
        .matched_rules
        .iter()
        .filter(|rule| rule.rule_id == "annex3_health")
        .count();
    assert_eq!(health_hits, 1);
    // The declared flag was swallowed by the keyword hit, so only the keyword
    // counter feeds the confidence lookup.
    assert_eq!(verdict.confidence, 0.70);
}

#[test]
fn declared_health_without_keywords_counts_as_a_flag() {
    let mut profile = neutral_profile();
    profile.health_domain = true;
    profile.influences_diagnosis = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.75);
    assert_eq!(verdict.matched_rules[0].rule_id, "annex3_health");
}

#[test]
fn administrative_only_health_use_stays_minimal_with_a_note() {
    let mut profile = neutral_profile();
    profile.health_domain = true;
    profile.is_administrative_only = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::Minimal);
    assert_eq!(verdict.confidence, 0.50);
    assert!(verdict.matched_rules.is_empty());
    assert!(verdict
        .justification
        .iter()
        .any(|line| line.contains("administrative support only")));
}

#[test]
fn declared_sector_tags_resolve_through_the_catalog() {
    let mut profile = neutral_profile();
    profile.declared_sectors = vec!["Education".to_string(), "astrology".to_string()];

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.75);
    assert_eq!(verdict.matched_rules.len(), 1);
    assert_eq!(verdict.matched_rules[0].rule_id, "annex3_education");
    assert!(verdict.matched_rules[0].reason.contains("User declared"));
}

#[test]
fn declared_sector_duplicating_a_keyword_hit_is_dropped() {
    let mut profile = text_profile(
        "Hiring Assistant",
        "Handles recruitment campaigns",
        "Shortlist applicants",
    );
    profile.declared_sectors = vec!["employment".to_string()];

    let verdict = classify(&profile);

    let employment_hits = verdict
        .matched_rules
        .iter()
        .filter(|rule| rule.rule_id == "annex3_employment")
        .count();
    assert_eq!(employment_hits, 1);
    // Deduplicated declarations do not feed the flag counter either.
    assert_eq!(verdict.confidence, 0.70);
}

#[test]
fn regulated_product_and_sector_references_both_appear() {
    let profile = text_profile(
        "Infusion Controller",
        "A medical device component that also performs patient triage",
        "Regulate drug dosage",
    );

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    let high_line = verdict
        .justification
        .iter()
        .find(|line| line.contains("High Risk due to matches"))
        .expect("aggregated justification present");
    assert!(high_line.contains("Article 6(1), Annex I"));
    assert!(high_line.contains("Annex III, 5(a)"));
}

#[test]
fn empty_catalog_still_classifies_from_declared_flags() {
    let engine = empty_catalog_engine();

    // Keyword-laden text finds nothing without rules to scan against.
    let keyword_only = engine.classify(&text_profile(
        "CivScore",
        "A social scoring platform handling recruitment",
        "Rank citizens",
    ));
    assert_eq!(keyword_only.tier, RiskTier::Minimal);
    assert_eq!(keyword_only.confidence, 0.50);
    assert!(keyword_only.matched_rules.is_empty());

    // Boolean declarations bypass the catalog entirely.
    let mut flagged = neutral_profile();
    flagged.is_biometric = true;
    let verdict = engine.classify(&flagged);
    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.confidence, 0.75);
    assert_eq!(verdict.matched_rules[0].rule_id, "MANUAL_BIO");

    // Declared sector tags resolve through the catalog, so they find nothing.
    let mut tagged = neutral_profile();
    tagged.declared_sectors = vec!["employment".to_string()];
    let verdict = engine.classify(&tagged);
    assert_eq!(verdict.tier, RiskTier::Minimal);
    assert!(verdict.matched_rules.is_empty());
}

#[test]
fn affects_rights_flag_maps_to_article_6_2() {
    let mut profile = neutral_profile();
    profile.affects_rights = true;

    let verdict = classify(&profile);

    assert_eq!(verdict.tier, RiskTier::High);
    assert_eq!(verdict.matched_rules[0].rule_id, "MANUAL_RIGHTS");
    assert_eq!(verdict.matched_rules[0].reference, "Article 6(2)");
}
