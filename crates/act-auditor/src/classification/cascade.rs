use super::catalog::RuleCatalog;
use super::corpus::first_match;
use super::domain::{MatchedRule, RiskTier, SystemProfile};
use super::locale::LocaleBundle;

/// Everything the cascade decides before scoring: the tier, the evidence
/// trail, and the counters the confidence heuristic consumes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CascadeOutcome {
    pub tier: RiskTier,
    pub justification: Vec<String>,
    pub matched_rules: Vec<MatchedRule>,
    pub keyword_matches: usize,
    pub declared_flags: usize,
    /// Weight of the prohibited pattern that short-circuited, if any.
    pub prohibited_weight: Option<f64>,
}

/// Run the tier decision procedure against a pre-built corpus.
///
/// Strict evaluation order: prohibited short-circuit, Article 6 regulated
/// products, high-risk aggregation, limited-risk check, GPAI check, minimal
/// fallback. Only the prohibited branch terminates early; every later step
/// can add evidence but never removes it.
pub(crate) fn run(
    profile: &SystemProfile,
    corpus: &str,
    catalog: &RuleCatalog,
    bundle: &LocaleBundle,
    language: &str,
) -> CascadeOutcome {
    let default_language = catalog.default_language.as_str();
    let scan = |keywords| first_match(corpus, keywords, language, default_language);

    // Step 1: Article 5 prohibited practices. First match wins and skips
    // every other rule category.
    for pattern in &catalog.prohibited {
        if let Some(kw) = scan(&pattern.keywords) {
            return CascadeOutcome {
                tier: RiskTier::Prohibited,
                justification: vec![bundle.render_prohibited(kw)],
                matched_rules: vec![MatchedRule {
                    rule_id: pattern.id.clone(),
                    category: bundle.category_prohibited().to_string(),
                    reason: bundle.keyword_reason(kw),
                    reference: pattern.reference.clone(),
                }],
                keyword_matches: 1,
                declared_flags: 0,
                prohibited_weight: Some(pattern.weight),
            };
        }
    }

    let mut tier = RiskTier::Minimal;
    let mut justification = Vec::new();
    let mut high_evidence: Vec<MatchedRule> = Vec::new();
    let mut keyword_matches = 0usize;
    let mut declared_flags = 0usize;

    // Step 2: Article 6 regulated products. Non-terminal; hits only feed the
    // high-risk aggregation as evidence.
    for group in &catalog.regulated_products {
        if let Some(kw) = scan(&group.keywords) {
            high_evidence.push(MatchedRule {
                rule_id: group.id.clone(),
                category: bundle.category_regulated_product().to_string(),
                reason: bundle.keyword_reason(kw),
                reference: group.reference.clone(),
            });
            keyword_matches += 1;
        }
    }

    // Step 3: Annex III sector keywords. No short-circuit and no
    // de-duplication; several sectors may match the same corpus.
    for rule in &catalog.sectors {
        if let Some(kw) = scan(&rule.keywords) {
            high_evidence.push(MatchedRule {
                rule_id: rule.id.clone(),
                category: rule.name(language).to_string(),
                reason: bundle.keyword_reason(kw),
                reference: rule.reference.clone(),
            });
            keyword_matches += 1;
        }
    }

    // Declared flags, counted separately from keyword evidence.
    if profile.is_biometric {
        high_evidence.push(MatchedRule {
            rule_id: "MANUAL_BIO".to_string(),
            category: bundle.category_biometrics().to_string(),
            reason: bundle.declared_reason(bundle.category_biometrics()),
            reference: "Annex III, 1".to_string(),
        });
        declared_flags += 1;
    }
    if profile.is_critical_infrastructure {
        high_evidence.push(MatchedRule {
            rule_id: "MANUAL_CRIT".to_string(),
            category: bundle.category_critical_infrastructure().to_string(),
            reason: bundle.declared_reason(bundle.category_critical_infrastructure()),
            reference: "Annex III, 2".to_string(),
        });
        declared_flags += 1;
    }
    if profile.is_safety_component {
        high_evidence.push(MatchedRule {
            rule_id: "MANUAL_SAFE".to_string(),
            category: bundle.category_safety().to_string(),
            reason: bundle.declared_reason(bundle.category_safety()),
            reference: "Article 6(1), Annex I".to_string(),
        });
        declared_flags += 1;
    }

    // Declared sector tags resolve through the catalog and are de-duplicated
    // by rule id against keyword hits, unlike the keyword scan above.
    for tag in &profile.declared_sectors {
        if let Some(rule) = catalog.sector_by_tag(tag) {
            if high_evidence.iter().any(|m| m.rule_id == rule.id) {
                continue;
            }
            high_evidence.push(MatchedRule {
                rule_id: rule.id.clone(),
                category: rule.name(language).to_string(),
                reason: bundle.declared_reason(rule.name(language)),
                reference: rule.reference.clone(),
            });
            declared_flags += 1;
        }
    }

    // Health is a nested decision: diagnosis influence makes it high-risk
    // evidence, administrative-only use earns an informational note instead.
    if profile.health_domain && profile.influences_diagnosis {
        if !high_evidence.iter().any(|m| m.rule_id == "annex3_health") {
            high_evidence.push(MatchedRule {
                rule_id: "annex3_health".to_string(),
                category: bundle.category_health().to_string(),
                reason: bundle.declared_reason(bundle.category_health()),
                reference: "Annex III, 5(a)".to_string(),
            });
            declared_flags += 1;
        }
    } else if profile.health_domain && profile.is_administrative_only {
        justification.push(bundle.admin_exemption_note().to_string());
    }

    if profile.affects_rights {
        high_evidence.push(MatchedRule {
            rule_id: "MANUAL_RIGHTS".to_string(),
            category: bundle.category_rights().to_string(),
            reason: bundle.declared_reason(bundle.category_rights()),
            reference: "Article 6(2)".to_string(),
        });
        declared_flags += 1;
    }

    // Synthetic content is transparency evidence, not high-risk evidence: it
    // rides alongside the cascade and can only promote Minimal to Limited.
    let mut article_50_triggered = false;
    let mut transparency_rule = None;
    if profile.generates_synthetic_content {
        transparency_rule = Some(MatchedRule {
            rule_id: "ART_50_SYNTHETIC".to_string(),
            category: bundle.category_transparency().to_string(),
            reason: bundle.declared_reason(bundle.category_transparency()),
            reference: "Article 50(2)".to_string(),
        });
        justification.push(bundle.synthetic_content_note().to_string());
        article_50_triggered = true;
    }

    if !high_evidence.is_empty() {
        tier = RiskTier::High;
        let mut refs: Vec<&str> = Vec::new();
        for rule in &high_evidence {
            if !refs.contains(&rule.reference.as_str()) {
                refs.push(rule.reference.as_str());
            }
        }
        justification.push(bundle.render_high_risk(&refs.join(", ")));
    }

    let mut matched_rules = high_evidence;
    if let Some(rule) = transparency_rule {
        matched_rules.push(rule);
    }

    // Step 4: Article 50 transparency triggers, only while still Minimal.
    // First match wins within this category.
    if tier == RiskTier::Minimal {
        'limited: for trigger in &catalog.limited_risk {
            if let Some(kw) = scan(&trigger.keywords) {
                tier = RiskTier::Limited;
                justification.push(bundle.render_limited(kw));
                matched_rules.push(MatchedRule {
                    rule_id: trigger.id.clone(),
                    category: bundle.category_transparency().to_string(),
                    reason: bundle.keyword_reason(kw),
                    reference: trigger.reference.clone(),
                });
                keyword_matches += 1;
                break 'limited;
            }
        }
        if tier == RiskTier::Minimal && article_50_triggered {
            tier = RiskTier::Limited;
        }
    }

    // Step 5: GPAI. Evaluated even when a tier is already assigned; the
    // prohibited branch is unreachable here because of the step-1 return.
    let gpai = &catalog.gpai;
    let gpai_hit = scan(&gpai.keywords).or_else(|| scan(&gpai.examples));
    if let Some(kw) = gpai_hit {
        let systemic = scan(&gpai.systemic_keywords)
            .or_else(|| scan(&gpai.systemic_examples))
            .is_some()
            || gpai
                .compute_markers
                .iter()
                .any(|marker| corpus.contains(&marker.to_lowercase()));

        if systemic {
            justification.push(bundle.gpai_systemic_note().to_string());
            matched_rules.push(MatchedRule {
                rule_id: "GPAI_SYSTEMIC".to_string(),
                category: bundle.category_gpai().to_string(),
                reason: bundle.keyword_reason(kw),
                reference: "Article 52, 55".to_string(),
            });
        } else {
            justification.push(bundle.gpai_note().to_string());
            matched_rules.push(MatchedRule {
                rule_id: "GPAI_STANDARD".to_string(),
                category: bundle.category_gpai().to_string(),
                reason: bundle.keyword_reason(kw),
                reference: "Article 52".to_string(),
            });
        }
        keyword_matches += 1;
        tier = RiskTier::High;
    }

    // Step 6: minimal fallback.
    if tier == RiskTier::Minimal {
        justification.push(bundle.minimal_justification().to_string());
    }

    CascadeOutcome {
        tier,
        justification,
        matched_rules,
        keyword_matches,
        declared_flags,
        prohibited_weight: None,
    }
}
