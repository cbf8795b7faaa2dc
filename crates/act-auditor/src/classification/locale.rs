use std::collections::BTreeMap;

use super::domain::RiskTier;

/// Complete set of localized strings for one language: tier labels,
/// justification templates, matched-rule wording, and the per-tier obligation
/// and next-step lists.
///
/// Both shipped languages are authored independently; there is no runtime
/// translation. Templates use `{kw}` and `{refs}` placeholders.
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    pub language: String,
    tier_labels: BTreeMap<RiskTier, String>,
    obligations: BTreeMap<RiskTier, Vec<String>>,
    next_steps: BTreeMap<RiskTier, Vec<String>>,
    prohibited_justification: String,
    high_risk_justification: String,
    limited_justification: String,
    minimal_justification: String,
    admin_exemption_note: String,
    synthetic_content_note: String,
    gpai_note: String,
    gpai_systemic_note: String,
    keyword_reason: String,
    declared_reason: String,
    category_prohibited: String,
    category_transparency: String,
    category_regulated_product: String,
    category_gpai: String,
    category_rights: String,
    category_biometrics: String,
    category_critical_infrastructure: String,
    category_safety: String,
    category_health: String,
}

impl LocaleBundle {
    pub fn tier_label(&self, tier: RiskTier) -> &str {
        self.tier_labels
            .get(&tier)
            .map(String::as_str)
            .unwrap_or(tier.key())
    }

    pub fn obligations(&self, tier: RiskTier) -> &[String] {
        self.obligations.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn next_steps(&self, tier: RiskTier) -> &[String] {
        self.next_steps.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn render_prohibited(&self, keyword: &str) -> String {
        self.prohibited_justification.replace("{kw}", keyword)
    }

    pub fn render_high_risk(&self, references: &str) -> String {
        self.high_risk_justification.replace("{refs}", references)
    }

    pub fn render_limited(&self, keyword: &str) -> String {
        self.limited_justification.replace("{kw}", keyword)
    }

    pub fn minimal_justification(&self) -> &str {
        &self.minimal_justification
    }

    pub fn admin_exemption_note(&self) -> &str {
        &self.admin_exemption_note
    }

    pub fn synthetic_content_note(&self) -> &str {
        &self.synthetic_content_note
    }

    pub fn gpai_note(&self) -> &str {
        &self.gpai_note
    }

    pub fn gpai_systemic_note(&self) -> &str {
        &self.gpai_systemic_note
    }

    pub fn keyword_reason(&self, keyword: &str) -> String {
        self.keyword_reason.replace("{kw}", keyword)
    }

    pub fn declared_reason(&self, what: &str) -> String {
        self.declared_reason.replace("{kw}", what)
    }

    pub fn category_prohibited(&self) -> &str {
        &self.category_prohibited
    }

    pub fn category_transparency(&self) -> &str {
        &self.category_transparency
    }

    pub fn category_regulated_product(&self) -> &str {
        &self.category_regulated_product
    }

    pub fn category_gpai(&self) -> &str {
        &self.category_gpai
    }

    pub fn category_rights(&self) -> &str {
        &self.category_rights
    }

    pub fn category_biometrics(&self) -> &str {
        &self.category_biometrics
    }

    pub fn category_critical_infrastructure(&self) -> &str {
        &self.category_critical_infrastructure
    }

    pub fn category_safety(&self) -> &str {
        &self.category_safety
    }

    pub fn category_health(&self) -> &str {
        &self.category_health
    }

    fn validate(&self) -> Result<(), LocaleError> {
        for tier in RiskTier::ALL {
            for (table, map_has) in [
                ("tier_labels", self.tier_labels.contains_key(&tier)),
                ("obligations", self.obligations.contains_key(&tier)),
                ("next_steps", self.next_steps.contains_key(&tier)),
            ] {
                if !map_has {
                    return Err(LocaleError::MissingTierEntry {
                        language: self.language.clone(),
                        tier: tier.key(),
                        table,
                    });
                }
            }
        }

        let templates = [
            ("prohibited_justification", &self.prohibited_justification),
            ("high_risk_justification", &self.high_risk_justification),
            ("limited_justification", &self.limited_justification),
            ("minimal_justification", &self.minimal_justification),
            ("admin_exemption_note", &self.admin_exemption_note),
            ("synthetic_content_note", &self.synthetic_content_note),
            ("gpai_note", &self.gpai_note),
            ("gpai_systemic_note", &self.gpai_systemic_note),
            ("keyword_reason", &self.keyword_reason),
            ("declared_reason", &self.declared_reason),
        ];
        for (field, value) in templates {
            if value.trim().is_empty() {
                return Err(LocaleError::EmptyTemplate {
                    language: self.language.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("locale bundle '{language}' is missing tier '{tier}' in table '{table}'")]
    MissingTierEntry {
        language: String,
        tier: &'static str,
        table: &'static str,
    },
    #[error("locale bundle '{language}' has an empty '{field}' template")]
    EmptyTemplate {
        language: String,
        field: &'static str,
    },
}

/// Language-to-bundle mapping with a guaranteed default.
///
/// Unsupported languages resolve to the default bundle, matching the
/// catalog-side language fallback.
#[derive(Debug, Clone)]
pub struct Localizer {
    default: LocaleBundle,
    extra: BTreeMap<String, LocaleBundle>,
}

impl Localizer {
    pub fn new(default: LocaleBundle, others: Vec<LocaleBundle>) -> Self {
        let extra = others
            .into_iter()
            .map(|bundle| (bundle.language.clone(), bundle))
            .collect();
        Self { default, extra }
    }

    /// The shipped English/French tables.
    pub fn builtin() -> Self {
        Self::new(english(), vec![french()])
    }

    pub fn bundle(&self, language: &str) -> &LocaleBundle {
        if language.eq_ignore_ascii_case(&self.default.language) {
            return &self.default;
        }
        self.extra.get(language).unwrap_or(&self.default)
    }

    /// Startup check that every bundle defines every required key, so a tier
    /// added to only one language fails fast instead of degrading silently.
    pub fn validate(&self) -> Result<(), LocaleError> {
        self.default.validate()?;
        for bundle in self.extra.values() {
            bundle.validate()?;
        }
        Ok(())
    }
}

fn tier_map(entries: [(RiskTier, &str); 4]) -> BTreeMap<RiskTier, String> {
    entries
        .into_iter()
        .map(|(tier, label)| (tier, label.to_string()))
        .collect()
}

fn list_map(entries: [(RiskTier, &[&str]); 4]) -> BTreeMap<RiskTier, Vec<String>> {
    entries
        .into_iter()
        .map(|(tier, items)| (tier, items.iter().map(|s| s.to_string()).collect()))
        .collect()
}

fn english() -> LocaleBundle {
    LocaleBundle {
        language: "en".to_string(),
        tier_labels: tier_map([
            (RiskTier::Prohibited, "Prohibited"),
            (RiskTier::High, "High Risk"),
            (RiskTier::Limited, "Limited Risk"),
            (RiskTier::Minimal, "Minimal Risk"),
        ]),
        obligations: list_map([
            (RiskTier::Prohibited, &["Prohibited: do not place on the market or put into service."]),
            (
                RiskTier::High,
                &[
                    "Establish a risk management system (Art. 9)",
                    "Ensure data governance and quality (Art. 10)",
                    "Create technical documentation (Art. 11 & Annex IV)",
                    "Enable automatic record keeping / logging (Art. 12)",
                    "Ensure transparency and user instructions (Art. 13)",
                    "Implement human oversight measures (Art. 14)",
                    "Ensure accuracy, robustness and cybersecurity (Art. 15)",
                ],
            ),
            (
                RiskTier::Limited,
                &["Transparency: inform natural persons they are interacting with an AI system (Art. 50)."],
            ),
            (
                RiskTier::Minimal,
                &[
                    "General product safety regulations apply.",
                    "Voluntary code of conduct recommended.",
                ],
            ),
        ]),
        next_steps: list_map([
            (RiskTier::Prohibited, &["Stop development immediately and consult legal counsel."]),
            (
                RiskTier::High,
                &[
                    "Begin a Fundamental Rights Impact Assessment (FRIA)",
                    "Prepare technical documentation",
                ],
            ),
            (RiskTier::Limited, &["Implement user notifications in the UI"]),
            (RiskTier::Minimal, &["Review standard safety compliance"]),
        ]),
        prohibited_justification:
            "Detected keyword '{kw}' related to prohibited practices (Article 5).".to_string(),
        high_risk_justification:
            "System classified as High Risk due to matches in: {refs}.".to_string(),
        limited_justification:
            "System involves interaction or content generation ('{kw}'). Transparency obligations apply."
                .to_string(),
        minimal_justification:
            "No specific high-risk or prohibited triggers found.".to_string(),
        admin_exemption_note:
            "Health domain declared as administrative support only; the narrow Annex III, 5 exemption may apply. Verify that no diagnosis or treatment decision is influenced."
                .to_string(),
        synthetic_content_note:
            "System generates synthetic content; Article 50 marking and disclosure obligations apply."
                .to_string(),
        gpai_note:
            "General-purpose AI model detected; provider obligations under Article 52 apply.".to_string(),
        gpai_systemic_note:
            "General-purpose AI model with systemic risk indicators detected; heightened obligations apply."
                .to_string(),
        keyword_reason: "Detected match: {kw}".to_string(),
        declared_reason: "User declared: {kw}".to_string(),
        category_prohibited: "Prohibited".to_string(),
        category_transparency: "Transparency".to_string(),
        category_regulated_product: "Regulated Product".to_string(),
        category_gpai: "General-Purpose AI".to_string(),
        category_rights: "Fundamental Rights".to_string(),
        category_biometrics: "Biometrics".to_string(),
        category_critical_infrastructure: "Critical Infrastructure".to_string(),
        category_safety: "Safety".to_string(),
        category_health: "Health".to_string(),
    }
}

fn french() -> LocaleBundle {
    LocaleBundle {
        language: "fr".to_string(),
        tier_labels: tier_map([
            (RiskTier::Prohibited, "Prohibé"),
            (RiskTier::High, "Haut Risque"),
            (RiskTier::Limited, "Risque Limité"),
            (RiskTier::Minimal, "Risque Minimal"),
        ]),
        obligations: list_map([
            (RiskTier::Prohibited, &["Interdit : ne pas mettre sur le marché ni mettre en service."]),
            (
                RiskTier::High,
                &[
                    "Établir un système de gestion des risques (Art. 9)",
                    "Assurer la gouvernance et la qualité des données (Art. 10)",
                    "Créer une documentation technique (Art. 11 & Annexe IV)",
                    "Permettre la journalisation automatique (Art. 12)",
                    "Assurer la transparence et les instructions aux utilisateurs (Art. 13)",
                    "Mettre en œuvre des mesures de surveillance humaine (Art. 14)",
                    "Assurer la précision, la robustesse et la cybersécurité (Art. 15)",
                ],
            ),
            (
                RiskTier::Limited,
                &["Transparence : informer les personnes physiques qu'elles interagissent avec un système d'IA (Art. 50)."],
            ),
            (
                RiskTier::Minimal,
                &[
                    "Les réglementations générales sur la sécurité des produits s'appliquent.",
                    "Code de conduite volontaire recommandé.",
                ],
            ),
        ]),
        next_steps: list_map([
            (RiskTier::Prohibited, &["Arrêter immédiatement le développement et consulter un conseiller juridique."]),
            (
                RiskTier::High,
                &[
                    "Commencer l'évaluation d'impact sur les droits fondamentaux (EIDF)",
                    "Préparer la documentation technique",
                ],
            ),
            (RiskTier::Limited, &["Mettre en œuvre les notifications utilisateur dans l'interface"]),
            (RiskTier::Minimal, &["Réviser la conformité standard à la sécurité"]),
        ]),
        prohibited_justification:
            "Mot-clé détecté '{kw}' lié à des pratiques prohibées (Article 5).".to_string(),
        high_risk_justification:
            "Système classé à Haut Risque en raison de correspondances dans : {refs}.".to_string(),
        limited_justification:
            "Le système implique une interaction ou une génération de contenu ('{kw}'). Des obligations de transparence s'appliquent."
                .to_string(),
        minimal_justification:
            "Aucun déclencheur spécifique de haut risque ou d'interdiction n'a été trouvé.".to_string(),
        admin_exemption_note:
            "Domaine de santé déclaré comme support administratif uniquement ; l'exemption étroite de l'Annexe III, 5 peut s'appliquer. Vérifier qu'aucune décision de diagnostic ou de traitement n'est influencée."
                .to_string(),
        synthetic_content_note:
            "Le système génère du contenu synthétique ; les obligations de marquage et de divulgation de l'Article 50 s'appliquent."
                .to_string(),
        gpai_note:
            "Modèle d'IA à usage général détecté ; les obligations du fournisseur de l'Article 52 s'appliquent."
                .to_string(),
        gpai_systemic_note:
            "Modèle d'IA à usage général présentant des indicateurs de risque systémique ; des obligations renforcées s'appliquent."
                .to_string(),
        keyword_reason: "Correspondance détectée : {kw}".to_string(),
        declared_reason: "Déclaré par l'utilisateur : {kw}".to_string(),
        category_prohibited: "Prohibé".to_string(),
        category_transparency: "Transparence".to_string(),
        category_regulated_product: "Produit réglementé".to_string(),
        category_gpai: "IA à usage général".to_string(),
        category_rights: "Droits fondamentaux".to_string(),
        category_biometrics: "Biométrie".to_string(),
        category_critical_infrastructure: "Infrastructures critiques".to_string(),
        category_safety: "Sécurité".to_string(),
        category_health: "Santé".to_string(),
    }
}
