use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Language code used whenever a requested language is unsupported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages with fully authored keyword lists and string tables.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "fr"];

/// Ordered keyword lists keyed by language code. Order matters: the matcher
/// reports the first keyword found, in declaration order.
pub type LanguageKeywords = BTreeMap<String, Vec<String>>;

/// Article 5 pattern. First matching pattern wins and short-circuits the
/// whole cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProhibitedPattern {
    pub id: String,
    pub keywords: LanguageKeywords,
    pub reference: String,
    /// Confidence carried by a match; clamped to [0.95, 1.0] at verdict time.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Annex III sector or use-case definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRule {
    pub id: String,
    /// Short machine tag matched against caller-declared sectors.
    pub sector: String,
    /// Per-language display names, used as the matched-rule category.
    pub names: BTreeMap<String, String>,
    pub reference: String,
    pub keywords: LanguageKeywords,
}

impl SectorRule {
    pub fn name(&self, language: &str) -> &str {
        self.names
            .get(language)
            .or_else(|| self.names.get(DEFAULT_LANGUAGE))
            .map(String::as_str)
            .unwrap_or(self.sector.as_str())
    }
}

/// Article 6 regulated-product keyword group (Annex I harmonization list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatedProductGroup {
    pub id: String,
    pub keywords: LanguageKeywords,
    pub reference: String,
}

/// Article 50 transparency trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitedRiskTrigger {
    pub id: String,
    pub keywords: LanguageKeywords,
    pub reference: String,
}

/// General-purpose AI detection lists, with a separate systemic-risk
/// sub-classification driven by its own lists and compute-scale markers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GpaiDefinition {
    #[serde(default)]
    pub keywords: LanguageKeywords,
    #[serde(default)]
    pub examples: LanguageKeywords,
    #[serde(default)]
    pub systemic_keywords: LanguageKeywords,
    #[serde(default)]
    pub systemic_examples: LanguageKeywords,
    /// Language-neutral textual markers for the training-compute threshold.
    #[serde(default)]
    pub compute_markers: Vec<String>,
}

/// Immutable rule catalog driving the classification engine.
///
/// Loaded once at startup and shared read-only across concurrent
/// classifications; the engine never mutates it. A missing or malformed
/// catalog file degrades to [`RuleCatalog::empty`] so classification itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCatalog {
    #[serde(default = "default_catalog_language")]
    pub default_language: String,
    #[serde(default = "default_catalog_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub prohibited: Vec<ProhibitedPattern>,
    #[serde(default)]
    pub sectors: Vec<SectorRule>,
    #[serde(default)]
    pub regulated_products: Vec<RegulatedProductGroup>,
    #[serde(default)]
    pub limited_risk: Vec<LimitedRiskTrigger>,
    #[serde(default)]
    pub gpai: GpaiDefinition,
}

fn default_catalog_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_catalog_languages() -> Vec<String> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read rule catalog at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed rule catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl RuleCatalog {
    /// Catalog with no rules at all. Classification still completes: declared
    /// flags keep producing evidence, keyword scanning simply finds nothing.
    pub fn empty() -> Self {
        Self {
            default_language: default_catalog_language(),
            languages: default_catalog_languages(),
            prohibited: Vec::new(),
            sectors: Vec::new(),
            regulated_products: Vec::new(),
            limited_risk: Vec::new(),
            gpai: GpaiDefinition::default(),
        }
    }

    /// Parse a catalog from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Load a catalog, degrading to the empty catalog when the file cannot be
    /// read or parsed. The degraded run simply has no keyword evidence.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_yaml_file(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "rule catalog unavailable, continuing with empty catalog");
                Self::empty()
            }
        }
    }

    /// Resolve the requested language against the supported set, falling back
    /// to the default uniformly for the whole classification run.
    ///
    /// Matching is case-insensitive but the returned code is the catalog's
    /// own spelling, so downstream keyword and bundle lookups always agree.
    pub fn resolve_language<'a>(&'a self, requested: &'a str) -> &'a str {
        let requested = requested.trim();
        self.languages
            .iter()
            .find(|lang| lang.eq_ignore_ascii_case(requested))
            .map(String::as_str)
            .unwrap_or(self.default_language.as_str())
    }

    /// Look up a sector rule by its machine tag, case-insensitively.
    pub fn sector_by_tag(&self, tag: &str) -> Option<&SectorRule> {
        let tag = tag.trim();
        self.sectors
            .iter()
            .find(|rule| rule.sector.eq_ignore_ascii_case(tag))
    }

    pub fn sector_by_id(&self, id: &str) -> Option<&SectorRule> {
        self.sectors.iter().find(|rule| rule.id == id)
    }

    /// Built-in catalog, used when no catalog path is configured. A YAML
    /// catalog with the same shape can replace it via `APP_RULES_PATH`.
    pub fn builtin() -> Self {
        Self {
            default_language: default_catalog_language(),
            languages: default_catalog_languages(),
            prohibited: builtin_prohibited(),
            sectors: builtin_sectors(),
            regulated_products: builtin_regulated_products(),
            limited_risk: builtin_limited_risk(),
            gpai: builtin_gpai(),
        }
    }
}

fn keywords(en: &[&str], fr: &[&str]) -> LanguageKeywords {
    let mut map = BTreeMap::new();
    map.insert(
        "en".to_string(),
        en.iter().map(|kw| kw.to_string()).collect(),
    );
    map.insert(
        "fr".to_string(),
        fr.iter().map(|kw| kw.to_string()).collect(),
    );
    map
}

fn names(en: &str, fr: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert("en".to_string(), en.to_string());
    map.insert("fr".to_string(), fr.to_string());
    map
}

fn builtin_prohibited() -> Vec<ProhibitedPattern> {
    vec![
        ProhibitedPattern {
            id: "art5_social_scoring".to_string(),
            keywords: keywords(
                &[
                    "social scoring",
                    "social credit",
                    "citizen score",
                    "behavior scoring",
                    "score citizens",
                ],
                &[
                    "notation sociale",
                    "crédit social",
                    "score citoyen",
                    "notation des citoyens",
                ],
            ),
            reference: "Article 5(1)(c)".to_string(),
            weight: 1.0,
        },
        ProhibitedPattern {
            id: "art5_subliminal".to_string(),
            keywords: keywords(
                &[
                    "subliminal",
                    "manipulative technique",
                    "behavioral manipulation",
                ],
                &["subliminal", "techniques subliminales", "manipulation comportementale"],
            ),
            reference: "Article 5(1)(a)".to_string(),
            weight: 1.0,
        },
        ProhibitedPattern {
            id: "art5_exploit_vulnerabilities".to_string(),
            keywords: keywords(
                &[
                    "exploit vulnerabilities",
                    "exploits vulnerabilities",
                    "exploiting vulnerable",
                ],
                &["exploiter les vulnérabilités", "exploitation des personnes vulnérables"],
            ),
            reference: "Article 5(1)(b)".to_string(),
            weight: 1.0,
        },
        ProhibitedPattern {
            id: "art5_predictive_policing".to_string(),
            keywords: keywords(
                &["predictive policing", "crime prediction", "criminal risk profiling"],
                &["police prédictive", "prédiction de crime", "profilage de risque criminel"],
            ),
            reference: "Article 5(1)(d)".to_string(),
            weight: 1.0,
        },
        ProhibitedPattern {
            id: "art5_realtime_biometric".to_string(),
            keywords: keywords(
                &[
                    "real-time remote biometric identification",
                    "real-time biometric identification in public",
                ],
                &["identification biométrique à distance en temps réel"],
            ),
            reference: "Article 5(1)(h)".to_string(),
            weight: 1.0,
        },
    ]
}

fn builtin_sectors() -> Vec<SectorRule> {
    vec![
        SectorRule {
            id: "annex3_biometrics".to_string(),
            sector: "biometrics".to_string(),
            names: names("Biometrics", "Biométrie"),
            reference: "Annex III, 1".to_string(),
            keywords: keywords(
                &[
                    "facial recognition",
                    "biometric identification",
                    "fingerprint matching",
                    "gait analysis",
                ],
                &["reconnaissance faciale", "identification biométrique"],
            ),
        },
        SectorRule {
            id: "annex3_critical_infrastructure".to_string(),
            sector: "critical_infrastructure".to_string(),
            names: names("Critical Infrastructure", "Infrastructures critiques"),
            reference: "Annex III, 2".to_string(),
            keywords: keywords(
                &["critical infrastructure", "power grid", "water supply", "traffic management"],
                &["infrastructure critique", "réseau électrique", "gestion du trafic"],
            ),
        },
        SectorRule {
            id: "annex3_education".to_string(),
            sector: "education".to_string(),
            names: names("Education", "Éducation"),
            reference: "Annex III, 3".to_string(),
            keywords: keywords(
                &[
                    "student admission",
                    "university admission",
                    "exam scoring",
                    "student assessment",
                    "enrollment decision",
                ],
                &["admission des étudiants", "évaluation des étudiants", "notation d'examens"],
            ),
        },
        SectorRule {
            id: "annex3_employment".to_string(),
            sector: "employment".to_string(),
            names: names("Employment", "Emploi"),
            reference: "Annex III, 4".to_string(),
            keywords: keywords(
                &[
                    "recruitment",
                    "hiring decision",
                    "resume screening",
                    "screening resumes",
                    "candidate ranking",
                    "employee monitoring",
                    "promotion decision",
                ],
                &[
                    "recrutement",
                    "embauche",
                    "sélection de candidats",
                    "tri de cv",
                    "surveillance des employés",
                ],
            ),
        },
        SectorRule {
            id: "annex3_health".to_string(),
            sector: "health".to_string(),
            names: names("Health", "Santé"),
            reference: "Annex III, 5(a)".to_string(),
            keywords: keywords(
                &["medical diagnosis", "patient triage", "clinical decision support"],
                &["diagnostic médical", "triage des patients", "aide à la décision clinique"],
            ),
        },
        SectorRule {
            id: "annex3_essential_services".to_string(),
            sector: "essential_services".to_string(),
            names: names("Essential Services", "Services essentiels"),
            reference: "Annex III, 5".to_string(),
            keywords: keywords(
                &[
                    "credit scoring",
                    "creditworthiness",
                    "insurance pricing",
                    "social benefits eligibility",
                    "emergency dispatch",
                ],
                &["évaluation de crédit", "solvabilité", "prestations sociales"],
            ),
        },
        SectorRule {
            id: "annex3_law_enforcement".to_string(),
            sector: "law_enforcement".to_string(),
            names: names("Law Enforcement", "Forces de l'ordre"),
            reference: "Annex III, 6".to_string(),
            keywords: keywords(
                &["law enforcement", "polygraph", "evidence reliability", "recidivism"],
                &["forces de l'ordre", "polygraphe", "récidive"],
            ),
        },
        SectorRule {
            id: "annex3_migration".to_string(),
            sector: "migration".to_string(),
            names: names("Migration and Border Control", "Migration et contrôle aux frontières"),
            reference: "Annex III, 7".to_string(),
            keywords: keywords(
                &["asylum application", "visa application", "border control", "migration risk"],
                &["demande d'asile", "demande de visa", "contrôle aux frontières"],
            ),
        },
        SectorRule {
            id: "annex3_justice".to_string(),
            sector: "justice".to_string(),
            names: names("Justice and Democratic Processes", "Justice et processus démocratiques"),
            reference: "Annex III, 8".to_string(),
            keywords: keywords(
                &["judicial decision", "court ruling", "sentencing recommendation", "election outcome"],
                &["décision judiciaire", "recommandation de peine", "résultat d'élection"],
            ),
        },
    ]
}

fn builtin_regulated_products() -> Vec<RegulatedProductGroup> {
    vec![
        RegulatedProductGroup {
            id: "annex1_medical_device".to_string(),
            keywords: keywords(
                &["medical device", "in vitro diagnostic"],
                &["dispositif médical", "diagnostic in vitro"],
            ),
            reference: "Article 6(1), Annex I".to_string(),
        },
        RegulatedProductGroup {
            id: "annex1_safety_component".to_string(),
            keywords: keywords(
                &["safety component", "safety-critical component"],
                &["composant de sécurité"],
            ),
            reference: "Article 6(1), Annex I".to_string(),
        },
        RegulatedProductGroup {
            id: "annex1_machinery".to_string(),
            keywords: keywords(
                &["industrial machinery", "industrial robot", "elevator control"],
                &["machines industrielles", "robot industriel"],
            ),
            reference: "Article 6(1), Annex I".to_string(),
        },
    ]
}

fn builtin_limited_risk() -> Vec<LimitedRiskTrigger> {
    vec![
        LimitedRiskTrigger {
            id: "art50_chatbot".to_string(),
            keywords: keywords(
                &["chatbot", "conversational agent", "virtual assistant"],
                &["chatbot", "agent conversationnel", "assistant virtuel"],
            ),
            reference: "Article 50(1)".to_string(),
        },
        LimitedRiskTrigger {
            id: "art50_deepfake".to_string(),
            keywords: keywords(
                &["deep fake", "deepfake", "synthetic media", "face swap"],
                &["hypertrucage", "deepfake", "média synthétique"],
            ),
            reference: "Article 50(4)".to_string(),
        },
        LimitedRiskTrigger {
            id: "art50_emotion".to_string(),
            keywords: keywords(
                &["emotion recognition", "emotion detection"],
                &["reconnaissance des émotions", "détection des émotions"],
            ),
            reference: "Article 50(3)".to_string(),
        },
        LimitedRiskTrigger {
            id: "art50_biometric_categorization".to_string(),
            keywords: keywords(
                &["biometric categorization", "biometric categorisation"],
                &["catégorisation biométrique"],
            ),
            reference: "Article 50(3)".to_string(),
        },
    ]
}

fn builtin_gpai() -> GpaiDefinition {
    GpaiDefinition {
        keywords: keywords(
            &["general-purpose ai", "general purpose ai", "foundation model", "gpai"],
            &["ia à usage général", "modèle de fondation"],
        ),
        examples: keywords(
            &["large language model", "multimodal model", "text-to-image model"],
            &["grand modèle de langage", "modèle multimodal"],
        ),
        systemic_keywords: keywords(
            &["systemic risk", "frontier model"],
            &["risque systémique", "modèle de frontière"],
        ),
        systemic_examples: keywords(
            &["state-of-the-art capabilities", "most capable model"],
            &["capacités de pointe", "modèle le plus performant"],
        ),
        compute_markers: vec![
            "10^25".to_string(),
            "10e25".to_string(),
            "1e25".to_string(),
            "10**25".to_string(),
            "flops".to_string(),
        ],
    }
}
