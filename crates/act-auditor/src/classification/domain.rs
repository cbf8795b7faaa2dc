use serde::{Deserialize, Serialize};

/// The four risk tiers defined by the AI Act, from most to least severe.
///
/// Prohibited always wins: once an Article 5 pattern matches, no other tier is
/// considered. The remaining tiers are only upgraded, never downgraded, as the
/// decision cascade progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "Prohibited")]
    Prohibited,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Limited Risk")]
    Limited,
    #[serde(rename = "Minimal Risk")]
    Minimal,
}

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Prohibited,
        RiskTier::High,
        RiskTier::Limited,
        RiskTier::Minimal,
    ];

    /// Stable lowercase key used in routes and lookup tables.
    pub const fn key(self) -> &'static str {
        match self {
            RiskTier::Prohibited => "prohibited",
            RiskTier::High => "high",
            RiskTier::Limited => "limited",
            RiskTier::Minimal => "minimal",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "prohibited" | "unacceptable" => Some(RiskTier::Prohibited),
            "high" => Some(RiskTier::High),
            "limited" => Some(RiskTier::Limited),
            "minimal" => Some(RiskTier::Minimal),
            _ => None,
        }
    }
}

/// Lifecycle stage declared by the caller; recorded for audit metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentPhase {
    #[serde(rename = "On Market")]
    OnMarket,
    #[serde(rename = "In Service")]
    InService,
    #[serde(rename = "Development")]
    Development,
}

impl Default for DeploymentPhase {
    fn default() -> Self {
        DeploymentPhase::Development
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Caller-supplied description of the automated system under assessment.
///
/// Free-text fields feed the keyword corpus; the boolean fields are explicit
/// declarations that count as user-declared evidence in the cascade. An
/// unsupported `language` is not an error and falls back to the catalog
/// default for the whole classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemProfile {
    pub name: String,
    pub description: String,
    pub intended_purpose: String,
    #[serde(default)]
    pub domain: Option<String>,

    // Explicit declarations (Annex III / Article 6 evidence).
    #[serde(default)]
    pub is_biometric: bool,
    #[serde(default)]
    pub is_critical_infrastructure: bool,
    #[serde(default)]
    pub is_safety_component: bool,

    // Health domain nested declarations (Annex III, 5).
    #[serde(default)]
    pub health_domain: bool,
    #[serde(default)]
    pub influences_diagnosis: bool,
    #[serde(default)]
    pub is_administrative_only: bool,

    // Synthetic content / deepfake declarations (Article 50).
    #[serde(default)]
    pub generates_synthetic_content: bool,
    #[serde(default)]
    pub content_types: Vec<String>,

    #[serde(default)]
    pub affects_rights: bool,
    #[serde(default)]
    pub declared_sectors: Vec<String>,

    #[serde(default)]
    pub deployment_phase: DeploymentPhase,
    #[serde(default = "default_language")]
    pub language: String,
}

impl SystemProfile {
    /// Minimal profile with every declaration flag off, for callers that only
    /// have free text to offer.
    pub fn from_text(name: &str, description: &str, intended_purpose: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            intended_purpose: intended_purpose.to_string(),
            domain: None,
            is_biometric: false,
            is_critical_infrastructure: false,
            is_safety_component: false,
            health_domain: false,
            influences_diagnosis: false,
            is_administrative_only: false,
            generates_synthetic_content: false,
            content_types: Vec::new(),
            affects_rights: false,
            declared_sectors: Vec::new(),
            deployment_phase: DeploymentPhase::default(),
            language: default_language(),
        }
    }
}

/// Evidence record linking a trigger (keyword or declared flag) to a legal
/// reference. Duplicate rule ids are tolerated except where the cascade
/// explicitly de-duplicates (health/diagnosis and declared sector tags).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRule {
    pub rule_id: String,
    pub category: String,
    pub reason: String,
    pub reference: String,
}

/// Immutable classification result, constructed once per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "risk_level")]
    pub tier: RiskTier,
    /// Localized display label for the tier.
    pub tier_label: String,
    #[serde(rename = "risk_score")]
    pub confidence: f64,
    pub justification: Vec<String>,
    pub matched_rules: Vec<MatchedRule>,
    pub obligations: Vec<String>,
    pub next_steps: Vec<String>,
}
