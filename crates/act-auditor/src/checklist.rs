//! Actionable compliance checklists per risk tier, with article references.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classification::RiskTier;

const EUR_LEX: &str = "https://eur-lex.europa.eu/eli/reg/2024/1689/oj";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub title: &'static str,
    pub description: &'static str,
    pub article: &'static str,
    pub link: &'static str,
    pub category: &'static str,
    pub priority: Priority,
}

const PROHIBITED_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        title: "Cease prohibited activities immediately",
        description: "Stop deployment and development of any system performing manipulation, exploitation of vulnerable groups, social scoring, or real-time public biometric identification.",
        article: "Article 5",
        link: EUR_LEX,
        category: "Legal Compliance",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Consult a legal expert urgently",
        description: "Discuss potential exemptions, transition periods, or system modifications with a specialized AI Act lawyer.",
        article: "Article 5, 113",
        link: EUR_LEX,
        category: "Legal Compliance",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Assess potential penalties",
        description: "Prohibited practices can draw fines up to EUR 35M or 7% of global turnover.",
        article: "Article 99",
        link: EUR_LEX,
        category: "Risk Management",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Document system shutdown",
        description: "Record when and why the system was disabled, for regulatory follow-up.",
        article: "Article 72",
        link: EUR_LEX,
        category: "Documentation",
        priority: Priority::High,
    },
];

const HIGH_RISK_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        title: "Establish a risk management system",
        description: "Continuous risk identification, analysis, evaluation, and mitigation across the AI lifecycle.",
        article: "Article 9",
        link: EUR_LEX,
        category: "Risk Management",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Implement data governance",
        description: "Training, validation, and testing datasets must be relevant, representative, and examined for bias.",
        article: "Article 10",
        link: EUR_LEX,
        category: "Data Management",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Prepare technical documentation",
        description: "Document design, development, testing, and performance per Annex IV before market placement.",
        article: "Article 11, Annex IV",
        link: EUR_LEX,
        category: "Documentation",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Implement automatic logging",
        description: "Record events, decisions, and interactions automatically for traceability.",
        article: "Article 12",
        link: EUR_LEX,
        category: "Technical Compliance",
        priority: Priority::High,
    },
    ChecklistItem {
        title: "Enable human oversight",
        description: "Natural persons must be able to effectively oversee, override, interrupt, or stop the system.",
        article: "Article 14",
        link: EUR_LEX,
        category: "Safety",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Achieve appropriate accuracy and robustness",
        description: "Meet appropriate levels of accuracy, robustness, and cybersecurity.",
        article: "Article 15",
        link: EUR_LEX,
        category: "Technical Compliance",
        priority: Priority::High,
    },
    ChecklistItem {
        title: "Register in the EU database",
        description: "Register the high-risk system in the EU database before placing it on the market.",
        article: "Article 71",
        link: EUR_LEX,
        category: "Legal Compliance",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Conduct a conformity assessment",
        description: "Complete internal control or third-party assessment depending on the Annex III category, then affix CE marking.",
        article: "Article 43, 48",
        link: EUR_LEX,
        category: "Certification",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Set up post-market monitoring and incident reporting",
        description: "Monitor real-world performance and report serious incidents to national authorities.",
        article: "Article 72, 73",
        link: EUR_LEX,
        category: "Monitoring",
        priority: Priority::High,
    },
];

const LIMITED_RISK_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        title: "Inform users about AI interaction",
        description: "Disclose that users are interacting with an AI system, unless obvious from context.",
        article: "Article 50",
        link: EUR_LEX,
        category: "Transparency",
        priority: Priority::High,
    },
    ChecklistItem {
        title: "Label AI-generated content",
        description: "Mark synthetic audio, image, video, or text as artificially generated or manipulated.",
        article: "Article 50(2)",
        link: EUR_LEX,
        category: "Transparency",
        priority: Priority::High,
    },
    ChecklistItem {
        title: "Make deepfakes detectable",
        description: "Generated deepfakes must be technically detectable and appropriately labeled.",
        article: "Article 50(4)",
        link: EUR_LEX,
        category: "Safety",
        priority: Priority::Critical,
    },
    ChecklistItem {
        title: "Consider voluntary codes of conduct",
        description: "Adopt codes of conduct going beyond the minimum transparency obligations.",
        article: "Article 95",
        link: EUR_LEX,
        category: "Best Practices",
        priority: Priority::Medium,
    },
];

const MINIMAL_RISK_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        title: "Ensure GDPR compliance",
        description: "Minimal-risk AI must still comply with GDPR when processing personal data.",
        article: "GDPR",
        link: "https://gdpr-info.eu/",
        category: "Data Protection",
        priority: Priority::High,
    },
    ChecklistItem {
        title: "Document system purpose and design",
        description: "Maintain internal documentation as good practice for audits or reclassification.",
        article: "Best Practice",
        link: EUR_LEX,
        category: "Documentation",
        priority: Priority::Medium,
    },
    ChecklistItem {
        title: "Monitor for classification changes",
        description: "Periodically reassess whether usage or features shift the system into a higher tier.",
        article: "Annex III",
        link: EUR_LEX,
        category: "Risk Management",
        priority: Priority::Medium,
    },
    ChecklistItem {
        title: "Adopt voluntary standards",
        description: "Consider voluntary AI ethics guidelines and technical standards such as ISO/IEC 42001.",
        article: "Article 96",
        link: "https://www.iso.org/standard/81230.html",
        category: "Best Practices",
        priority: Priority::Low,
    },
];

/// Checklist for a risk tier, in recommended execution order.
pub fn checklist_for(tier: RiskTier) -> &'static [ChecklistItem] {
    match tier {
        RiskTier::Prohibited => PROHIBITED_CHECKLIST,
        RiskTier::High => HIGH_RISK_CHECKLIST,
        RiskTier::Limited => LIMITED_RISK_CHECKLIST,
        RiskTier::Minimal => MINIMAL_RISK_CHECKLIST,
    }
}

/// Aggregate view of a tier's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub total_items: usize,
    pub critical_count: usize,
    pub categories: BTreeMap<&'static str, usize>,
}

pub fn summary_for(tier: RiskTier) -> ChecklistSummary {
    let items = checklist_for(tier);
    let mut categories = BTreeMap::new();
    for item in items {
        *categories.entry(item.category).or_insert(0) += 1;
    }
    ChecklistSummary {
        total_items: items.len(),
        critical_count: items
            .iter()
            .filter(|item| item.priority == Priority::Critical)
            .count(),
        categories,
    }
}
