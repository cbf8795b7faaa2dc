//! Condensed AI Act article knowledge base.
//!
//! Static excerpts keyed by article number, used for report context and the
//! lookup endpoint. This is reference data, not a legal source of truth.

use serde::Serialize;

use crate::classification::RiskTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub number: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub reference: &'static str,
}

const ARTICLES: &[Article] = &[
    Article {
        number: "5",
        title: "Prohibited AI practices",
        summary: "Bans subliminal manipulation, exploitation of vulnerable groups, social scoring, and real-time remote biometric identification in public spaces for law enforcement (with narrow exceptions).",
        reference: "Article 5, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "6",
        title: "Classification rules for high-risk AI systems",
        summary: "An AI system is high-risk when it is a safety component of (or itself) a product covered by Annex I harmonization legislation subject to third-party conformity assessment, or when it falls under an Annex III use case.",
        reference: "Article 6, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "9",
        title: "Risk management system",
        summary: "High-risk systems need a continuous, iterative risk management process across the full lifecycle: identify, estimate, evaluate, and mitigate foreseeable risks.",
        reference: "Article 9, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "10",
        title: "Data and data governance",
        summary: "Training, validation, and testing datasets must meet quality criteria and be governed for provenance, preparation, representativeness, and bias examination.",
        reference: "Article 10, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "11",
        title: "Technical documentation",
        summary: "Technical documentation demonstrating compliance with Annex IV must exist before market placement and be kept up to date.",
        reference: "Article 11, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "12",
        title: "Record-keeping",
        summary: "High-risk systems must automatically record events over their lifetime, proportionate to the intended purpose, to ensure traceability.",
        reference: "Article 12, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "13",
        title: "Transparency and provision of information to deployers",
        summary: "Operation must be transparent enough for deployers to interpret output; instructions for use must cover capabilities, limitations, and oversight measures.",
        reference: "Article 13, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "14",
        title: "Human oversight",
        summary: "High-risk systems must be designed so natural persons can effectively oversee them, with authority and competence to intervene or stop the system.",
        reference: "Article 14, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "15",
        title: "Accuracy, robustness and cybersecurity",
        summary: "Appropriate accuracy, robustness, and cybersecurity throughout the lifecycle, including resilience against data poisoning and adversarial inputs.",
        reference: "Article 15, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "50",
        title: "Transparency obligations for certain AI systems",
        summary: "Chatbots must disclose they are AI; synthetic audio, image, video, or text must be marked as generated; deepfakes must be labeled.",
        reference: "Article 50, EU AI Act (Regulation 2024/1689)",
    },
    Article {
        number: "52",
        title: "General-purpose AI models",
        summary: "GPAI providers must maintain technical documentation, inform downstream providers, respect copyright, and publish training-content summaries; systemic-risk models face model evaluation and incident-reporting duties.",
        reference: "Article 52, EU AI Act (Regulation 2024/1689)",
    },
];

/// Look up a specific article by number.
pub fn get(number: &str) -> Option<&'static Article> {
    let number = number.trim();
    ARTICLES.iter().find(|article| article.number == number)
}

/// Case-insensitive substring search across titles and summaries.
pub fn search(query: &str) -> Vec<&'static Article> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    ARTICLES
        .iter()
        .filter(|article| {
            article.title.to_lowercase().contains(&query)
                || article.summary.to_lowercase().contains(&query)
        })
        .collect()
}

/// Articles most relevant to a classification outcome, in citation order.
pub fn relevant(tier: RiskTier) -> Vec<&'static Article> {
    let numbers: &[&str] = match tier {
        RiskTier::Prohibited => &["5"],
        RiskTier::High => &["6", "9", "10", "11", "12", "13", "14", "15"],
        RiskTier::Limited => &["50"],
        RiskTier::Minimal => &[],
    };
    numbers.iter().filter_map(|number| get(number)).collect()
}
