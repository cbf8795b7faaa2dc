//! The deterministic risk classification engine.
//!
//! `classify` is a pure function of the caller-supplied [`SystemProfile`] and
//! the immutable [`RuleCatalog`]: no I/O, no hidden state, safe to call from
//! any number of threads concurrently. The cascade short-circuits on Article 5
//! matches; everything else aggregates evidence before the confidence
//! heuristic and the localization tables produce the final [`Verdict`].

mod cascade;
mod confidence;
mod corpus;

pub mod catalog;
pub mod domain;
pub mod locale;
pub mod router;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use catalog::{
    CatalogError, GpaiDefinition, LimitedRiskTrigger, ProhibitedPattern, RegulatedProductGroup,
    RuleCatalog, SectorRule, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES,
};
pub use domain::{DeploymentPhase, MatchedRule, RiskTier, SystemProfile, Verdict};
pub use locale::{LocaleBundle, LocaleError, Localizer};
pub use router::assessment_router;

/// Stateless classifier binding a shared rule catalog to the string tables.
pub struct ClassificationEngine {
    catalog: Arc<RuleCatalog>,
    localizer: Localizer,
}

impl ClassificationEngine {
    /// Build an engine over `catalog` with the shipped locale bundles,
    /// validating the bundles up front.
    pub fn new(catalog: Arc<RuleCatalog>) -> Result<Self, LocaleError> {
        Self::with_localizer(catalog, Localizer::builtin())
    }

    pub fn with_localizer(
        catalog: Arc<RuleCatalog>,
        localizer: Localizer,
    ) -> Result<Self, LocaleError> {
        localizer.validate()?;
        Ok(Self { catalog, localizer })
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Classify a system description into a risk tier verdict.
    ///
    /// Always returns a verdict: unsupported languages fall back to the
    /// default, and an empty catalog simply yields no keyword evidence.
    pub fn classify(&self, profile: &SystemProfile) -> Verdict {
        let language = self.catalog.resolve_language(&profile.language).to_string();
        let bundle = self.localizer.bundle(&language);
        let corpus = corpus::build(profile);

        let outcome = cascade::run(profile, &corpus, &self.catalog, bundle, &language);
        let confidence = confidence::score(
            outcome.tier,
            outcome.matched_rules.len(),
            outcome.declared_flags,
            outcome.keyword_matches,
            outcome.prohibited_weight,
        );

        tracing::debug!(
            system = %profile.name,
            tier = outcome.tier.key(),
            confidence,
            matches = outcome.matched_rules.len(),
            "classified system"
        );

        Verdict {
            tier: outcome.tier,
            tier_label: bundle.tier_label(outcome.tier).to_string(),
            confidence,
            justification: outcome.justification,
            matched_rules: outcome.matched_rules,
            obligations: bundle.obligations(outcome.tier).to_vec(),
            next_steps: bundle.next_steps(outcome.tier).to_vec(),
        }
    }
}
