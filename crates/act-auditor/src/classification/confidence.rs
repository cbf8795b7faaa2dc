use super::domain::RiskTier;

/// Heuristic confidence for a classification, as an explicit lookup cascade.
///
/// The cutoffs are policy decisions and are asserted exactly by the test
/// suite; do not fold them into a formula.
pub(crate) fn score(
    tier: RiskTier,
    total_matches: usize,
    declared_flags: usize,
    keyword_matches: usize,
    prohibited_weight: Option<f64>,
) -> f64 {
    match tier {
        // A prohibited pattern carries its own weight, never below 0.95.
        RiskTier::Prohibited => prohibited_weight.unwrap_or(1.0).clamp(0.95, 1.0),
        RiskTier::High => {
            if keyword_matches >= 2 && declared_flags >= 1 {
                0.95
            } else if keyword_matches >= 1 && declared_flags >= 1 {
                0.85
            } else if declared_flags >= 2 {
                0.80
            } else if declared_flags >= 1 {
                0.75
            } else {
                0.70
            }
        }
        RiskTier::Limited => {
            if total_matches > 0 {
                0.70
            } else {
                0.60
            }
        }
        RiskTier::Minimal => 0.50,
    }
}
