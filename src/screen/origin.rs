//! Origin classification from a compound name, weight, and complexity score.

use std::str::FromStr;

use crate::model::types::{Alkane, OriginClass};
use crate::params::OriginParams;

/// Mid-length alkanes abundant in both biological material and
/// Fischer-Tropsch-type abiotic synthesis; their names alone cannot settle
/// an origin call, so they get a dedicated complexity check first.
const AMBIGUOUS_ALKANES: [Alkane; 3] = [Alkane::Decane, Alkane::Undecane, Alkane::Dodecane];

/// Classifies a compound's likely origin.
///
/// Names in the ambiguous-alkane set (matched case-insensitively) are
/// checked against dedicated complexity/weight cutoffs first; when neither
/// cutoff fires, and for every other name, the verdict comes from
/// [`origin_score`] compared strictly against the configured cutoffs, so a
/// score landing exactly on a cutoff is [`OriginClass::Uncertain`].
pub fn classify_compound(
    name: &str,
    molecular_weight: f64,
    complexity: f64,
    params: &OriginParams,
) -> OriginClass {
    if let Ok(alkane) = Alkane::from_str(name) {
        if AMBIGUOUS_ALKANES.contains(&alkane) {
            if complexity > params.alkane_biotic_complexity
                && molecular_weight > params.alkane_biotic_weight
            {
                return OriginClass::Biotic;
            }
            if complexity < params.alkane_abiotic_complexity {
                return OriginClass::Abiotic;
            }
        }
    }

    let score = origin_score(molecular_weight, complexity, params);
    if score > params.biotic_cutoff {
        OriginClass::Biotic
    } else if score < params.abiotic_cutoff {
        OriginClass::Abiotic
    } else {
        OriginClass::Uncertain
    }
}

/// Weighted origin score: the molecular weight saturates at
/// `weight_scale`, blends with the complexity score, and the result is
/// clamped to [0, 1]. Extreme inputs clamp through rather than fail.
pub fn origin_score(molecular_weight: f64, complexity: f64, params: &OriginParams) -> f64 {
    let normalized_weight = (molecular_weight / params.weight_scale).min(1.0);
    (normalized_weight * params.weight_factor + complexity * params.complexity_factor)
        .clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn defaults() -> OriginParams {
        OriginParams::default()
    }

    #[test]
    fn complex_heavy_decane_is_biotic() {
        let class = classify_compound("decane", 150.0, 0.9, &defaults());
        assert_eq!(class, OriginClass::Biotic);
    }

    #[test]
    fn simple_decane_is_abiotic() {
        let class = classify_compound("decane", 142.28, 0.2, &defaults());
        assert_eq!(class, OriginClass::Abiotic);
    }

    #[test]
    fn alkane_names_match_case_insensitively() {
        let class = classify_compound("DECANE", 150.0, 0.9, &defaults());
        assert_eq!(class, OriginClass::Biotic);
    }

    #[test]
    fn midband_undecane_falls_through_to_the_score() {
        // Neither exception cutoff fires; 120/500 * 0.4 + 0.6 * 0.6 = 0.456.
        let class = classify_compound("undecane", 120.0, 0.6, &defaults());
        assert_eq!(class, OriginClass::Uncertain);
    }

    #[test]
    fn light_alkanes_skip_the_exception_branch() {
        // Methane parses as an alkane but is not in the ambiguous set, so
        // numbers that would satisfy the biotic exception still fall
        // through to the weighted score (0.606, uncertain).
        let class = classify_compound("methane", 150.0, 0.81, &defaults());
        assert_eq!(class, OriginClass::Uncertain);
    }

    #[test]
    fn heavy_complex_compounds_score_biotic() {
        // 400/500 * 0.4 + 0.95 * 0.6 = 0.89.
        let class = classify_compound("cholesterol", 400.0, 0.95, &defaults());
        assert_eq!(class, OriginClass::Biotic);
    }

    #[test]
    fn moderate_compounds_are_uncertain() {
        // 180.16/500 * 0.4 + 0.6 * 0.6 is roughly 0.504.
        let class = classify_compound("glucose", 180.16, 0.6, &defaults());
        assert_eq!(class, OriginClass::Uncertain);
    }

    #[test]
    fn score_saturates_at_the_weight_scale() {
        let params = defaults();
        assert!(approx_eq(
            origin_score(500.0, 0.0, &params),
            origin_score(2000.0, 0.0, &params),
            1e-12
        ));
    }

    #[test]
    fn score_is_clamped_for_extreme_inputs() {
        let params = defaults();
        assert_eq!(origin_score(1e9, 5.0, &params), 1.0);
        assert_eq!(origin_score(-50.0, -1.0, &params), 0.0);
        let in_range = origin_score(250.0, 0.5, &params);
        assert!((0.0..=1.0).contains(&in_range));
    }

    #[test]
    fn score_landing_on_biotic_cutoff_is_uncertain() {
        // 500 saturates the weight term at exactly 0.4 and 0.5 * 0.6 rounds
        // the sum to exactly 0.7; the comparison is strict.
        let class = classify_compound("sample", 500.0, 0.5, &defaults());
        assert_eq!(class, OriginClass::Uncertain);
    }

    #[test]
    fn score_landing_on_abiotic_cutoff_is_uncertain() {
        // Zero weight leaves 0.5 * 0.6, exactly the 0.3 cutoff.
        let class = classify_compound("sample", 0.0, 0.5, &defaults());
        assert_eq!(class, OriginClass::Uncertain);
    }

    #[test]
    fn cutoff_equality_never_fires_with_custom_params() {
        let params = OriginParams {
            biotic_cutoff: 0.4,
            ..defaults()
        };
        // Saturated weight with zero complexity scores exactly 0.4.
        let class = classify_compound("sample", 500.0, 0.0, &params);
        assert_eq!(class, OriginClass::Uncertain);
    }

    #[test]
    fn classification_is_idempotent() {
        let params = defaults();
        let first = classify_compound("decane", 150.0, 0.9, &params);
        let second = classify_compound("decane", 150.0, 0.9, &params);
        assert_eq!(first, second);
    }
}
