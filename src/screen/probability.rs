//! Additive biotic-probability estimation from structural counts.

use crate::model::compound::StructuralProfile;
use crate::model::types::OriginClass;
use crate::params::ProbabilityParams;

/// Probability and verdict for one screened profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    pub probability: f64,
    pub classification: OriginClass,
}

/// Accumulates the configured rule bonuses over a structural profile and
/// clamps the sum to [0, 1].
///
/// Carbon and heteroatom counts each contribute at most one bonus (the
/// richer band wins); a lone heteroatom gets the single-atom bonus. Any
/// ring contributes once. Mid-band molecular weights earn a bonus, weights
/// at or past the upper bound pay a penalty.
pub fn biotic_probability(profile: &StructuralProfile, params: &ProbabilityParams) -> f64 {
    let mut probability = 0.0;

    if profile.carbon_count >= params.carbon_rich_min {
        probability += params.carbon_rich_bonus;
    } else if profile.carbon_count >= params.carbon_moderate_min {
        probability += params.carbon_moderate_bonus;
    }

    if profile.heteroatom_count >= params.heteroatom_rich_min {
        probability += params.heteroatom_rich_bonus;
    } else if profile.heteroatom_count == 1 {
        probability += params.heteroatom_single_bonus;
    }

    if profile.ring_count >= 1 {
        probability += params.ring_bonus;
    }

    if profile.molecular_weight > params.midweight_low
        && profile.molecular_weight < params.midweight_high
    {
        probability += params.midweight_bonus;
    } else if profile.molecular_weight >= params.midweight_high {
        probability -= params.heavyweight_penalty;
    }

    probability.clamp(0.0, 1.0)
}

/// Turns a probability into a verdict. Both cutoffs are inclusive here:
/// landing exactly on `biotic_cutoff` is biotic, exactly on
/// `abiotic_cutoff` is abiotic.
pub fn classify_probability(probability: f64, params: &ProbabilityParams) -> OriginClass {
    if probability >= params.biotic_cutoff {
        OriginClass::Biotic
    } else if probability <= params.abiotic_cutoff {
        OriginClass::Abiotic
    } else {
        OriginClass::Uncertain
    }
}

/// Screens a batch of profiles, preserving input order.
pub fn analyze_profiles(
    profiles: &[StructuralProfile],
    params: &ProbabilityParams,
) -> Vec<ClassificationResult> {
    profiles
        .iter()
        .map(|profile| {
            let probability = biotic_probability(profile, params);
            ClassificationResult {
                probability,
                classification: classify_probability(probability, params),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn make_profile(weight: f64, carbons: u32, heteroatoms: u32, rings: u32) -> StructuralProfile {
        StructuralProfile::new(weight, carbons, heteroatoms, rings)
    }

    fn defaults() -> ProbabilityParams {
        ProbabilityParams::default()
    }

    #[test]
    fn rich_profile_sums_to_ninety_percent() {
        // 0.30 (carbon) + 0.25 (heteroatoms) + 0.20 (ring) + 0.15 (weight).
        let p = biotic_probability(&make_profile(300.0, 8, 2, 1), &defaults());
        assert!(approx_eq(p, 0.90, 1e-9));
        assert_eq!(classify_probability(p, &defaults()), OriginClass::Biotic);
    }

    #[test]
    fn bare_profile_scores_zero() {
        let p = biotic_probability(&make_profile(50.0, 0, 0, 0), &defaults());
        assert_eq!(p, 0.0);
        assert_eq!(classify_probability(p, &defaults()), OriginClass::Abiotic);
    }

    #[test]
    fn moderate_bands_use_the_smaller_bonuses() {
        // 0.15 (three carbons) + 0.10 (single heteroatom).
        let p = biotic_probability(&make_profile(80.0, 3, 1, 0), &defaults());
        assert!(approx_eq(p, 0.25, 1e-9));
    }

    #[test]
    fn heavyweight_penalty_clamps_at_zero() {
        let p = biotic_probability(&make_profile(600.0, 0, 0, 0), &defaults());
        assert_eq!(p, 0.0);
    }

    #[test]
    fn weight_bands_are_half_open() {
        let params = defaults();
        // Exactly 100 earns nothing; exactly 500 pays the penalty.
        let at_low = biotic_probability(&make_profile(100.0, 6, 0, 0), &params);
        let at_high = biotic_probability(&make_profile(500.0, 6, 0, 0), &params);
        assert!(approx_eq(at_low, 0.30, 1e-9));
        assert!(approx_eq(at_high, 0.20, 1e-9));
    }

    #[test]
    fn cutoffs_are_inclusive() {
        let params = defaults();
        assert_eq!(classify_probability(0.7, &params), OriginClass::Biotic);
        assert_eq!(classify_probability(0.3, &params), OriginClass::Abiotic);
        assert_eq!(classify_probability(0.5, &params), OriginClass::Uncertain);
    }

    #[test]
    fn batch_analysis_preserves_order() {
        let profiles = [
            make_profile(300.0, 8, 2, 1),
            make_profile(50.0, 0, 0, 0),
            make_profile(120.0, 4, 1, 0),
        ];
        let results = analyze_profiles(&profiles, &defaults());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].classification, OriginClass::Biotic);
        assert_eq!(results[1].classification, OriginClass::Abiotic);
        // 0.15 + 0.10 + 0.15 = 0.40, between the cutoffs.
        assert_eq!(results[2].classification, OriginClass::Uncertain);
        assert!(approx_eq(results[2].probability, 0.40, 1e-9));
    }

    #[test]
    fn estimation_is_idempotent() {
        let profile = make_profile(250.0, 7, 3, 2);
        let params = defaults();
        let first = biotic_probability(&profile, &params);
        let second = biotic_probability(&profile, &params);
        assert_eq!(first, second);
    }
}
