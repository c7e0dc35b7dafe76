//! Formula-text structure analysis.
//!
//! Derives a biotic probability from the carbon and hydrogen counts of a
//! raw formula string, boosted by amino-acid and nucleotide motifs. All
//! text handling lives in [`scanner`] and [`motifs`]; this module applies
//! the tier table and bonuses from [`FormulaParams`].

mod motifs;
mod scanner;

pub use motifs::{has_amino_acid_motif, has_nucleotide_motif};
pub use scanner::{element_count, CountedRun};

use crate::params::FormulaParams;

/// Outcome of analyzing one molecular formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaAnalysis {
    pub biotic_probability: f64,
    pub is_biotic_likely: bool,
    /// Distance of the probability from coin-flip odds, rescaled to [0, 1].
    pub confidence: f64,
}

/// Scores a formula against the carbon/ratio tier table, applies motif
/// bonuses, and clamps the result to [0, 1].
///
/// The hydrogen-to-carbon ratio is zero when the carbon count is zero.
/// Tiers are tried in order and the first match wins; when none match the
/// base probability applies. Each motif bonus is added at most once. The
/// verdict compares inclusively against `biotic_cutoff`.
pub fn analyze_formula(formula: &str, params: &FormulaParams) -> FormulaAnalysis {
    let carbon = element_count(formula, b'C');
    let hydrogen = element_count(formula, b'H');
    let ratio = if carbon > 0 {
        f64::from(hydrogen) / f64::from(carbon)
    } else {
        0.0
    };

    let mut probability = params
        .tiers
        .iter()
        .find(|tier| carbon >= tier.min_carbon && ratio >= tier.min_ratio)
        .map_or(params.base_probability, |tier| tier.probability);

    if has_amino_acid_motif(formula) {
        probability = (probability + params.amino_acid_bonus).min(1.0);
    }
    if has_nucleotide_motif(formula) {
        probability = (probability + params.nucleotide_bonus).min(1.0);
    }
    let probability = probability.clamp(0.0, 1.0);

    FormulaAnalysis {
        biotic_probability: probability,
        is_biotic_likely: probability >= params.biotic_cutoff,
        confidence: (probability - 0.5).abs() * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn defaults() -> FormulaParams {
        FormulaParams::default()
    }

    #[test]
    fn glucose_hits_the_middle_tier() {
        // carbon 6, hydrogen 12, ratio 2.0; no motif fires.
        let analysis = analyze_formula("C6H12O6", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.7, 1e-12));
        assert!(analysis.is_biotic_likely);
        assert!(approx_eq(analysis.confidence, 0.4, 1e-9));
    }

    #[test]
    fn long_hydrogen_rich_chains_hit_the_top_tier() {
        // carbon 12, hydrogen 26, ratio > 1.5.
        let analysis = analyze_formula("C12H26", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.9, 1e-12));
        assert!(analysis.is_biotic_likely);
    }

    #[test]
    fn tiers_fall_through_on_ratio() {
        // carbon 12 qualifies for the top tier but ratio 1.3 does not;
        // the middle tier takes it.
        let analysis = analyze_formula("C12H16", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.7, 1e-12));
    }

    #[test]
    fn small_molecules_get_the_base_probability() {
        let analysis = analyze_formula("CO2", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.2, 1e-12));
        assert!(!analysis.is_biotic_likely);
        assert!(approx_eq(analysis.confidence, 0.6, 1e-9));
    }

    #[test]
    fn zero_carbon_formula_has_zero_ratio() {
        // An explicit C0 keeps the carbon count at zero, skipping every tier.
        let analysis = analyze_formula("C0H4", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.2, 1e-12));
    }

    #[test]
    fn amino_acid_motif_adds_its_bonus() {
        // Tier 0.5 (carbon 3, ratio 7/3) plus the amino bonus.
        let analysis = analyze_formula("C3H7N1O2", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.8, 1e-9));
        assert!(analysis.is_biotic_likely);
    }

    #[test]
    fn undigited_heteroatoms_leave_the_tier_score() {
        // Same composition written without an N count; no motif fires.
        let analysis = analyze_formula("C3H7NO2", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.5, 1e-12));
        assert!(!analysis.is_biotic_likely);
        assert!(approx_eq(analysis.confidence, 0.0, 1e-9));
    }

    #[test]
    fn both_motifs_saturate_at_one() {
        // ATP: top tier 0.9, then amino and nucleotide bonuses cap at 1.0.
        let analysis = analyze_formula("C10H16N5O13P3", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 1.0, 1e-12));
        assert!(analysis.is_biotic_likely);
        assert!(approx_eq(analysis.confidence, 1.0, 1e-9));
    }

    #[test]
    fn nucleobase_names_boost_textual_descriptors() {
        // No counted atoms: both counts default to 1, ratio 1.0, base tier.
        let analysis = analyze_formula("adenine", &defaults());
        assert!(approx_eq(analysis.biotic_probability, 0.6, 1e-9));
        assert!(!analysis.is_biotic_likely);
    }

    #[test]
    fn verdict_boundary_is_inclusive() {
        // The glucose case lands exactly on the 0.7 cutoff and is likely.
        let analysis = analyze_formula("C6H12O6", &defaults());
        assert!(analysis.is_biotic_likely);
    }

    #[test]
    fn analysis_is_idempotent() {
        let params = defaults();
        let first = analyze_formula("C6H12O6", &params);
        let second = analyze_formula("C6H12O6", &params);
        assert_eq!(first, second);
    }
}
