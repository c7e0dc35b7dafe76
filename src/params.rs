//! Tunable constants behind every heuristic, grouped per component.
//!
//! Defaults reproduce the published screening rules; a custom TOML
//! document may override any subset of fields via [`load_params`].

use serde::Deserialize;
use std::sync::OnceLock;

use crate::error::Error;

static DEFAULT_PARAMS: OnceLock<HeuristicParams> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeuristicParams {
    #[serde(default)]
    pub origin: OriginParams,
    #[serde(default)]
    pub probability: ProbabilityParams,
    #[serde(default)]
    pub impact: ImpactParams,
    #[serde(default)]
    pub formula: FormulaParams,
}

/// Constants for the name/weight/complexity origin classifier.
///
/// `biotic_cutoff` and `abiotic_cutoff` are compared strictly (`>` / `<`);
/// a score landing exactly on either cutoff is uncertain.
#[derive(Debug, Clone, Deserialize)]
pub struct OriginParams {
    #[serde(default = "default_weight_scale")]
    pub weight_scale: f64,
    #[serde(default = "default_weight_factor")]
    pub weight_factor: f64,
    #[serde(default = "default_complexity_factor")]
    pub complexity_factor: f64,
    #[serde(default = "default_origin_biotic_cutoff")]
    pub biotic_cutoff: f64,
    #[serde(default = "default_origin_abiotic_cutoff")]
    pub abiotic_cutoff: f64,
    #[serde(default = "default_alkane_biotic_complexity")]
    pub alkane_biotic_complexity: f64,
    #[serde(default = "default_alkane_biotic_weight")]
    pub alkane_biotic_weight: f64,
    #[serde(default = "default_alkane_abiotic_complexity")]
    pub alkane_abiotic_complexity: f64,
}

fn default_weight_scale() -> f64 {
    500.0
}
fn default_weight_factor() -> f64 {
    0.4
}
fn default_complexity_factor() -> f64 {
    0.6
}
fn default_origin_biotic_cutoff() -> f64 {
    0.7
}
fn default_origin_abiotic_cutoff() -> f64 {
    0.3
}
fn default_alkane_biotic_complexity() -> f64 {
    0.8
}
fn default_alkane_biotic_weight() -> f64 {
    140.0
}
fn default_alkane_abiotic_complexity() -> f64 {
    0.5
}

impl Default for OriginParams {
    fn default() -> Self {
        Self {
            weight_scale: default_weight_scale(),
            weight_factor: default_weight_factor(),
            complexity_factor: default_complexity_factor(),
            biotic_cutoff: default_origin_biotic_cutoff(),
            abiotic_cutoff: default_origin_abiotic_cutoff(),
            alkane_biotic_complexity: default_alkane_biotic_complexity(),
            alkane_biotic_weight: default_alkane_biotic_weight(),
            alkane_abiotic_complexity: default_alkane_abiotic_complexity(),
        }
    }
}

/// Additive rule weights for the structural biotic-probability estimator.
///
/// Unlike [`OriginParams`], the cutoffs here are inclusive (`>=` / `<=`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProbabilityParams {
    #[serde(default = "default_carbon_rich_min")]
    pub carbon_rich_min: u32,
    #[serde(default = "default_carbon_rich_bonus")]
    pub carbon_rich_bonus: f64,
    #[serde(default = "default_carbon_moderate_min")]
    pub carbon_moderate_min: u32,
    #[serde(default = "default_carbon_moderate_bonus")]
    pub carbon_moderate_bonus: f64,
    #[serde(default = "default_heteroatom_rich_min")]
    pub heteroatom_rich_min: u32,
    #[serde(default = "default_heteroatom_rich_bonus")]
    pub heteroatom_rich_bonus: f64,
    #[serde(default = "default_heteroatom_single_bonus")]
    pub heteroatom_single_bonus: f64,
    #[serde(default = "default_ring_bonus")]
    pub ring_bonus: f64,
    #[serde(default = "default_midweight_low")]
    pub midweight_low: f64,
    #[serde(default = "default_midweight_high")]
    pub midweight_high: f64,
    #[serde(default = "default_midweight_bonus")]
    pub midweight_bonus: f64,
    #[serde(default = "default_heavyweight_penalty")]
    pub heavyweight_penalty: f64,
    #[serde(default = "default_probability_biotic_cutoff")]
    pub biotic_cutoff: f64,
    #[serde(default = "default_probability_abiotic_cutoff")]
    pub abiotic_cutoff: f64,
}

fn default_carbon_rich_min() -> u32 {
    6
}
fn default_carbon_rich_bonus() -> f64 {
    0.30
}
fn default_carbon_moderate_min() -> u32 {
    3
}
fn default_carbon_moderate_bonus() -> f64 {
    0.15
}
fn default_heteroatom_rich_min() -> u32 {
    2
}
fn default_heteroatom_rich_bonus() -> f64 {
    0.25
}
fn default_heteroatom_single_bonus() -> f64 {
    0.10
}
fn default_ring_bonus() -> f64 {
    0.20
}
fn default_midweight_low() -> f64 {
    100.0
}
fn default_midweight_high() -> f64 {
    500.0
}
fn default_midweight_bonus() -> f64 {
    0.15
}
fn default_heavyweight_penalty() -> f64 {
    0.10
}
fn default_probability_biotic_cutoff() -> f64 {
    0.7
}
fn default_probability_abiotic_cutoff() -> f64 {
    0.3
}

impl Default for ProbabilityParams {
    fn default() -> Self {
        Self {
            carbon_rich_min: default_carbon_rich_min(),
            carbon_rich_bonus: default_carbon_rich_bonus(),
            carbon_moderate_min: default_carbon_moderate_min(),
            carbon_moderate_bonus: default_carbon_moderate_bonus(),
            heteroatom_rich_min: default_heteroatom_rich_min(),
            heteroatom_rich_bonus: default_heteroatom_rich_bonus(),
            heteroatom_single_bonus: default_heteroatom_single_bonus(),
            ring_bonus: default_ring_bonus(),
            midweight_low: default_midweight_low(),
            midweight_high: default_midweight_high(),
            midweight_bonus: default_midweight_bonus(),
            heavyweight_penalty: default_heavyweight_penalty(),
            biotic_cutoff: default_probability_biotic_cutoff(),
            abiotic_cutoff: default_probability_abiotic_cutoff(),
        }
    }
}

/// Branch thresholds for the impact formation simulator. Velocities are
/// km/s, the angle is degrees from vertical.
#[derive(Debug, Clone, Deserialize)]
pub struct ImpactParams {
    #[serde(default = "default_shock_velocity")]
    pub shock_velocity: f64,
    #[serde(default = "default_vertical_angle")]
    pub vertical_angle: f64,
    #[serde(default = "default_thermal_velocity")]
    pub thermal_velocity: f64,
    #[serde(default = "default_light_alkane_velocity")]
    pub light_alkane_velocity: f64,
    #[serde(default = "default_heavy_alkane_velocity")]
    pub heavy_alkane_velocity: f64,
    /// Substring that marks a carbon-bearing target; matched case-sensitively.
    #[serde(default = "default_carbonaceous_marker")]
    pub carbonaceous_marker: String,
}

fn default_shock_velocity() -> f64 {
    20.0
}
fn default_vertical_angle() -> f64 {
    15.0
}
fn default_thermal_velocity() -> f64 {
    30.0
}
fn default_light_alkane_velocity() -> f64 {
    25.0
}
fn default_heavy_alkane_velocity() -> f64 {
    30.0
}
fn default_carbonaceous_marker() -> String {
    "carbonaceous".to_string()
}

impl Default for ImpactParams {
    fn default() -> Self {
        Self {
            shock_velocity: default_shock_velocity(),
            vertical_angle: default_vertical_angle(),
            thermal_velocity: default_thermal_velocity(),
            light_alkane_velocity: default_light_alkane_velocity(),
            heavy_alkane_velocity: default_heavy_alkane_velocity(),
            carbonaceous_marker: default_carbonaceous_marker(),
        }
    }
}

/// One row of the carbon/ratio tier table: a formula with at least
/// `min_carbon` carbons and an H/C ratio of at least `min_ratio` scores
/// `probability`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RatioTier {
    pub min_carbon: u32,
    pub min_ratio: f64,
    pub probability: f64,
}

/// Constants for the formula structure analyzer. Tiers are evaluated in
/// order, first match wins; `base_probability` applies when none match.
#[derive(Debug, Clone, Deserialize)]
pub struct FormulaParams {
    #[serde(default = "default_formula_tiers")]
    pub tiers: Vec<RatioTier>,
    #[serde(default = "default_base_probability")]
    pub base_probability: f64,
    #[serde(default = "default_amino_acid_bonus")]
    pub amino_acid_bonus: f64,
    #[serde(default = "default_nucleotide_bonus")]
    pub nucleotide_bonus: f64,
    #[serde(default = "default_formula_biotic_cutoff")]
    pub biotic_cutoff: f64,
}

fn default_formula_tiers() -> Vec<RatioTier> {
    vec![
        RatioTier {
            min_carbon: 10,
            min_ratio: 1.5,
            probability: 0.9,
        },
        RatioTier {
            min_carbon: 5,
            min_ratio: 1.2,
            probability: 0.7,
        },
        RatioTier {
            min_carbon: 3,
            min_ratio: 1.0,
            probability: 0.5,
        },
    ]
}
fn default_base_probability() -> f64 {
    0.2
}
fn default_amino_acid_bonus() -> f64 {
    0.3
}
fn default_nucleotide_bonus() -> f64 {
    0.4
}
fn default_formula_biotic_cutoff() -> f64 {
    0.7
}

impl Default for FormulaParams {
    fn default() -> Self {
        Self {
            tiers: default_formula_tiers(),
            base_probability: default_base_probability(),
            amino_acid_bonus: default_amino_acid_bonus(),
            nucleotide_bonus: default_nucleotide_bonus(),
            biotic_cutoff: default_formula_biotic_cutoff(),
        }
    }
}

/// Resolves heuristic parameters: a custom TOML document when given,
/// otherwise the built-in defaults. Custom documents may override any
/// subset of fields; everything omitted keeps its default.
pub fn load_params(custom_toml: Option<&str>) -> Result<HeuristicParams, Error> {
    match custom_toml {
        Some(text) => {
            let params: HeuristicParams = toml::from_str(text)?;
            Ok(params)
        }
        None => Ok(default_params().clone()),
    }
}

pub fn default_params() -> &'static HeuristicParams {
    DEFAULT_PARAMS.get_or_init(HeuristicParams::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn defaults_reproduce_published_constants() {
        let params = HeuristicParams::default();

        assert!(approx_eq(params.origin.weight_scale, 500.0, 1e-12));
        assert!(approx_eq(params.origin.weight_factor, 0.4, 1e-12));
        assert!(approx_eq(params.origin.complexity_factor, 0.6, 1e-12));
        assert!(approx_eq(params.origin.biotic_cutoff, 0.7, 1e-12));
        assert!(approx_eq(params.origin.abiotic_cutoff, 0.3, 1e-12));

        assert_eq!(params.probability.carbon_rich_min, 6);
        assert_eq!(params.probability.carbon_moderate_min, 3);
        assert_eq!(params.probability.heteroatom_rich_min, 2);
        assert!(approx_eq(params.probability.ring_bonus, 0.20, 1e-12));
        assert!(approx_eq(params.probability.heavyweight_penalty, 0.10, 1e-12));

        assert!(approx_eq(params.impact.shock_velocity, 20.0, 1e-12));
        assert!(approx_eq(params.impact.vertical_angle, 15.0, 1e-12));
        assert_eq!(params.impact.carbonaceous_marker, "carbonaceous");

        assert_eq!(params.formula.tiers.len(), 3);
        assert_eq!(params.formula.tiers[0].min_carbon, 10);
        assert!(approx_eq(params.formula.base_probability, 0.2, 1e-12));
    }

    #[test]
    fn load_params_none_matches_defaults() {
        let loaded = load_params(None).unwrap();
        assert!(approx_eq(
            loaded.origin.weight_scale,
            HeuristicParams::default().origin.weight_scale,
            1e-12
        ));
    }

    #[test]
    fn custom_toml_overrides_a_subset() {
        let toml = r#"
            [origin]
            biotic_cutoff = 0.8

            [impact]
            shock_velocity = 18.0
        "#;
        let params = load_params(Some(toml)).unwrap();

        assert!(approx_eq(params.origin.biotic_cutoff, 0.8, 1e-12));
        // untouched fields keep their defaults
        assert!(approx_eq(params.origin.abiotic_cutoff, 0.3, 1e-12));
        assert!(approx_eq(params.impact.shock_velocity, 18.0, 1e-12));
        assert!(approx_eq(params.impact.thermal_velocity, 30.0, 1e-12));
        assert_eq!(params.formula.tiers.len(), 3);
    }

    #[test]
    fn custom_tier_table_replaces_defaults_in_order() {
        let toml = r#"
            [[formula.tiers]]
            min_carbon = 8
            min_ratio = 1.4
            probability = 0.85

            [[formula.tiers]]
            min_carbon = 2
            min_ratio = 0.9
            probability = 0.4
        "#;
        let params = load_params(Some(toml)).unwrap();
        assert_eq!(params.formula.tiers.len(), 2);
        assert_eq!(params.formula.tiers[0].min_carbon, 8);
        assert_eq!(params.formula.tiers[1].min_carbon, 2);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let params = load_params(Some("")).unwrap();
        assert!(approx_eq(params.probability.biotic_cutoff, 0.7, 1e-12));
    }

    #[test]
    fn invalid_toml_surfaces_parameter_parse_error() {
        let result = load_params(Some("not [[ valid toml"));
        assert!(matches!(result, Err(Error::ParameterParse(_))));
    }

    #[test]
    fn default_params_accessor_is_stable() {
        let a = default_params();
        let b = default_params();
        assert!(std::ptr::eq(a, b));
    }
}
