use super::types::Origin;

/// A detected organic compound as reported by the upstream instrument or
/// sample database. Pure value record; the screening heuristics never
/// mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    pub name: String,
    pub formula: String,
    pub molecular_weight: f64, // g/mol
    pub structure: String,
    pub origin: Option<Origin>,
    pub detection_method: String,
    pub confidence: Option<f64>,
}

impl Compound {
    pub fn new(
        name: impl Into<String>,
        formula: impl Into<String>,
        molecular_weight: f64,
        structure: impl Into<String>,
        detection_method: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            molecular_weight,
            structure: structure.into(),
            origin: None,
            detection_method: detection_method.into(),
            confidence: None,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Confidence is a [0, 1] score; out-of-range values are clamped.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }
}

/// Structural summary counts used by the biotic-probability estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralProfile {
    pub molecular_weight: f64, // g/mol
    pub carbon_count: u32,
    pub heteroatom_count: u32,
    pub ring_count: u32,
}

impl StructuralProfile {
    pub fn new(
        molecular_weight: f64,
        carbon_count: u32,
        heteroatom_count: u32,
        ring_count: u32,
    ) -> Self {
        Self {
            molecular_weight,
            carbon_count,
            heteroatom_count,
            ring_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_new_leaves_optional_fields_empty() {
        let c = Compound::new("glucose", "C6H12O6", 180.16, "pyranose ring", "GC-MS");
        assert_eq!(c.name, "glucose");
        assert_eq!(c.formula, "C6H12O6");
        assert!(c.origin.is_none());
        assert!(c.confidence.is_none());
    }

    #[test]
    fn compound_builders_set_optional_fields() {
        let c = Compound::new("hexane", "C6H14", 86.18, "straight chain", "LC-MS")
            .with_origin(Origin::Unknown)
            .with_confidence(0.85);
        assert_eq!(c.origin, Some(Origin::Unknown));
        assert_eq!(c.confidence, Some(0.85));
    }

    #[test]
    fn compound_confidence_is_clamped() {
        let high = Compound::new("a", "C", 1.0, "", "").with_confidence(1.7);
        let low = Compound::new("b", "C", 1.0, "", "").with_confidence(-0.2);
        assert_eq!(high.confidence, Some(1.0));
        assert_eq!(low.confidence, Some(0.0));
    }

    #[test]
    fn structural_profile_holds_counts() {
        let profile = StructuralProfile::new(300.0, 8, 2, 1);
        assert_eq!(profile.carbon_count, 8);
        assert_eq!(profile.heteroatom_count, 2);
        assert_eq!(profile.ring_count, 1);
    }
}
