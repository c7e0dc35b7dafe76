//! TOML records read and written by the CLI. The library model stays
//! serde-free; conversions happen here.

use serde::{Deserialize, Serialize};

use biosift::{Compound, Origin, StructuralProfile};

/// A compound list document: one `[[compounds]]` block per entry.
#[derive(Debug, Deserialize)]
pub struct CompoundFile {
    #[serde(default)]
    pub compounds: Vec<CompoundSpec>,
}

/// One `[[compounds]]` entry.
///
/// `complexity` enables the name/weight/complexity classifier for the
/// entry; the three structural counts together enable the probability
/// estimator. Formula analysis always runs.
#[derive(Debug, Deserialize)]
pub struct CompoundSpec {
    pub name: String,
    pub formula: String,
    pub molecular_weight: f64,
    #[serde(default)]
    pub structure: String,
    #[serde(default)]
    pub detection_method: String,
    pub origin: Option<OriginField>,
    pub confidence: Option<f64>,
    pub complexity: Option<f64>,
    pub carbon_count: Option<u32>,
    pub heteroatom_count: Option<u32>,
    pub ring_count: Option<u32>,
}

impl CompoundSpec {
    pub fn to_compound(&self) -> Compound {
        let mut compound = Compound::new(
            self.name.as_str(),
            self.formula.as_str(),
            self.molecular_weight,
            self.structure.as_str(),
            self.detection_method.as_str(),
        );
        if let Some(origin) = self.origin {
            compound = compound.with_origin(origin.into());
        }
        if let Some(confidence) = self.confidence {
            compound = compound.with_confidence(confidence);
        }
        compound
    }

    /// The estimator's profile, present only when all three counts are.
    pub fn structural_profile(&self) -> Option<StructuralProfile> {
        match (self.carbon_count, self.heteroatom_count, self.ring_count) {
            (Some(carbons), Some(heteroatoms), Some(rings)) => Some(StructuralProfile::new(
                self.molecular_weight,
                carbons,
                heteroatoms,
                rings,
            )),
            _ => None,
        }
    }
}

/// Origin tag as written in input files.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginField {
    Biotic,
    Abiotic,
    Unknown,
}

impl From<OriginField> for Origin {
    fn from(field: OriginField) -> Self {
        match field {
            OriginField::Biotic => Origin::Biotic,
            OriginField::Abiotic => Origin::Abiotic,
            OriginField::Unknown => Origin::Unknown,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScreenReport {
    pub compounds: Vec<CompoundReport>,
}

#[derive(Debug, Serialize)]
pub struct CompoundReport {
    pub name: String,
    pub formula: String,
    /// Origin tag the input declared, for comparison against the verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_origin: Option<String>,
    /// Verdict of the name/weight/complexity classifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_class: Option<String>,
    pub formula_analysis: FormulaReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<EstimateReport>,
}

#[derive(Debug, Serialize)]
pub struct FormulaReport {
    pub biotic_probability: f64,
    pub is_biotic_likely: bool,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct EstimateReport {
    pub probability: f64,
    pub classification: String,
}

#[derive(Debug, Serialize)]
pub struct ImpactReport {
    pub velocity: f64,
    pub angle: f64,
    pub composition: String,
    pub pathways: Vec<String>,
    pub molecules: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_entry_parses() {
        let text = r#"
            [[compounds]]
            name = "glycine"
            formula = "C2H5NO2"
            molecular_weight = 75.07
            structure = "amino acid backbone"
            detection_method = "GC-MS"
            origin = "unknown"
            confidence = 0.9
            complexity = 0.85
            carbon_count = 2
            heteroatom_count = 3
            ring_count = 0
        "#;
        let file: CompoundFile = toml::from_str(text).unwrap();
        assert_eq!(file.compounds.len(), 1);

        let spec = &file.compounds[0];
        assert_eq!(spec.name, "glycine");
        assert_eq!(spec.complexity, Some(0.85));
        assert!(spec.structural_profile().is_some());

        let compound = spec.to_compound();
        assert_eq!(compound.origin, Some(Origin::Unknown));
        assert_eq!(compound.confidence, Some(0.9));
    }

    #[test]
    fn minimal_entry_parses() {
        let text = r#"
            [[compounds]]
            name = "methane"
            formula = "CH4"
            molecular_weight = 16.04
        "#;
        let file: CompoundFile = toml::from_str(text).unwrap();
        let spec = &file.compounds[0];

        assert!(spec.complexity.is_none());
        assert!(spec.structural_profile().is_none());
        assert_eq!(spec.to_compound().structure, "");
    }

    #[test]
    fn partial_counts_disable_the_profile() {
        let text = r#"
            [[compounds]]
            name = "benzene"
            formula = "C6H6"
            molecular_weight = 78.11
            carbon_count = 6
            ring_count = 1
        "#;
        let file: CompoundFile = toml::from_str(text).unwrap();
        assert!(file.compounds[0].structural_profile().is_none());
    }

    #[test]
    fn unknown_origin_tag_is_rejected() {
        let text = r#"
            [[compounds]]
            name = "x"
            formula = "C"
            molecular_weight = 12.0
            origin = "martian"
        "#;
        assert!(toml::from_str::<CompoundFile>(text).is_err());
    }

    #[test]
    fn empty_document_has_no_compounds() {
        let file: CompoundFile = toml::from_str("").unwrap();
        assert!(file.compounds.is_empty());
    }
}
