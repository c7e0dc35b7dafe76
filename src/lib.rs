//! A pure Rust library for heuristic origin screening of organic compounds
//! in planetary samples. It combines independent biotic/abiotic screens over
//! compound names, structural counts, and raw formula text with a simulator
//! for impact-driven organic synthesis.
//!
//! # Features
//!
//! - **Origin classification** — Weighted name/weight/complexity scoring
//!   with a dedicated check for the ambiguous C10–C12 alkane series
//! - **Probability estimation** — Additive biotic-probability rules over
//!   carbon, heteroatom, ring, and molecular-weight evidence
//! - **Formula analysis** — Byte-level formula scanning with amino-acid and
//!   nucleotide motif detection, no chemistry engine required
//! - **Impact simulation** — Formation pathways and candidate alkanes for a
//!   given impact velocity, angle, and target composition
//! - **Tunable heuristics** — Every cutoff and bonus lives in a TOML-backed
//!   parameter set with sensible defaults
//!
//! # Quick Start
//!
//! Each screen is a pure function family parameterized by its group in
//! [`HeuristicParams`]; the simulator wraps one [`ImpactEvent`]:
//!
//! ```
//! use biosift::params::default_params;
//! use biosift::screen::{formula, origin, probability};
//! use biosift::{ImpactEvent, ImpactSimulator, OriginClass, StructuralProfile};
//!
//! let params = default_params();
//!
//! // Simulate a fast, steep impact into carbonaceous material.
//! let simulator = ImpactSimulator::new(ImpactEvent::new(35.0, 10.0, "carbonaceous chondrite"));
//!
//! let pathways = simulator.formation_pathways();
//! assert_eq!(pathways.len(), 4);
//! assert_eq!(pathways[0].label(), "High-energy shock synthesis");
//!
//! let molecules = simulator.organic_molecules();
//! assert_eq!(molecules.len(), 7);
//! assert_eq!(molecules[0].name(), "methane");
//! assert_eq!(molecules[0].formula(), "CH4");
//!
//! // Screen a detected compound three independent ways.
//! let analysis = formula::analyze_formula("C6H12O6", &params.formula);
//! assert!(analysis.is_biotic_likely);
//!
//! let profile = StructuralProfile::new(300.0, 8, 2, 1);
//! let p = probability::biotic_probability(&profile, &params.probability);
//! assert_eq!(
//!     probability::classify_probability(p, &params.probability),
//!     OriginClass::Biotic
//! );
//!
//! let verdict = origin::classify_compound("decane", 150.0, 0.9, &params.origin);
//! assert_eq!(verdict, OriginClass::Biotic);
//! ```
//!
//! # Module Organization
//!
//! - [`screen`] — The three origin screens (name/score, counts, formula text)
//! - [`impact`] — Impact event simulation
//! - [`params`] — Heuristic constants and TOML overrides
//! - [`model`] — Value records and shared vocabulary
//!
//! # Data Types
//!
//! ## Inputs
//!
//! - [`Compound`] — Detected-compound record (name, formula, weight, ...)
//! - [`StructuralProfile`] — Counts consumed by the probability estimator
//! - [`ImpactEvent`] — Velocity, angle, and composition of one impact
//!
//! ## Results
//!
//! - [`OriginClass`] — Biotic / abiotic / uncertain verdict
//! - [`ClassificationResult`] — Probability plus verdict per profile
//! - [`FormulaAnalysis`] — Probability, verdict, and confidence per formula
//! - [`FormationPathway`] — Labeled synthesis/alteration routes
//! - [`Alkane`] — The alkane series the heuristics reason about
//!
//! ## Configuration
//!
//! - [`HeuristicParams`] — Aggregate of all four per-component groups
//! - [`params::OriginParams`] — Classifier weights, cutoffs, exception rules
//! - [`params::ProbabilityParams`] — Additive rule bonuses and cutoffs
//! - [`params::ImpactParams`] — Velocity/angle thresholds and the
//!   carbonaceous marker
//! - [`params::FormulaParams`] — Ratio tier table and motif bonuses

mod error;

pub mod impact;
pub mod model;
pub mod params;
pub mod screen;

pub use error::Error;

pub use model::compound::{Compound, StructuralProfile};
pub use model::event::ImpactEvent;
pub use model::types::{
    Alkane, Origin, OriginClass, ParseAlkaneError, ParseOriginClassError, ParseOriginError,
};

pub use impact::{FormationPathway, ImpactSimulator};
pub use params::{default_params, load_params, HeuristicParams};
pub use screen::{ClassificationResult, FormulaAnalysis};
