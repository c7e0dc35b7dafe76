//! Heuristic origin-screening components.
//!
//! Three independent screens, each a pure function family parameterized by
//! its [`crate::params`] group:
//!
//! - [`origin`] – name/weight/complexity classifier with an alkane exception list.
//! - [`probability`] – additive biotic-probability estimator over structural counts.
//! - [`formula`] – formula-text analyzer built on a byte-level scanner.
//!
//! None of the screens can fail and none holds state; calling any of them
//! twice with the same inputs yields the same outputs.

pub mod formula;
pub mod origin;
pub mod probability;

pub use formula::FormulaAnalysis;
pub use probability::ClassificationResult;
