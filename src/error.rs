//! Library error type.
//!
//! The screening heuristics themselves never fail: malformed numeric
//! inputs clamp into range and absent atom-count tokens fall back to a
//! count of one. The only fallible library operation is parsing a custom
//! heuristic parameter file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse a custom heuristic parameters TOML document.
    #[error("failed to parse heuristic parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),
}
