//! Value records and shared vocabulary for the screening heuristics.
//!
//! - [`compound`] – Detected-compound records and structural summary counts.
//! - [`event`] – Impact event conditions consumed by the simulator.
//! - [`types`] – Origin tags, classification verdicts, and the alkane series.
//!
//! Everything here is a plain immutable value: records are created by the
//! caller, read by the heuristics, and never mutated or cached.

pub mod compound;
pub mod event;
pub mod types;
