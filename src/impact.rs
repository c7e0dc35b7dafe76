//! Impact-driven organic synthesis simulation.
//!
//! A meteorite impact deposits enough energy to drive gas-phase chemistry
//! in the target material. The simulator maps one [`ImpactEvent`] onto the
//! formation pathways the event enables and the alkane series it could
//! plausibly synthesize. Every threshold lives in [`ImpactParams`].

use std::fmt;

use crate::model::event::ImpactEvent;
use crate::model::types::Alkane;
use crate::params::{default_params, ImpactParams};

/// Synthesis and alteration routes available during an impact event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationPathway {
    ShockSynthesis,
    VerticalCratering,
    ObliqueDeformation,
    OrganicGeneration,
    ThermalDecomposition,
}

impl FormationPathway {
    pub fn label(&self) -> &'static str {
        match self {
            FormationPathway::ShockSynthesis => "High-energy shock synthesis",
            FormationPathway::VerticalCratering => "Vertical impact cratering",
            FormationPathway::ObliqueDeformation => "Oblique impact deformation",
            FormationPathway::OrganicGeneration => "Organic compound generation",
            FormationPathway::ThermalDecomposition => "Thermal decomposition",
        }
    }
}

impl fmt::Display for FormationPathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps one impact event onto formation pathways and candidate molecules.
///
/// The event and parameters are fixed at construction; both query methods
/// are pure and can be called any number of times.
#[derive(Debug, Clone)]
pub struct ImpactSimulator {
    event: ImpactEvent,
    params: ImpactParams,
}

impl ImpactSimulator {
    pub fn new(event: ImpactEvent) -> Self {
        Self::with_params(event, default_params().impact.clone())
    }

    pub fn with_params(event: ImpactEvent, params: ImpactParams) -> Self {
        Self { event, params }
    }

    pub fn event(&self) -> &ImpactEvent {
        &self.event
    }

    /// Formation pathways enabled by the event, in fixed order.
    ///
    /// The angle check contributes exactly one of the cratering entries,
    /// so the list is never empty. All velocity comparisons are strict.
    pub fn formation_pathways(&self) -> Vec<FormationPathway> {
        let mut pathways = Vec::new();

        if self.event.velocity > self.params.shock_velocity {
            pathways.push(FormationPathway::ShockSynthesis);
        }

        if self.event.angle < self.params.vertical_angle {
            pathways.push(FormationPathway::VerticalCratering);
        } else {
            pathways.push(FormationPathway::ObliqueDeformation);
        }

        if self
            .event
            .composition
            .contains(&self.params.carbonaceous_marker)
        {
            pathways.push(FormationPathway::OrganicGeneration);
        }

        if self.event.velocity > self.params.thermal_velocity {
            pathways.push(FormationPathway::ThermalDecomposition);
        }

        pathways
    }

    /// Alkanes the event could synthesize, in fixed order: the light
    /// series from shock chemistry above each velocity threshold, then the
    /// C10 to C12 series when the target is carbonaceous.
    pub fn organic_molecules(&self) -> Vec<Alkane> {
        let mut molecules = Vec::new();

        if self.event.velocity > self.params.light_alkane_velocity {
            molecules.push(Alkane::Methane);
            molecules.push(Alkane::Ethane);
        }

        if self.event.velocity > self.params.heavy_alkane_velocity {
            molecules.push(Alkane::Propane);
            molecules.push(Alkane::Butane);
        }

        if self
            .event
            .composition
            .contains(&self.params.carbonaceous_marker)
        {
            molecules.push(Alkane::Decane);
            molecules.push(Alkane::Undecane);
            molecules.push(Alkane::Dodecane);
        }

        molecules
    }
}
