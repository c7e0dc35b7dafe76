use anyhow::Result;

use biosift::{ImpactEvent, ImpactSimulator};

use crate::cli::ImpactArgs;
use crate::display::{
    print_impact_summary, print_molecules, print_pathways, Context as DisplayContext,
};
use crate::input::ImpactReport;

pub fn run_impact(args: ImpactArgs, ctx: DisplayContext) -> Result<()> {
    let params = super::load_heuristic_params(args.io.params.as_deref())?;

    let event = ImpactEvent::new(
        args.event.velocity,
        args.event.angle,
        args.event.composition,
    );
    let simulator = ImpactSimulator::with_params(event, params.impact);

    let pathways = simulator.formation_pathways();
    let molecules = simulator.organic_molecules();

    if ctx.interactive {
        print_impact_summary(simulator.event());
        print_pathways(&pathways);
        print_molecules(&molecules);
    }

    // Report fields come from the simulator's event, so out-of-range CLI
    // values show up clamped.
    let event = simulator.event();
    let report = ImpactReport {
        velocity: event.velocity,
        angle: event.angle,
        composition: event.composition.clone(),
        pathways: pathways
            .iter()
            .map(|pathway| pathway.label().to_string())
            .collect(),
        molecules: molecules
            .iter()
            .map(|alkane| alkane.name().to_string())
            .collect(),
    };

    super::write_report(args.io.output.as_deref(), &report)
}
