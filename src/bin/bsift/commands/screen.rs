use anyhow::{bail, Context, Result};

use biosift::screen::{formula, origin, probability};
use biosift::HeuristicParams;

use crate::cli::ScreenArgs;
use crate::display::{print_screening_summary, Context as DisplayContext};
use crate::input::{
    CompoundFile, CompoundReport, CompoundSpec, EstimateReport, FormulaReport, ScreenReport,
};
use crate::io::{read_input_to_string, stdin_is_tty};

pub fn run_screen(args: ScreenArgs, ctx: DisplayContext) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: bsift screen -i <COMPOUNDS> or pipe data via stdin."
        );
    }

    let params = super::load_heuristic_params(args.io.params.as_deref())?;

    let text = read_input_to_string(args.input.as_deref())?;
    let file: CompoundFile = toml::from_str(&text).context("Failed to parse compound list")?;

    if file.compounds.is_empty() {
        bail!("Compound list is empty. Add at least one [[compounds]] entry.");
    }

    let reports: Vec<CompoundReport> = file
        .compounds
        .iter()
        .map(|spec| screen_compound(spec, &params))
        .collect();

    if ctx.interactive {
        print_screening_summary(&reports);
    }

    super::write_report(
        args.io.output.as_deref(),
        &ScreenReport { compounds: reports },
    )
}

/// Runs every screening component the entry carries enough data for.
/// Formula analysis always runs; the origin classifier needs a complexity
/// score and the probability estimator needs all three structural counts.
fn screen_compound(spec: &CompoundSpec, params: &HeuristicParams) -> CompoundReport {
    let compound = spec.to_compound();

    let analysis = formula::analyze_formula(&compound.formula, &params.formula);

    let origin_class = spec.complexity.map(|complexity| {
        origin::classify_compound(
            &compound.name,
            compound.molecular_weight,
            complexity,
            &params.origin,
        )
        .to_string()
    });

    let estimate = spec.structural_profile().map(|profile| {
        let probability = probability::biotic_probability(&profile, &params.probability);
        EstimateReport {
            probability,
            classification: probability::classify_probability(probability, &params.probability)
                .to_string(),
        }
    });

    CompoundReport {
        name: compound.name,
        formula: compound.formula,
        declared_origin: compound.origin.map(|origin| origin.as_str().to_string()),
        origin_class,
        formula_analysis: FormulaReport {
            biotic_probability: analysis.biotic_probability,
            is_biotic_likely: analysis.is_biotic_likely,
            confidence: analysis.confidence,
        },
        estimate,
    }
}
