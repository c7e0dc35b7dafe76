use std::io::{self, Write};

use biosift::{Alkane, FormationPathway, ImpactEvent};

use crate::input::CompoundReport;
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_screening_summary(reports: &[CompoundReport]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let likely = reports
        .iter()
        .filter(|report| report.formula_analysis.is_biotic_likely)
        .count();
    let estimated = reports
        .iter()
        .filter(|report| report.estimate.is_some())
        .count();

    let rows = vec![
        ("Compounds", format!("{}", reports.len())),
        ("Likely Biotic", format!("{}", likely)),
        ("With Estimate", format!("{}", estimated)),
    ];
    print_kv_table(&mut out, "Screening Summary", &rows);

    print_verdict_table(&mut out, reports);
}

fn print_verdict_table(out: &mut impl Write, reports: &[CompoundReport]) {
    let name_w = 12usize;
    let formula_w = 13usize;
    let origin_w = 9usize;
    let sep_overhead = 8;
    let est_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + formula_w + origin_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ Compound Verdicts ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{n_line}┬{f_line}┬{o_line}┬{e_line}┐",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        f_line = "─".repeat(formula_w + 2),
        o_line = "─".repeat(origin_w + 2),
        e_line = "─".repeat(est_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:<formula_w$} │ {:<origin_w$} │ {:<est_w$} │",
        INDENT,
        "Compound",
        "Formula",
        "Origin",
        "Estimate",
        name_w = name_w,
        formula_w = formula_w,
        origin_w = origin_w,
        est_w = est_w
    );
    let _ = writeln!(
        out,
        "{}├{n_line}┼{f_line}┼{o_line}┼{e_line}┤",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        f_line = "─".repeat(formula_w + 2),
        o_line = "─".repeat(origin_w + 2),
        e_line = "─".repeat(est_w + 2)
    );

    for report in reports {
        let formula_cell = format!(
            "{:.2} {}",
            report.formula_analysis.biotic_probability,
            if report.formula_analysis.is_biotic_likely {
                "likely"
            } else {
                "unlikely"
            }
        );
        let origin_cell = report.origin_class.as_deref().unwrap_or("-");
        let est_cell = report
            .estimate
            .as_ref()
            .map(|estimate| format!("{:.2} {}", estimate.probability, estimate.classification))
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:<formula_w$} │ {:<origin_w$} │ {:<est_w$} │",
            INDENT,
            truncate(&report.name, name_w),
            formula_cell,
            origin_cell,
            est_cell,
            name_w = name_w,
            formula_w = formula_w,
            origin_w = origin_w,
            est_w = est_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{n_line}┴{f_line}┴{o_line}┴{e_line}┘",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        f_line = "─".repeat(formula_w + 2),
        o_line = "─".repeat(origin_w + 2),
        e_line = "─".repeat(est_w + 2)
    );
}

pub fn print_impact_summary(event: &ImpactEvent) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Velocity", format!("{:.1} km/s", event.velocity)),
        ("Angle", format!("{:.1}° from vertical", event.angle)),
        ("Composition", event.composition.clone()),
    ];

    print_kv_table(&mut out, "Impact Event", &rows);
}

pub fn print_pathways(pathways: &[FormationPathway]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let num_w = 3usize;
    let sep_overhead = 6;
    let label_w = SAFE_TABLE_WIDTH.saturating_sub(num_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ Formation Pathways ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{n_line}┬{l_line}┐",
        INDENT,
        n_line = "─".repeat(num_w + 2),
        l_line = "─".repeat(label_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:>num_w$} │ {:<label_w$} │",
        INDENT,
        "#",
        "Pathway",
        num_w = num_w,
        label_w = label_w
    );
    let _ = writeln!(
        out,
        "{}├{n_line}┼{l_line}┤",
        INDENT,
        n_line = "─".repeat(num_w + 2),
        l_line = "─".repeat(label_w + 2)
    );

    for (idx, pathway) in pathways.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}│ {:>num_w$} │ {:<label_w$} │",
            INDENT,
            idx + 1,
            pathway.label(),
            num_w = num_w,
            label_w = label_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{n_line}┴{l_line}┘",
        INDENT,
        n_line = "─".repeat(num_w + 2),
        l_line = "─".repeat(label_w + 2)
    );
}

pub fn print_molecules(molecules: &[Alkane]) {
    if molecules.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out, "{}┌─ Candidate Molecules ─┐", INDENT);
    let _ = writeln!(out, "{}┌────────────┬──────────┬────────────┐", INDENT);
    let _ = writeln!(
        out,
        "{}│ {:<10} │ {:<8} │ {:>10} │",
        INDENT, "Molecule", "Formula", "Wt (g/mol)"
    );
    let _ = writeln!(out, "{}├────────────┼──────────┼────────────┤", INDENT);

    for alkane in molecules {
        let _ = writeln!(
            out,
            "{}│ {:<10} │ {:<8} │ {:>10.2} │",
            INDENT,
            alkane.name(),
            alkane.formula(),
            alkane.molecular_weight()
        );
    }

    let _ = writeln!(out, "{}└────────────┴──────────┴────────────┘", INDENT);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
