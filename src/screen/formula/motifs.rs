//! Substring motifs that raise a formula's biotic probability.

use super::scanner::CountedRun;

const AMINO_ACID_RUN: CountedRun<'static> = CountedRun {
    elements: b"CHNO",
    tail: None,
};

const NUCLEOTIDE_RUN: CountedRun<'static> = CountedRun {
    elements: b"CHNO",
    tail: Some(b'P'),
};

/// Nucleobase names recognized case-insensitively inside formula text.
const NUCLEOBASES: [&str; 5] = ["adenine", "guanine", "cytosine", "thymine", "uracil"];

/// True when the text carries an amino-acid signature: a fully counted
/// C/H/N/O run, an amine group, or a carboxyl group. Group matching is
/// case-sensitive.
pub fn has_amino_acid_motif(formula: &str) -> bool {
    AMINO_ACID_RUN.is_match(formula) || formula.contains("NH2") || formula.contains("COOH")
}

/// True when the text carries a nucleotide signature: a counted C/H/N/O
/// run capped by phosphorus, the word "phosphate" (case-sensitive), or a
/// nucleobase name (case-insensitive).
pub fn has_nucleotide_motif(formula: &str) -> bool {
    if NUCLEOTIDE_RUN.is_match(formula) || formula.contains("phosphate") {
        return true;
    }

    let lowered = formula.to_lowercase();
    NUCLEOBASES.iter().any(|base| lowered.contains(base))
}
