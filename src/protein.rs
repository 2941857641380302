//! Coarse physicochemical estimates for translated ORFs.
//!
//! Molecular weight uses a flat per-residue mass. Hydrophobicity is the mean Kyte-Doolittle
//! hydropathy. Signal peptides are detected by an N-terminal hydrophobic run.

use crate::error::{AnalysisError, Result};
use crate::{Amino, Orf, translate};

/// Average residue mass used for the molecular weight estimate, in Daltons.
pub const AVERAGE_RESIDUE_MASS: f64 = 110.0;

/// Proteins shorter than this are never flagged as carrying a signal peptide.
pub const SIGNAL_PEPTIDE_MIN_LEN: usize = 20;
/// Number of N-terminal residues inspected for a hydrophobic run.
pub const SIGNAL_PEPTIDE_WINDOW: usize = 30;
/// Consecutive hydrophobic-core residues needed to flag a signal peptide.
pub const SIGNAL_PEPTIDE_RUN: usize = 5;

/// Estimated properties of an amino acid sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProteinProperties {
    /// Residue count times [`AVERAGE_RESIDUE_MASS`].
    pub molecular_weight: f64,
    /// Mean Kyte-Doolittle hydropathy, rounded to 2 decimals.
    pub hydrophobicity: f64,
}

/// Estimate molecular weight and mean hydropathy of `aa`.
///
/// Residues outside the 20 standard amino acids count towards the length but score 0
/// hydropathy. An empty sequence yields all zeros.
///
/// # Examples
///
/// ```
/// use orfscan::compute_properties;
///
/// let props = compute_properties("MK");
/// assert_eq!(props.molecular_weight, 220.0);
/// assert_eq!(props.hydrophobicity, -1.0);
/// ```
#[must_use]
pub fn compute_properties(aa: &str) -> ProteinProperties {
    let (len, total) = aa.chars().fold((0usize, 0.0), |(len, total), c| {
        (len + 1, total + residue(c).map_or(0.0, Amino::hydropathy))
    });
    if len == 0 {
        return ProteinProperties::default();
    }

    #[allow(clippy::cast_precision_loss, reason = "protein lengths are far below 2^52")]
    let len = len as f64;
    ProteinProperties {
        molecular_weight: len * AVERAGE_RESIDUE_MASS,
        hydrophobicity: round2(total / len),
    }
}

/// Whether `aa` looks like it starts with a signal peptide.
///
/// Requires at least [`SIGNAL_PEPTIDE_MIN_LEN`] residues, then looks for
/// [`SIGNAL_PEPTIDE_RUN`] consecutive residues from `A/L/I/V/F/M` within the first
/// [`SIGNAL_PEPTIDE_WINDOW`] residues.
///
/// # Examples
///
/// ```
/// use orfscan::detect_signal_peptide;
///
/// let hydrophobic = format!("M{}{}", "L".repeat(12), "K".repeat(10));
/// assert!(detect_signal_peptide(&hydrophobic));
/// assert!(!detect_signal_peptide(&"K".repeat(23)));
/// ```
#[must_use]
pub fn detect_signal_peptide(aa: &str) -> bool {
    if aa.chars().count() < SIGNAL_PEPTIDE_MIN_LEN {
        return false;
    }

    let mut run = 0;
    for c in aa.chars().take(SIGNAL_PEPTIDE_WINDOW) {
        if residue(c).is_some_and(Amino::is_hydrophobic_core) {
            run += 1;
            if run >= SIGNAL_PEPTIDE_RUN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

// Residues are matched case-sensitively, like the lookup tables they come from.
fn residue(c: char) -> Option<Amino> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii_uppercase)
        .and_then(Amino::from_ascii)
}

// Round to 2 decimals, halves to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// A translated ORF with its estimated properties.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protein {
    /// `ORF_{start}_{end}` of the source ORF.
    pub orf_id: String,
    /// Translated sequence, stop codon excluded.
    pub aa_sequence: String,
    /// Number of residues in `aa_sequence`.
    pub length: usize,
    /// Molecular weight and hydrophobicity.
    pub properties: ProteinProperties,
    /// Outcome of [`detect_signal_peptide`].
    pub signal_peptide: bool,
}

/// Translate an ORF and estimate the properties of its product.
///
/// # Errors
///
/// Returns [`AnalysisError::MissingSequenceInput`] if the ORF carries no nucleotides.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), orfscan::AnalysisError> {
/// use orfscan::{find_orfs, predict};
///
/// let orf = &find_orfs("ATGAAATAA", 1)[0];
/// let protein = predict(orf)?;
/// assert_eq!(protein.orf_id, "ORF_1_9");
/// assert_eq!(protein.aa_sequence, "MK");
/// # Ok(())
/// # }
/// ```
pub fn predict(orf: &Orf) -> Result<Protein> {
    predict_sequence(&orf.sequence, orf.start, orf.end)
}

/// Like [`predict`] for a bare nucleotide string and its coordinates.
///
/// # Errors
///
/// Returns [`AnalysisError::MissingSequenceInput`] if `dna` is empty.
pub fn predict_sequence(dna: &str, start: usize, end: usize) -> Result<Protein> {
    if dna.is_empty() {
        return Err(AnalysisError::MissingSequenceInput);
    }

    let aa_sequence = translate(dna);
    let properties = compute_properties(&aa_sequence);
    let signal_peptide = detect_signal_peptide(&aa_sequence);
    tracing::trace!(start, end, residues = aa_sequence.len(), signal_peptide, "protein");
    Ok(Protein {
        orf_id: format!("ORF_{start}_{end}"),
        length: aa_sequence.chars().count(),
        aa_sequence,
        properties,
        signal_peptide,
    })
}
