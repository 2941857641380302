//! Translation of codons into amino acids.

use crate::error::{AnalysisError, Result};
use crate::normalize::symbols;
use crate::{Amino, Nuc};

/// Placeholder emitted for codons containing anything but `A`, `C`, `G` or `T`.
pub const UNKNOWN_RESIDUE: char = 'X';

/// Trait representing any type that can be used to translate codons into amino acids.
///
/// The crate only ships the [`STANDARD`] code, but any closure `Fn([Nuc; 3]) -> Amino`
/// or 64-entry table works as well.
pub trait GeneticCode {
    /// Map a concrete codon to an amino acid
    fn map_codon(&self, codon: [Nuc; 3]) -> Amino;
}

impl<F: Fn([Nuc; 3]) -> Amino> GeneticCode for F {
    fn map_codon(&self, codon: [Nuc; 3]) -> Amino {
        self(codon)
    }
}

/// A table of amino acids can be used for genetic coding.
///
/// The [`Amino`]s must be ordered to correspond with:
/// `AAA`, `AAC`, `AAG`, `AAT`, `ACA`, `ACC`, `ACG`, `ACT`,
/// `AGA`, `AGC`, `AGG`, `AGT`, `ATA`, `ATC`, `ATG`, `ATT`,
/// `CAA`, `CAC`, `CAG`, `CAT`, `CCA`, `CCC`, `CCG`, `CCT`,
/// `CGA`, `CGC`, `CGG`, `CGT`, `CTA`, `CTC`, `CTG`, `CTT`,
/// `GAA`, `GAC`, `GAG`, `GAT`, `GCA`, `GCC`, `GCG`, `GCT`,
/// `GGA`, `GGC`, `GGG`, `GGT`, `GTA`, `GTC`, `GTG`, `GTT`,
/// `TAA`, `TAC`, `TAG`, `TAT`, `TCA`, `TCC`, `TCG`, `TCT`,
/// `TGA`, `TGC`, `TGG`, `TGT`, `TTA`, `TTC`, `TTG`, `TTT`,
impl GeneticCode for &[Amino; 64] {
    fn map_codon(&self, codon: [Nuc; 3]) -> Amino {
        let [n1, n2, n3] = codon;
        self[16 * n1.rank() + 4 * n2.rank() + n3.rank()]
    }
}

/// Standard code (NCBI table 1): 61 sense codons and the stops `TAA`, `TAG`, `TGA`.
pub const STANDARD: &[Amino; 64] =
    &Amino::lit(b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF");

/// Translate `dna` with the [`STANDARD`] code, stopping before the first stop codon.
///
/// A length that isn't a multiple of 3 yields an empty string, as does a leading stop
/// codon. Codons with unknown bases become [`UNKNOWN_RESIDUE`].
///
/// # Examples
///
/// ```
/// use orfscan::translate;
///
/// assert_eq!(translate("ATGAAATAA"), "MK");
/// assert_eq!(translate("ATGNNNTGG"), "MXW");
/// assert_eq!(translate("ATGA"), "");
/// ```
#[must_use]
pub fn translate(dna: &str) -> String {
    translate_with(dna, STANDARD)
}

/// Like [`translate`], with an explicit [`GeneticCode`].
#[must_use]
pub fn translate_with<G: GeneticCode>(dna: &str, genetic_code: G) -> String {
    match checked_translate_with(dna, genetic_code) {
        Ok(peptide) => peptide,
        Err(err) => {
            tracing::debug!(%err, "translation skipped");
            String::new()
        }
    }
}

/// Like [`translate`], but reports misaligned input instead of returning an empty string.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidCodonAlignment`] if the number of characters in `dna`
/// isn't a multiple of 3.
///
/// # Examples
///
/// ```
/// use orfscan::{AnalysisError, checked_translate};
///
/// assert_eq!(checked_translate("TTTGAGCTCATAAACGAGA"),
///            Err(AnalysisError::InvalidCodonAlignment { length: 19 }));
/// assert_eq!(checked_translate("TTTGAGCTCATAAACGAG").as_deref(), Ok("FELINE"));
/// ```
pub fn checked_translate(dna: &str) -> Result<String> {
    checked_translate_with(dna, STANDARD)
}

/// Like [`checked_translate`], with an explicit [`GeneticCode`].
///
/// # Errors
///
/// See [`checked_translate`].
pub fn checked_translate_with<G: GeneticCode>(dna: &str, genetic_code: G) -> Result<String> {
    let bytes = symbols(dna);
    let (codons, leftover) = bytes.as_chunks::<3>();
    if !leftover.is_empty() {
        return Err(AnalysisError::InvalidCodonAlignment {
            length: bytes.len(),
        });
    }

    let mut peptide = String::with_capacity(codons.len());
    for &codon in codons {
        match Nuc::codon(codon).map(|codon| genetic_code.map_codon(codon)) {
            Some(Amino::Stop) => break,
            Some(amino) => peptide.push(char::from(amino.to_ascii())),
            None => peptide.push(UNKNOWN_RESIDUE),
        }
    }
    Ok(peptide)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn translation_stops_before_stop_codon() {
        assert_eq!(translate("ATGAAATAA"), "MK");
        assert_eq!(translate("ATGTAGAAA"), "M");
        assert_eq!(translate("TGAAAA"), "");
    }

    #[test]
    fn misaligned_input_is_silently_empty() {
        assert_eq!(translate("ATGAAAT"), "");
        assert_eq!(translate("AT"), "");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn checked_translation_reports_misalignment() {
        assert_eq!(
            checked_translate("ATGAAAT"),
            Err(AnalysisError::InvalidCodonAlignment { length: 7 })
        );
        assert_eq!(checked_translate(""), Ok(String::new()));
    }

    #[test]
    fn unknown_codons_become_x() {
        assert_eq!(translate("ATGNNNAAA"), "MXK");
        assert_eq!(translate("ATG-AAAAA"), "MXK");
    }

    #[test]
    fn codons_are_counted_in_characters() {
        assert_eq!(translate("ATGÉAATAA"), "MX");
        let orf = format!("ATGÉAA{}TAA", "AAA".repeat(20));
        assert_eq!(translate(&orf), format!("MX{}", "K".repeat(20)));
        assert_eq!(
            checked_translate("ATGÉ"),
            Err(AnalysisError::InvalidCodonAlignment { length: 4 })
        );
    }

    #[test]
    fn standard_table_has_three_stops() {
        let stops: Vec<_> = Nuc::ALL
            .into_iter()
            .flat_map(|n1| Nuc::ALL.map(move |n2| (n1, n2)))
            .flat_map(|(n1, n2)| Nuc::ALL.map(move |n3| [n1, n2, n3]))
            .filter(|&codon| STANDARD.map_codon(codon) == Amino::Stop)
            .collect();
        assert_eq!(stops, [Nuc::lit(b"TAA"), Nuc::lit(b"TAG"), Nuc::lit(b"TGA")]);
    }

    #[test]
    fn spot_check_standard_table() {
        let cases: [(&[u8; 3], Amino); 8] = [
            (b"ATG", Amino::M),
            (b"TGG", Amino::W),
            (b"ATA", Amino::I),
            (b"AGA", Amino::R),
            (b"TTA", Amino::L),
            (b"GAT", Amino::D),
            (b"TGC", Amino::C),
            (b"CAA", Amino::Q),
        ];
        for (codon, expected) in cases {
            assert_eq!(STANDARD.map_codon(Nuc::lit(codon)), expected);
        }
    }

    #[test]
    fn closures_are_genetic_codes() {
        let everything_is_glycine = |_: [Nuc; 3]| Amino::G;
        assert_eq!(translate_with("ATGTAA", everything_is_glycine), "GG");
    }

    proptest! {
        #[test]
        fn aligned_translation_is_at_most_one_residue_per_codon(dna in "([ACGTN]{3}){0,60}") {
            let peptide = translate(&dna);
            prop_assert!(peptide.len() <= dna.len() / 3);
            prop_assert!(!peptide.contains('*'));
        }
    }
}
