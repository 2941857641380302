//! Fixed-table regulatory motif scanning.

use crate::AmbiNuc;
use crate::normalize::symbols;

/// A named regulatory pattern.
///
/// A motif matches when any of its `alternatives` matches; alternatives are spelled in
/// IUPAC codes (see [`AmbiNuc`]) and tried in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motif {
    /// Name reported in each [`MotifMatch`].
    pub name: &'static str,
    /// Patterns that count as an occurrence of this motif.
    pub alternatives: &'static [&'static [AmbiNuc]],
}

impl Motif {
    /// Length of the alternative matching at the start of `window`, if any.
    fn match_len(&self, window: &[u8]) -> Option<usize> {
        self.alternatives
            .iter()
            .find(|pattern| {
                window.len() >= pattern.len()
                    && std::iter::zip(pattern.iter(), window)
                        .all(|(code, &b)| code.matches_ascii(b))
            })
            .map(|pattern| pattern.len())
    }
}

/// The regulatory motifs looked for by [`scan`], in reporting order.
pub const MOTIFS: [Motif; 6] = [
    Motif {
        name: "TATA_box",
        alternatives: &[&AmbiNuc::lit(b"TATAWA")],
    },
    Motif {
        name: "CAAT_box",
        alternatives: &[&AmbiNuc::lit(b"CAAT")],
    },
    Motif {
        name: "PolyA_signal",
        alternatives: &[&AmbiNuc::lit(b"AATAAA")],
    },
    Motif {
        name: "Kozak_consensus",
        alternatives: &[&AmbiNuc::lit(b"RCCATGG")],
    },
    Motif {
        name: "Start_codon",
        alternatives: &[&AmbiNuc::lit(b"ATG")],
    },
    Motif {
        name: "Stop_codon",
        alternatives: &[
            &AmbiNuc::lit(b"TAA"),
            &AmbiNuc::lit(b"TAG"),
            &AmbiNuc::lit(b"TGA"),
        ],
    },
];

/// One occurrence of a [`Motif`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotifMatch {
    /// Motif name, e.g. `"TATA_box"`.
    pub motif: String,
    /// 1-based start of the match.
    pub position: usize,
    /// The matched bases.
    pub match_sequence: String,
}

/// Scan `cleaned` for every motif in [`MOTIFS`].
///
/// Motifs are reported in table order; within a motif, matches are leftmost and
/// non-overlapping, left to right. Matches of different motifs may overlap.
///
/// # Examples
///
/// ```
/// use orfscan::scan;
///
/// let hits = scan("TATAAA");
/// assert_eq!(hits[0].motif, "TATA_box");
/// assert_eq!(hits[0].position, 1);
/// ```
#[must_use]
pub fn scan(cleaned: &str) -> Vec<MotifMatch> {
    MOTIFS
        .iter()
        .flat_map(|motif| scan_motif(cleaned, motif))
        .collect()
}

/// Scan `cleaned` for a single motif.
#[must_use]
pub fn scan_motif(cleaned: &str, motif: &Motif) -> Vec<MotifMatch> {
    let bytes = symbols(cleaned);
    let mut matches = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        match motif.match_len(&bytes[pos..]) {
            Some(len) => {
                matches.push(MotifMatch {
                    motif: motif.name.to_owned(),
                    position: pos + 1,
                    match_sequence: bytes[pos..pos + len]
                        .iter()
                        .map(|&b| char::from(b))
                        .collect(),
                });
                pos += len;
            }
            None => pos += 1,
        }
    }
    matches
}
