//! Open reading frame detection on the forward strand.
//!
//! An ORF starts at an `ATG` and ends with the first in-frame stop codon (`TAA`, `TAG` or
//! `TGA`) after it. Each reading frame is scanned independently, and every start codon gets
//! its own inner scan, so nested ORFs sharing a stop codon are all reported. Starts without
//! a downstream stop are dropped.

use crate::normalize::{char_slice, symbols};

/// Default minimum ORF size, in amino acids (the stop codon counts as one).
pub const DEFAULT_MIN_AMINO_ACIDS: usize = 30;

const START_CODON: [u8; 3] = *b"ATG";
const STOP_CODONS: [[u8; 3]; 3] = [*b"TAA", *b"TAG", *b"TGA"];

/// An open reading frame within a cleaned sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orf {
    /// 1-based position of the `A` in `ATG`.
    pub start: usize,
    /// 1-based, inclusive position of the stop codon's last base.
    pub end: usize,
    /// Reading frame, `1`, `2` or `3` for forward offsets 0, 1 and 2.
    pub frame: u8,
    /// Span in nucleotides, stop codon included.
    pub length: usize,
    /// The ORF's bases, start through stop codon.
    pub sequence: String,
}

impl Orf {
    /// Identifier used by the protein stage, `ORF_{start}_{end}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orfscan::find_orfs;
    ///
    /// let orfs = find_orfs("CCATGAAATAA", 1);
    /// assert_eq!(orfs[0].id(), "ORF_3_11");
    /// ```
    #[must_use]
    pub fn id(&self) -> String {
        format!("ORF_{}_{}", self.start, self.end)
    }
}

/// Find ORFs spanning at least `min_amino_acids * 3` nucleotides.
///
/// ORFs are reported frame by frame (frame 1 first), and by start position within a frame.
///
/// # Examples
///
/// ```
/// use orfscan::find_orfs;
///
/// let seq = format!("ATG{}TAA", "AAA".repeat(29));
/// let orfs = find_orfs(&seq, 10);
/// assert_eq!(orfs.len(), 1);
/// assert_eq!((orfs[0].start, orfs[0].end, orfs[0].frame), (1, 93, 1));
/// ```
#[must_use]
pub fn find_orfs(cleaned: &str, min_amino_acids: usize) -> Vec<Orf> {
    let bytes = symbols(cleaned);
    let min_len = min_amino_acids.saturating_mul(3);

    let mut orfs = Vec::new();
    for (offset, codons) in reading_frames(&bytes).into_iter().enumerate() {
        for (k, codon) in codons.iter().enumerate() {
            if *codon != START_CODON {
                continue;
            }
            let Some(stop) = codons[k + 1..]
                .iter()
                .position(|codon| STOP_CODONS.contains(codon))
            else {
                continue;
            };

            // 0-based offsets of the start and stop codons
            let i = offset + 3 * k;
            let j = i + 3 * (stop + 1);
            let length = j + 3 - i;
            if length < min_len {
                continue;
            }
            tracing::trace!(start = i + 1, end = j + 3, frame = offset + 1, "orf");
            orfs.push(Orf {
                start: i + 1,
                end: j + 3,
                frame: frame_number(offset),
                length,
                sequence: char_slice(cleaned, i, j + 3),
            });
        }
    }
    orfs
}

/// [`find_orfs`] with the default 30 amino acid minimum.
#[must_use]
pub fn find_orfs_default(cleaned: &str) -> Vec<Orf> {
    find_orfs(cleaned, DEFAULT_MIN_AMINO_ACIDS)
}

/// Return all 3 forward reading frames of codons, discarding trailing partial codons.
fn reading_frames(seq: &[u8]) -> [&[[u8; 3]]; 3] {
    std::array::from_fn(|i| seq.get(i..).unwrap_or_default().as_chunks().0)
}

fn frame_number(offset: usize) -> u8 {
    match offset {
        0 => 1,
        1 => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_orf_with_lowered_threshold() {
        let seq = format!("ATG{}TAA", "AAA".repeat(29));
        let orfs = find_orfs(&seq, 10);
        assert_eq!(
            orfs,
            [Orf {
                start: 1,
                end: 93,
                frame: 1,
                length: 93,
                sequence: seq.clone(),
            }]
        );
    }

    #[test]
    fn default_threshold_is_ninety_nucleotides() {
        let exactly = format!("ATG{}TAA", "AAA".repeat(28));
        assert_eq!(exactly.len(), 90);
        assert_eq!(find_orfs_default(&exactly).len(), 1);

        let short = format!("ATG{}TAA", "AAA".repeat(27));
        assert!(find_orfs_default(&short).is_empty());
    }

    #[test]
    fn nested_starts_share_a_stop() {
        // frame 1: ATG ATG AAA TAA
        let orfs = find_orfs("ATGATGAAATAA", 1);
        let spans: Vec<_> = orfs.iter().map(|orf| (orf.start, orf.end)).collect();
        assert_eq!(spans, [(1, 12), (4, 12)]);
    }

    #[test]
    fn scanning_resumes_after_the_start_codon() {
        // The second ORF starts after the first one's stop codon.
        let orfs = find_orfs("ATGAAATAAATGCCCTAG", 1);
        let spans: Vec<_> = orfs.iter().map(|orf| (orf.start, orf.end)).collect();
        assert_eq!(spans, [(1, 9), (10, 18)]);
    }

    #[test]
    fn frames_are_reported_one_based() {
        let orfs = find_orfs("CATGAAATGAC", 1);
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].frame, 2);
        assert_eq!((orfs[0].start, orfs[0].end), (2, 10));
        assert_eq!(orfs[0].sequence, "ATGAAATGA");

        let orfs = find_orfs("CCATGTAG", 1);
        assert_eq!(orfs[0].frame, 3);
        assert_eq!(orfs[0].id(), "ORF_3_8");
    }

    #[test]
    fn open_ended_starts_are_dropped() {
        assert!(find_orfs("ATGAAACCC", 1).is_empty());
        assert!(find_orfs("ATGAAATA", 1).is_empty());
    }

    #[test]
    fn out_of_frame_stops_are_ignored() {
        // TAA at offset 4 is in frame 2, not frame 1.
        assert!(find_orfs("ATGATAAGG", 1).is_empty());
    }

    #[test]
    fn tiny_inputs() {
        assert!(find_orfs("", 1).is_empty());
        assert!(find_orfs("AT", 1).is_empty());
        assert!(find_orfs("ATG", 1).is_empty());
    }

    #[test]
    fn zero_threshold_keeps_minimal_orfs() {
        let orfs = find_orfs("ATGTGA", 0);
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].length, 6);
        assert_eq!(orfs[0].sequence, "ATGTGA");
    }

    #[test]
    fn n_breaks_codons() {
        assert!(find_orfs("ATNAAATAA", 1).is_empty());
        let orfs = find_orfs("ATGNNNTAA", 1);
        assert_eq!(orfs[0].sequence, "ATGNNNTAA");
    }

    proptest! {
        #[test]
        fn every_orf_is_well_formed(dna in "[ACGT]{0,400}", min_aa in 0usize..40) {
            for orf in find_orfs(&dna, min_aa) {
                prop_assert_eq!(orf.length, orf.end - orf.start + 1);
                prop_assert_eq!(orf.length % 3, 0);
                prop_assert!(orf.length >= min_aa * 3);
                prop_assert_eq!((orf.start - 1) % 3 + 1, usize::from(orf.frame));
                prop_assert_eq!(&dna[orf.start - 1..orf.end], orf.sequence.as_str());
                prop_assert!(orf.sequence.starts_with("ATG"));
                let codons = orf.sequence.as_bytes().as_chunks::<3>().0;
                let stops = codons[1..].iter().filter(|c| STOP_CODONS.contains(c)).count();
                prop_assert_eq!(stops, 1);
                prop_assert!(STOP_CODONS.contains(&codons[codons.len() - 1]));
            }
        }
    }
}
