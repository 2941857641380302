//! The analysis facade: one call per raw sequence, one self-contained result.

use std::fmt::{Display, Formatter};

use crate::error::{AnalysisError, Result};
use crate::motif::{MotifMatch, scan};
use crate::normalize::{DEFAULT_MAX_INVALID_FRACTION, Sequence};
use crate::orf::{DEFAULT_MIN_AMINO_ACIDS, Orf, find_orfs};
use crate::protein::{Protein, predict, round2};

/// `sequence_id` reported for sequences that fail validation.
pub const UNKNOWN_SEQUENCE_ID: &str = "unknown";

/// Tunable thresholds for [`Analyzer`].
///
/// With the `serde` feature, missing fields fall back to their defaults, so a partial JSON
/// object such as `{"min_orf_amino_acids": 10}` is a valid configuration.
///
/// # Examples
///
/// ```
/// use orfscan::AnalysisConfig;
///
/// let config = AnalysisConfig::default().with_min_orf_amino_acids(10);
/// assert_eq!(config.min_orf_amino_acids, 10);
/// assert_eq!(config.max_invalid_fraction, 0.02);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AnalysisConfig {
    /// Minimum ORF size in amino acids (stop codon included).
    ///
    /// **Default**: 30
    pub min_orf_amino_acids: usize,

    /// Largest tolerated fraction of characters outside `A/T/G/C/N`.
    ///
    /// **Default**: 0.02
    pub max_invalid_fraction: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_orf_amino_acids: DEFAULT_MIN_AMINO_ACIDS,
            max_invalid_fraction: DEFAULT_MAX_INVALID_FRACTION,
        }
    }
}

impl AnalysisConfig {
    /// Set [`min_orf_amino_acids`](Self::min_orf_amino_acids).
    #[must_use]
    pub fn with_min_orf_amino_acids(mut self, min_orf_amino_acids: usize) -> Self {
        self.min_orf_amino_acids = min_orf_amino_acids;
        self
    }

    /// Set [`max_invalid_fraction`](Self::max_invalid_fraction).
    #[must_use]
    pub fn with_max_invalid_fraction(mut self, max_invalid_fraction: f64) -> Self {
        self.max_invalid_fraction = max_invalid_fraction;
        self
    }
}

/// Kind of sequence reported. No RNA/protein detection is attempted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceType {
    /// Deoxyribonucleic acid
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "DNA"))]
    Dna,
}

impl SequenceType {
    /// Return the label used in reports
    #[must_use]
    pub const fn to_str(self) -> &'static str {
        match self {
            Self::Dna => "DNA",
        }
    }
}

impl Display for SequenceType {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        self.to_str().fmt(f)
    }
}

/// Everything learned about a sequence that passed validation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SequenceReport {
    /// Always [`SequenceType::Dna`].
    pub sequence_type: SequenceType,
    /// Length of `cleaned_sequence` in characters.
    pub length: usize,
    /// Share of `G` and `C`, in percent, rounded to 2 decimals (ties to even).
    pub gc_percent: f64,
    /// Forward-strand ORFs, see [`find_orfs`].
    pub orfs: Vec<Orf>,
    /// Regulatory motif hits, see [`scan`].
    pub motifs: Vec<MotifMatch>,
    /// The normalized input.
    pub cleaned_sequence: String,
}

impl SequenceReport {
    /// Translate every ORF and estimate its product's properties.
    ///
    /// # Errors
    ///
    /// Fails with [`AnalysisError::MissingSequenceInput`] if an ORF carries no bases, which
    /// [`find_orfs`] never produces.
    pub fn proteins(&self) -> Result<Vec<Protein>> {
        self.orfs.iter().map(predict).collect()
    }
}

/// Outcome of [`analyze`].
///
/// With the `serde` feature this serializes to the flat JSON object consumed by tool
/// layers: `{"valid": true, "sequence_type": ..., ...}` or
/// `{"valid": false, "error": ..., "sequence_id": "unknown"}`.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisResult {
    /// The sequence passed validation.
    Valid(SequenceReport),
    /// The sequence was rejected.
    Invalid {
        /// Why validation failed.
        error: AnalysisError,
        /// Always [`UNKNOWN_SEQUENCE_ID`].
        sequence_id: String,
    },
}

impl AnalysisResult {
    /// Whether the sequence passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The report, if the sequence was valid.
    #[must_use]
    pub fn report(&self) -> Option<&SequenceReport> {
        match self {
            Self::Valid(report) => Some(report),
            Self::Invalid { .. } => None,
        }
    }

    /// The validation error, if the sequence was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid { error, .. } => Some(error),
        }
    }

    /// Convert into a [`Result`], for callers that prefer `?`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of an [`Invalid`](Self::Invalid) result.
    pub fn into_report(self) -> Result<SequenceReport> {
        match self {
            Self::Valid(report) => Ok(report),
            Self::Invalid { error, .. } => Err(error),
        }
    }
}

/// Stateless sequence analyzer with configurable thresholds.
///
/// Cheap to copy and safe to share between threads.
///
/// # Examples
///
/// ```
/// use orfscan::{AnalysisConfig, Analyzer};
///
/// let analyzer = Analyzer::new(AnalysisConfig::default().with_min_orf_amino_acids(2));
/// let results = analyzer.analyze_batch(&["ATGAAATAA", "", "gcat"]);
/// assert_eq!(results[0].report().unwrap().orfs.len(), 1);
/// assert!(!results[1].is_valid());
/// assert_eq!(results[2].report().unwrap().gc_percent, 50.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Build an analyzer from a configuration.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Normalize, validate and analyze one raw sequence.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(raw_len = raw.len()))]
    pub fn analyze(&self, raw: &str) -> AnalysisResult {
        match Sequence::parse_with_tolerance(raw, self.config.max_invalid_fraction) {
            Ok(sequence) => AnalysisResult::Valid(self.report(sequence)),
            Err(error) => {
                tracing::debug!(%error, "sequence rejected");
                AnalysisResult::Invalid {
                    error,
                    sequence_id: UNKNOWN_SEQUENCE_ID.to_owned(),
                }
            }
        }
    }

    /// Analyze an already validated sequence.
    #[must_use]
    pub fn report(&self, sequence: Sequence) -> SequenceReport {
        let length = sequence.char_len();
        let cleaned_sequence = sequence.into_string();
        let gc_percent = gc_percent(&cleaned_sequence);
        let orfs = find_orfs(&cleaned_sequence, self.config.min_orf_amino_acids);
        let motifs = scan(&cleaned_sequence);
        tracing::debug!(
            length,
            gc_percent,
            orfs = orfs.len(),
            motifs = motifs.len(),
            "sequence analyzed"
        );
        SequenceReport {
            sequence_type: SequenceType::Dna,
            length,
            gc_percent,
            orfs,
            motifs,
            cleaned_sequence,
        }
    }

    /// Analyze many independent sequences, preserving input order.
    ///
    /// With the `rayon` feature the sequences are spread over rayon's global thread pool.
    #[must_use]
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, raws: &[S]) -> Vec<AnalysisResult> {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            raws.par_iter().map(|raw| self.analyze(raw.as_ref())).collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            raws.iter().map(|raw| self.analyze(raw.as_ref())).collect()
        }
    }
}

/// Analyze `raw` with the default [`AnalysisConfig`].
///
/// # Examples
///
/// ```
/// use orfscan::{analyze, normalize};
///
/// let raw = "tata aa gcat\n";
/// let result = analyze(raw);
/// let report = result.report().unwrap();
/// assert_eq!(report.cleaned_sequence, normalize(raw));
/// assert_eq!(report.length, 10);
/// assert_eq!(report.motifs[0].motif, "TATA_box");
///
/// assert!(!analyze("   ").is_valid());
/// ```
#[must_use]
pub fn analyze(raw: &str) -> AnalysisResult {
    Analyzer::default().analyze(raw)
}

/// Percentage of `G` and `C` characters in `cleaned`, rounded to 2 decimals.
///
/// Every character counts towards the denominator, including `N` and noise.
/// An empty sequence has 0% GC.
///
/// # Examples
///
/// ```
/// use orfscan::gc_percent;
///
/// assert_eq!(gc_percent("GCAT"), 50.0);
/// assert_eq!(gc_percent("AAAA"), 0.0);
/// assert_eq!(gc_percent("GCGC"), 100.0);
/// ```
#[must_use]
pub fn gc_percent(cleaned: &str) -> f64 {
    let (gc, total) = cleaned.chars().fold((0usize, 0usize), |(gc, total), c| {
        (gc + usize::from(matches!(c, 'G' | 'C')), total + 1)
    });
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss, reason = "sequence lengths are far below 2^52")]
    let fraction = gc as f64 / total as f64;
    round2(fraction * 100.0)
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::AnalysisResult;

    impl Serialize for AnalysisResult {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Valid(report) => {
                    let mut state = serializer.serialize_struct("AnalysisResult", 7)?;
                    state.serialize_field("valid", &true)?;
                    state.serialize_field("sequence_type", &report.sequence_type)?;
                    state.serialize_field("length", &report.length)?;
                    state.serialize_field("gc_percent", &report.gc_percent)?;
                    state.serialize_field("orfs", &report.orfs)?;
                    state.serialize_field("motifs", &report.motifs)?;
                    state.serialize_field("cleaned_sequence", &report.cleaned_sequence)?;
                    state.end()
                }
                Self::Invalid { error, sequence_id } => {
                    let mut state = serializer.serialize_struct("AnalysisResult", 3)?;
                    state.serialize_field("valid", &false)?;
                    state.serialize_field("error", &error.to_string())?;
                    state.serialize_field("sequence_id", sequence_id)?;
                    state.end()
                }
            }
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_result_json_shape() {
        let analyzer = Analyzer::new(AnalysisConfig::default().with_min_orf_amino_acids(1));
        let value = serde_json::to_value(analyzer.analyze("ATGAAATAA")).unwrap();
        assert_eq!(
            value,
            json!({
                "valid": true,
                "sequence_type": "DNA",
                "length": 9,
                "gc_percent": 11.11,
                "orfs": [
                    {"start": 1, "end": 9, "frame": 1, "length": 9, "sequence": "ATGAAATAA"}
                ],
                "motifs": [
                    {"motif": "Start_codon", "position": 1, "match_sequence": "ATG"},
                    {"motif": "Stop_codon", "position": 2, "match_sequence": "TGA"},
                    {"motif": "Stop_codon", "position": 7, "match_sequence": "TAA"}
                ],
                "cleaned_sequence": "ATGAAATAA"
            })
        );
    }

    #[test]
    fn invalid_result_json_shape() {
        let value = serde_json::to_value(analyze("")).unwrap();
        assert_eq!(
            value,
            json!({"valid": false, "error": "Empty sequence", "sequence_id": "unknown"})
        );
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"min_orf_amino_acids": 10}"#).unwrap();
        assert_eq!(config, AnalysisConfig::default().with_min_orf_amino_acids(10));
    }
}
